//! End-to-end exercise of the public loading API against a realistic
//! policy document, the way an embedding audio service would use it.

use ap_config::{
    duplicate_rules, is_capture_usage, is_render_usage, load, Behavior, LoadError, PolicyHandle,
    PolicyRuleSet, Usage, Violation,
};

const PRODUCT_POLICY: &str = r#"{
    "product": "workstation",
    "audio_policy_rules": [
        { "active": "communication", "affected": "media", "behavior": "duck" },
        { "active": "communication", "affected": "background", "behavior": "mute" },
        { "active": "system_agent", "affected": "media", "behavior": "duck" },
        { "active": "interruption", "affected": "media", "behavior": "duck" },
        { "active": "foreground", "affected": "media", "behavior": "duck" },
        { "active": "ultrasound", "affected": "ultrasound", "behavior": "mute" },
        { "active": "media", "affected": "background", "behavior": "none" }
    ]
}"#;

#[test]
fn product_policy_loads_and_classifies() {
    let set = load(PRODUCT_POLICY).unwrap();
    assert_eq!(set.len(), 7);

    // Order carries precedence for the arbitration engine.
    assert_eq!(set.rules()[0].active, Usage::Communication);
    assert_eq!(set.rules()[0].behavior, Behavior::Duck);
    assert_eq!(set.rules()[6].behavior, Behavior::None);

    // The engine classifies live streams with the same vocabulary.
    for rule in &set {
        let active = rule.active.as_str();
        assert!(is_render_usage(active) || is_capture_usage(active));
    }

    assert!(duplicate_rules(set.rules()).is_empty());
}

#[test]
fn roundtrip_through_wire_format() {
    let set = load(PRODUCT_POLICY).unwrap();
    let reloaded = load(&set.to_json().unwrap()).unwrap();
    assert_eq!(set, reloaded);
}

#[test]
fn misspelled_usage_fails_load_entirely() {
    let doc = PRODUCT_POLICY.replace("\"system_agent\"", "\"system-agent\"");
    let err = load(&doc).unwrap_err();
    match err {
        LoadError::Invalid(violations) => {
            assert!(violations
                .iter()
                .all(|v| matches!(v, Violation::UnknownUsage { .. })));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn reload_replaces_published_policy_atomically() {
    let handle = PolicyHandle::new(PolicyRuleSet::embedded_default());
    let engine_view = handle.current();

    let reloaded = load(PRODUCT_POLICY).unwrap();
    handle.replace(reloaded.clone());

    // The engine's old snapshot is intact; new readers see the reload.
    assert_eq!(*engine_view, PolicyRuleSet::embedded_default());
    assert_eq!(*handle.current(), reloaded);
}

#[test]
fn rejected_reload_leaves_published_policy_unchanged() {
    let handle = PolicyHandle::new(PolicyRuleSet::embedded_default());

    let broken = PRODUCT_POLICY.replace("\"duck\"", "\"quack\"");
    assert!(load(&broken).is_err());

    assert_eq!(*handle.current(), PolicyRuleSet::embedded_default());
}
