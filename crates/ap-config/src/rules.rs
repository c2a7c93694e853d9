//! Policy rule data model.
//!
//! These types are the validated form of the policy document: every usage
//! and behavior they carry has already passed the loader's membership
//! checks. The raw wire format is handled in [`crate::validate`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::behavior::Behavior;
use crate::usage::Usage;

/// Required top-level key holding the rule array.
pub const DOCUMENT_KEY: &str = "audio_policy_rules";

/// One arbitration directive: while a stream of usage `active` is active,
/// apply `behavior` to any stream of usage `affected`.
///
/// `active == affected` is legal and means a self-effect, e.g. a usage
/// muting additional instances of itself. Rules are directional; a rule in
/// one direction implies nothing about the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PolicyRule {
    pub active: Usage,
    pub affected: Usage,
    pub behavior: Behavior,
}

impl PolicyRule {
    pub fn new(active: Usage, affected: Usage, behavior: Behavior) -> Self {
        Self {
            active,
            affected,
            behavior,
        }
    }

    /// Whether this rule applies a usage's behavior to itself.
    pub fn is_self_affecting(&self) -> bool {
        self.active == self.affected
    }
}

impl std::fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "active={} affected={} behavior={}",
            self.active, self.affected, self.behavior
        )
    }
}

/// The policy document in its wire shape, used to serialize a validated
/// rule set back to JSON. Unknown top-level fields present in the source
/// document are tolerated on load but not preserved here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocument {
    pub audio_policy_rules: Vec<PolicyRule>,
}

/// A validated, ordered, immutable set of policy rules.
///
/// Document order is preserved exactly: the downstream arbitration engine
/// may attach precedence semantics to it. There is no mutation API; a
/// configuration reload produces a whole new value (see
/// [`crate::handle::PolicyHandle`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRuleSet {
    rules: Vec<PolicyRule>,
}

impl PolicyRuleSet {
    pub(crate) fn new(rules: Vec<PolicyRule>) -> Self {
        Self { rules }
    }

    /// The rules in original document order.
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PolicyRule> {
        self.rules.iter()
    }

    /// Serialize back to the wire document format. Reloading the output
    /// yields an equal rule set.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&PolicyDocument {
            audio_policy_rules: self.rules.clone(),
        })
    }

    /// The policy document embedded in the binary, for callers that want a
    /// sane fallback when no document is provisioned.
    pub fn embedded_default() -> Self {
        crate::validate::load(DEFAULT_POLICY_JSON)
            .expect("embedded default policy document is invalid")
    }
}

impl<'a> IntoIterator for &'a PolicyRuleSet {
    type Item = &'a PolicyRule;
    type IntoIter = std::slice::Iter<'a, PolicyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Embedded default policy document.
const DEFAULT_POLICY_JSON: &str = include_str!("schemas/audio_policy.default.json");
