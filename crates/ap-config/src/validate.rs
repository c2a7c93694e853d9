//! Policy document loading and validation.
//!
//! Loading is a single synchronous pass over the raw text, all-or-nothing:
//! parse, structural validation, semantic validation, materialization. A
//! rejected document never yields a partial rule set, since an incomplete
//! arbitration policy could mask audio routing defects.
//!
//! Structural and semantic passes each collect every violation they find
//! before reporting, so a configuration author gets one actionable error
//! report per round trip instead of one error per attempt.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::behavior::Behavior;
use crate::rules::{PolicyRule, PolicyRuleSet, DOCUMENT_KEY};
use crate::usage::Usage;

/// Which usage field of a rule a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageField {
    Active,
    Affected,
}

impl UsageField {
    fn as_str(self) -> &'static str {
        match self {
            UsageField::Active => "active",
            UsageField::Affected => "affected",
        }
    }
}

impl std::fmt::Display for UsageField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation violation, located within the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The document does not match the required shape.
    #[error("{path}: {reason}")]
    Structural { path: String, reason: String },

    /// A rule references a usage outside the recognized vocabulary.
    #[error("rule {index}: field `{field}` references unknown usage \"{value}\"")]
    UnknownUsage {
        index: usize,
        field: UsageField,
        value: String,
    },

    /// A rule references a behavior outside the recognized vocabulary.
    #[error("rule {index}: unknown behavior \"{value}\"")]
    UnknownBehavior { index: usize, value: String },
}

/// Errors from [`load`]. All variants abort the load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input is not well-formed JSON. The underlying error display
    /// carries the offending line and column.
    #[error("malformed policy document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but failed validation. Holds every violation
    /// found in the failing pass.
    #[error("policy document rejected with {} violation(s)", .0.len())]
    Invalid(Vec<Violation>),
}

impl LoadError {
    /// The collected violations, empty for parse errors.
    pub fn violations(&self) -> &[Violation] {
        match self {
            LoadError::Parse(_) => &[],
            LoadError::Invalid(violations) => violations,
        }
    }
}

/// An exact-duplicate rule triple. Duplicates are legal but almost always
/// an authoring mistake, so they are reported without failing the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRule {
    /// Index of the first occurrence.
    pub first_index: usize,
    /// Index of the repeated occurrence.
    pub duplicate_index: usize,
    pub rule: PolicyRule,
}

/// Load and validate a policy document from raw JSON text.
///
/// On success every rule in the returned set has passed both structural
/// and semantic checks, in original document order. Duplicate triples are
/// logged as warnings; callers that need them programmatically can rescan
/// with [`duplicate_rules`].
///
/// The loader is stateless and re-entrant: concurrent calls share nothing
/// but the constant vocabularies.
pub fn load(raw: &str) -> Result<PolicyRuleSet, LoadError> {
    let doc: Value = serde_json::from_str(raw)?;
    let raw_rules = check_structure(&doc).map_err(LoadError::Invalid)?;
    let rules = check_semantics(&raw_rules).map_err(LoadError::Invalid)?;

    for dup in duplicate_rules(&rules) {
        warn!(
            first = dup.first_index,
            duplicate = dup.duplicate_index,
            rule = %dup.rule,
            "duplicate policy rule"
        );
    }

    Ok(PolicyRuleSet::new(rules))
}

/// Find exact-duplicate rule triples, in document order of the repeat.
pub fn duplicate_rules(rules: &[PolicyRule]) -> Vec<DuplicateRule> {
    let mut first_seen: HashMap<PolicyRule, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        match first_seen.entry(*rule) {
            Entry::Occupied(first) => duplicates.push(DuplicateRule {
                first_index: *first.get(),
                duplicate_index: index,
                rule: *rule,
            }),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }

    duplicates
}

/// A rule whose shape has been verified but whose identifiers have not yet
/// been checked against the vocabularies.
struct RawRule<'a> {
    active: &'a str,
    affected: &'a str,
    behavior: &'a str,
}

/// Rule fields, the only keys a rule object may carry.
const RULE_FIELDS: [&str; 3] = ["active", "affected", "behavior"];

fn check_structure<'a>(doc: &'a Value) -> Result<Vec<RawRule<'a>>, Vec<Violation>> {
    let mut violations = Vec::new();

    let Some(root) = doc.as_object() else {
        return Err(vec![structural("$", "document root must be a JSON object")]);
    };

    // Unknown top-level fields are tolerated for forward compatibility;
    // only the rule array itself is inspected.
    let rules_value = match root.get(DOCUMENT_KEY) {
        Some(value) => value,
        None => {
            return Err(vec![structural(
                "$",
                format!("missing required field `{DOCUMENT_KEY}`"),
            )]);
        }
    };

    let Some(elements) = rules_value.as_array() else {
        return Err(vec![structural(
            format!("$.{DOCUMENT_KEY}"),
            "expected an array of rules",
        )]);
    };

    let mut raw_rules = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        let path = format!("$.{DOCUMENT_KEY}[{index}]");

        let Some(rule) = element.as_object() else {
            violations.push(structural(path, "rule must be a JSON object"));
            continue;
        };

        // Rule shape is safety-relevant for arbitration, so unlike the
        // document level, unrecognized fields inside a rule are rejected.
        for key in rule.keys() {
            if !RULE_FIELDS.contains(&key.as_str()) {
                violations.push(structural(
                    format!("{path}.{key}"),
                    "unrecognized rule field",
                ));
            }
        }

        let mut fields = [None; 3];
        for (slot, field) in fields.iter_mut().zip(RULE_FIELDS) {
            match rule.get(field) {
                None => violations.push(structural(
                    format!("{path}.{field}"),
                    "missing required field",
                )),
                Some(Value::String(s)) if s.is_empty() => violations.push(structural(
                    format!("{path}.{field}"),
                    "must be a non-empty string",
                )),
                Some(Value::String(s)) => *slot = Some(s.as_str()),
                Some(_) => violations.push(structural(
                    format!("{path}.{field}"),
                    "must be a string",
                )),
            }
        }

        if let [Some(active), Some(affected), Some(behavior)] = fields {
            raw_rules.push(RawRule {
                active,
                affected,
                behavior,
            });
        }
    }

    if violations.is_empty() {
        Ok(raw_rules)
    } else {
        Err(violations)
    }
}

fn check_semantics(raw_rules: &[RawRule<'_>]) -> Result<Vec<PolicyRule>, Vec<Violation>> {
    let mut violations = Vec::new();
    let mut rules = Vec::with_capacity(raw_rules.len());

    for (index, raw) in raw_rules.iter().enumerate() {
        let active = check_usage(index, UsageField::Active, raw.active, &mut violations);
        let affected = check_usage(index, UsageField::Affected, raw.affected, &mut violations);

        let behavior = Behavior::parse(raw.behavior);
        if behavior.is_none() {
            violations.push(Violation::UnknownBehavior {
                index,
                value: raw.behavior.to_string(),
            });
        }

        if let (Some(active), Some(affected), Some(behavior)) = (active, affected, behavior) {
            rules.push(PolicyRule::new(active, affected, behavior));
        }
    }

    if violations.is_empty() {
        Ok(rules)
    } else {
        Err(violations)
    }
}

fn check_usage(
    index: usize,
    field: UsageField,
    value: &str,
    violations: &mut Vec<Violation>,
) -> Option<Usage> {
    let usage = Usage::parse(value);
    if usage.is_none() {
        violations.push(Violation::UnknownUsage {
            index,
            field,
            value: value.to_string(),
        });
    }
    usage
}

fn structural(path: impl Into<String>, reason: impl Into<String>) -> Violation {
    Violation::Structural {
        path: path.into(),
        reason: reason.into(),
    }
}
