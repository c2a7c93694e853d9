//! Audio policy configuration loading and validation.
//!
//! This crate provides:
//! - The closed usage and behavior vocabularies used to classify streams
//! - Typed Rust structs for the audio policy rule document
//! - Structural and semantic validation of raw policy JSON
//! - JSON schema export for external tooling
//! - A published handle for atomic configuration replacement
//!
//! The arbitration engine that applies the rules to live streams is a
//! separate component; it consumes the [`PolicyRuleSet`] produced here and
//! the usage predicates re-exported from [`usage`].

pub mod behavior;
pub mod handle;
pub mod rules;
pub mod schema;
pub mod usage;
pub mod validate;

pub use behavior::{is_known_behavior, Behavior, BEHAVIORS};
pub use handle::PolicyHandle;
pub use rules::{PolicyDocument, PolicyRule, PolicyRuleSet, DOCUMENT_KEY};
pub use schema::document_schema;
pub use usage::{
    is_capture_usage, is_known_usage, is_render_usage, Usage, CAPTURE_USAGES, RENDER_USAGES,
};
pub use validate::{duplicate_rules, load, DuplicateRule, LoadError, UsageField, Violation};
