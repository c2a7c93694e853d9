//! JSON schema export for the policy document.
//!
//! The loader's structural pass is deliberately permissive about identifier
//! values so that vocabulary errors surface as semantic violations with rule
//! indices. The schema generated here documents the full contract instead:
//! it also encodes the closed usage and behavior vocabularies, which makes
//! it suitable for editor tooling and CI checks on policy documents.

use schemars::{schema_for, Schema};

use crate::rules::PolicyDocument;

/// Generate the JSON schema for a fully-valid policy document.
pub fn document_schema() -> Schema {
    schema_for!(PolicyDocument)
}
