//! Published rule set handle.
//!
//! The embedding process loads the policy document once at configuration
//! time and publishes the result here. A reload is a fresh [`crate::load`]
//! call whose successful result replaces the published set in one pointer
//! swap; readers keep whatever snapshot they already hold. Nothing is ever
//! patched in place.

use std::sync::{Arc, RwLock};

use crate::rules::PolicyRuleSet;

/// Shared handle to the currently published [`PolicyRuleSet`].
#[derive(Debug)]
pub struct PolicyHandle {
    current: RwLock<Arc<PolicyRuleSet>>,
}

impl PolicyHandle {
    pub fn new(rules: PolicyRuleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
        }
    }

    /// Snapshot of the currently published rule set. The snapshot stays
    /// valid across later [`replace`](Self::replace) calls.
    pub fn current(&self) -> Arc<PolicyRuleSet> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Atomically publish a new rule set, returning the one it replaced.
    pub fn replace(&self, rules: PolicyRuleSet) -> Arc<PolicyRuleSet> {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *slot, Arc::new(rules))
    }
}
