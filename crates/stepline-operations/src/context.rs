use std::cell::{Ref, RefCell, RefMut};

use serde::{Deserialize, Serialize};
use stepline_access::{AccessPolicy, AuditLog, RecordStore};

use crate::config::DEFAULT_ESSENTIAL_FIELDS;

/// Minimum credential lengths enforced by the validation step.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    pub min_username_len: usize,
    pub min_password_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_username_len: 3,
            min_password_len: 6,
        }
    }
}

impl ValidationRules {
    #[must_use]
    pub fn accepts(&self, username: &str, password: &str) -> bool {
        username.chars().count() >= self.min_username_len
            && password.chars().count() >= self.min_password_len
    }
}

/// Shared state handed to every step of an access pipeline run.
///
/// The policy is read-only. The record store and audit log sit behind
/// `RefCell` so steps can mutate them through a shared reference; this keeps
/// the context `!Sync`, so one context serves one execution at a time.
#[derive(Debug)]
pub struct AccessContext {
    policy: AccessPolicy,
    store: RefCell<RecordStore>,
    audit: RefCell<AuditLog>,
    rules: ValidationRules,
    essential_fields: Vec<String>,
}

impl AccessContext {
    #[must_use]
    pub fn new(policy: AccessPolicy, store: RecordStore) -> Self {
        Self {
            policy,
            store: RefCell::new(store),
            audit: RefCell::new(AuditLog::new()),
            rules: ValidationRules::default(),
            essential_fields: DEFAULT_ESSENTIAL_FIELDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_essential_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.essential_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    #[must_use]
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    #[must_use]
    pub fn essential_fields(&self) -> &[String] {
        &self.essential_fields
    }

    /// Borrow the record store.
    ///
    /// # Panics
    ///
    /// Panics if a step is holding a mutable borrow of the store.
    #[must_use]
    pub fn store(&self) -> Ref<'_, RecordStore> {
        self.store.borrow()
    }

    /// Mutably borrow the record store.
    ///
    /// # Panics
    ///
    /// Panics if the store is already borrowed.
    #[must_use]
    pub fn store_mut(&self) -> RefMut<'_, RecordStore> {
        self.store.borrow_mut()
    }

    /// Borrow the audit log.
    ///
    /// # Panics
    ///
    /// Panics if an entry is being appended at the same time.
    #[must_use]
    pub fn audit(&self) -> Ref<'_, AuditLog> {
        self.audit.borrow()
    }

    /// Append an audit entry for `actor`.
    ///
    /// # Panics
    ///
    /// Panics if the audit log is currently borrowed.
    pub fn record_action(&self, actor: &str, action: impl Into<String>) {
        self.audit.borrow_mut().append(actor, action);
    }

    /// Consume the context, returning the store and audit log.
    #[must_use]
    pub fn into_parts(self) -> (RecordStore, AuditLog) {
        (self.store.into_inner(), self.audit.into_inner())
    }
}
