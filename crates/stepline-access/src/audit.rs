use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Timestamp layout used when rendering audit entries.
pub const AUDIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One immutable audit entry: who did what, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    timestamp: NaiveDateTime,
    actor: String,
    action: String,
}

impl AuditEntry {
    #[must_use]
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    #[must_use]
    pub fn actor(&self) -> &str {
        &self.actor
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - User {} performed action: {}",
            self.timestamp.format(AUDIT_TIMESTAMP_FORMAT),
            self.actor,
            self.action
        )
    }
}

/// Append-only, ordered audit trail.
///
/// Entries live for as long as the log does and are never rewritten or
/// removed.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Create a new empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `actor` performed `action`, stamped with the local time.
    pub fn append(&mut self, actor: impl Into<String>, action: impl Into<String>) {
        self.append_at(Local::now().naive_local(), actor, action);
    }

    /// Record an entry with an explicit timestamp.
    pub fn append_at(
        &mut self,
        timestamp: NaiveDateTime,
        actor: impl Into<String>,
        action: impl Into<String>,
    ) {
        self.entries.push(AuditEntry {
            timestamp,
            actor: actor.into(),
            action: action.into(),
        });
    }

    /// Get all entries in the order they were appended.
    #[must_use]
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
