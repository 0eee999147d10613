use std::path::Path;

use serde::Deserialize;
use stepline_access::{AccessPolicy, Record, RecordStore, RoleCapabilities};
use tracing::debug;

use crate::context::{AccessContext, ValidationRules};
use crate::error::{ConfigError, Result};

/// Fields the deletion step keeps when pruning a record.
pub const DEFAULT_ESSENTIAL_FIELDS: &[&str] = &["name", "age", "department"];

/// Roles, records and rules used to build an [`AccessContext`].
///
/// Every section is optional in the TOML form; a missing section falls back
/// to the built-in seed data.
///
/// ```toml
/// essential_fields = ["name", "age", "department"]
///
/// [validation]
/// min_username_len = 3
/// min_password_len = 6
///
/// [roles.host]
/// can_view = true
/// can_delete = false
///
/// [records.100]
/// name = "John Doe"
/// age = 30
/// department = "HR"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepConfig {
    pub essential_fields: Vec<String>,
    pub validation: ValidationRules,
    pub roles: AccessPolicy,
    pub records: RecordStore,
}

impl Default for StepConfig {
    fn default() -> Self {
        let roles = AccessPolicy::from_roles([
            ("host", RoleCapabilities::new(true, false)),
            ("hr", RoleCapabilities::new(true, true)),
        ]);

        let records = [
            (
                "100",
                Record::new()
                    .with_field("name", "John Doe")
                    .with_field("age", 30)
                    .with_field("department", "HR")
                    .with_field("email", "john.doe@example.com"),
            ),
            (
                "101",
                Record::new()
                    .with_field("name", "Jane Smith")
                    .with_field("age", 28)
                    .with_field("department", "Engineering")
                    .with_field("email", "jane.smith@example.com"),
            ),
        ]
        .into_iter()
        .collect();

        Self {
            essential_fields: DEFAULT_ESSENTIAL_FIELDS
                .iter()
                .map(ToString::to_string)
                .collect(),
            validation: ValidationRules::default(),
            roles,
            records,
        }
    }
}

impl StepConfig {
    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;
        debug!(
            path = %path.display(),
            roles = config.roles.roles().count(),
            records = config.records.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse TOML `contents`; `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `contents` is not a valid config.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise use the built-in defaults.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`StepConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    #[must_use]
    pub fn into_context(self) -> AccessContext {
        AccessContext::new(self.roles, self.records)
            .with_rules(self.validation)
            .with_essential_fields(self.essential_fields)
    }
}
