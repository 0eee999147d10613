use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An action a role may be allowed to perform on records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    View,
    Delete,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::View => "view",
            Self::Delete => "delete",
        };
        write!(f, "{s}")
    }
}

/// Capabilities granted to a single role.
///
/// Missing keys deserialize as `false`. `can_get` is accepted as an alias
/// for `can_view`; any other key is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleCapabilities {
    #[serde(alias = "can_get")]
    pub can_view: bool,
    pub can_delete: bool,
}

impl RoleCapabilities {
    #[must_use]
    pub fn new(can_view: bool, can_delete: bool) -> Self {
        Self {
            can_view,
            can_delete,
        }
    }

    #[must_use]
    pub fn grants(&self, capability: Capability) -> bool {
        match capability {
            Capability::View => self.can_view,
            Capability::Delete => self.can_delete,
        }
    }
}

/// Role table mapping role identifiers to their capabilities.
///
/// Built once before any pipeline runs and only queried afterwards. A role
/// that is not in the table has no capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessPolicy {
    roles: IndexMap<String, RoleCapabilities>,
}

impl AccessPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = (S, RoleCapabilities)>,
        S: Into<String>,
    {
        Self {
            roles: roles
                .into_iter()
                .map(|(role, capabilities)| (role.into(), capabilities))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>, capabilities: RoleCapabilities) -> Self {
        self.roles.insert(role.into(), capabilities);
        self
    }

    /// Whether `role` has been granted `capability`.
    #[must_use]
    pub fn is_granted(&self, role: &str, capability: Capability) -> bool {
        self.roles
            .get(role)
            .is_some_and(|capabilities| capabilities.grants(capability))
    }

    #[must_use]
    pub fn capabilities(&self, role: &str) -> Option<&RoleCapabilities> {
        self.roles.get(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AccessPolicy {
        AccessPolicy::from_roles([
            ("host", RoleCapabilities::new(true, false)),
            ("hr", RoleCapabilities::new(true, true)),
        ])
    }

    #[test]
    fn granted_capabilities_follow_role_table() {
        let policy = policy();

        assert!(policy.is_granted("host", Capability::View));
        assert!(!policy.is_granted("host", Capability::Delete));
        assert!(policy.is_granted("hr", Capability::View));
        assert!(policy.is_granted("hr", Capability::Delete));
    }

    #[test]
    fn unknown_role_has_no_capabilities() {
        let policy = policy();

        assert!(!policy.is_granted("guest", Capability::View));
        assert!(!policy.is_granted("guest", Capability::Delete));
        assert!(policy.capabilities("guest").is_none());
    }

    #[test]
    fn with_role_overrides_existing_entry() {
        let policy = policy().with_role("host", RoleCapabilities::new(false, false));

        assert!(!policy.is_granted("host", Capability::View));
        assert_eq!(policy.roles().collect::<Vec<_>>(), vec!["host", "hr"]);
    }

    #[test]
    fn capability_display_is_lowercase() {
        assert_eq!(Capability::View.to_string(), "view");
        assert_eq!(Capability::Delete.to_string(), "delete");
    }

    #[test]
    fn role_capabilities_accept_can_get_alias() -> anyhow::Result<()> {
        let caps: RoleCapabilities = serde_json::from_str(r#"{"can_get": true}"#)?;

        assert!(caps.can_view);
        assert!(!caps.can_delete);
        Ok(())
    }

    #[test]
    fn role_capabilities_reject_unknown_keys() {
        let result = serde_json::from_str::<RoleCapabilities>(r#"{"can_delet": true}"#);

        assert!(result.is_err());
    }
}
