use std::fmt;

use serde::{Deserialize, Serialize};

/// Payload threaded through the access pipeline.
///
/// `user_id` is the acting user recorded in the audit log, `role` selects
/// capabilities from the access policy and `target_id` names the record the
/// request is about.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub user_id: String,
    pub role: String,
    pub target_id: String,
    pub username: String,
    pub password: String,
}

impl AccessRequest {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        role: impl Into<String>,
        target_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
            target_id: target_id.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AccessRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessRequest")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .field("target_id", &self.target_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
