//! Authentication types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credential found on an incoming request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Bearer JWT from the `Authorization` header
    Jwt(String),
    /// Opaque token from the session cookie
    Session(String),
    /// No credential
    None,
}

impl AuthMethod {
    pub fn is_none(&self) -> bool {
        matches!(self, AuthMethod::None)
    }
}

/// Authenticated caller, attached to the request once access is granted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Role keyword as stored on the user; may differ in case from the role table
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

impl UserInfo {
    /// Whether the identity carries a usable role
    pub fn has_role(&self) -> bool {
        !self.role.trim().is_empty()
    }
}
