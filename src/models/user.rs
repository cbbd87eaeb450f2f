//! User model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::roles;

/// Role assigned to an account by the backend.
///
/// Any role string outside the known set deserializes to
/// [`Role::Unrecognized`], which the access resolver never admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superadmin,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => roles::USER,
            Role::Admin => roles::ADMIN,
            Role::Superadmin => roles::SUPERADMIN,
            Role::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized)
    }

    fn missing() -> Self {
        Role::Unrecognized
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "Role::missing")]
    pub role: Role,
}

/// Login credentials forwarded to the backend
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Self-service registration payload.
///
/// Carries no role: registration always yields a `user` account.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Account payload used by superadmin user management
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// Omitted on update when not being changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Raw backend answer to login/registration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthEnvelope {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful authentication: a backend bearer token and its account
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub token: String,
    pub user: User,
}

impl AuthEnvelope {
    /// Both token and user must be present for the answer to count as a login
    pub fn into_authenticated(self) -> Option<Authenticated> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(Authenticated { token, user }),
            _ => None,
        }
    }
}
