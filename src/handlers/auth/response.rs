//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::access::AdminSection;
use crate::models::User;

/// Session token response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
    /// Whether the admin entry is offered in the user menu
    pub show_admin_entry: bool,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Current user response (for /me and /profile)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user: User,
    pub show_admin_entry: bool,
    pub admin_sections: Vec<AdminSection>,
}
