//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_PHONE_LENGTH, MIN_PASSWORD_LENGTH};
use crate::models::{Credentials, Registration};
use crate::utils::validation::sanitize_string;

/// Account registration request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    #[serde(default)]
    #[validate(length(max = MAX_PHONE_LENGTH))]
    pub phone: String,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Registration {
        Registration {
            name: sanitize_string(&self.name),
            email: self.email.trim().to_string(),
            password: self.password,
            phone: sanitize_string(&self.phone),
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    pub fn into_credentials(self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_register_validation() {
        assert!(register("secret1", "secret1").validate().is_ok());
        assert!(register("short", "short").validate().is_err());
        assert!(register("secret1", "secret2").validate().is_err());
    }

    #[test]
    fn test_registration_payload_has_no_role() {
        let payload = serde_json::to_value(register("secret1", "secret1").into_registration()).unwrap();
        assert!(payload.get("role").is_none());
        assert!(payload.get("confirmPassword").is_none());
    }
}
