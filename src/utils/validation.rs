//! Input validation utilities

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

use crate::models::Role;

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a comma-separated amenity list, trimming entries and dropping blanks
pub fn parse_amenity_list(input: &str) -> BTreeSet<String> {
    normalize_amenities(input.split(','))
}

/// Trim and de-duplicate amenity names, dropping blanks
pub fn normalize_amenities<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| sanitize_string(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Validate a role assigned through account management
pub fn validate_staff_role(role: Role) -> Result<(), &'static str> {
    match role {
        Role::Admin | Role::Superadmin => Ok(()),
        Role::User => Err("Accounts managed here must be admin or superadmin"),
        Role::Unrecognized => Err("Invalid role"),
    }
}

/// Validate latitude/longitude bounds
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate an identifier taken from a request path.
///
/// Identifiers become a single backend path segment, so separators and dot
/// segments are refused.
pub fn validate_path_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() || id == "." || id == ".." {
        return Err("Invalid identifier");
    }
    if id.contains(['/', '\\']) || id.chars().any(char::is_control) {
        return Err("Invalid identifier");
    }
    Ok(())
}

/// Deserialize a string field, treating `""` (or whitespace) as absent
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Amenities submitted either as `"Pool, Spa"` or `["Pool", "Spa"]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmenityInput {
    Text(String),
    List(Vec<String>),
}

impl Default for AmenityInput {
    fn default() -> Self {
        AmenityInput::List(Vec::new())
    }
}

impl AmenityInput {
    pub fn into_set(self) -> BTreeSet<String> {
        match self {
            AmenityInput::Text(text) => parse_amenity_list(&text),
            AmenityInput::List(items) => normalize_amenities(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Ocean View \u{0007}"), "Ocean View");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }

    #[test]
    fn test_parse_amenity_list() {
        let set = parse_amenity_list(" Pool, Spa ,,WiFi, Pool ");
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec!["Pool".to_string(), "Spa".to_string(), "WiFi".to_string()]
        );
        assert!(parse_amenity_list("").is_empty());
        assert!(parse_amenity_list(" , ").is_empty());
    }

    #[test]
    fn test_validate_staff_role() {
        assert!(validate_staff_role(Role::Admin).is_ok());
        assert!(validate_staff_role(Role::Superadmin).is_ok());
        assert!(validate_staff_role(Role::User).is_err());
        assert!(validate_staff_role(Role::Unrecognized).is_err());
    }

    #[test]
    fn test_validate_path_id() {
        assert!(validate_path_id("665f1c2ab9e4").is_ok());
        assert!(validate_path_id("r1.v2").is_ok());
        assert!(validate_path_id("").is_err());
        assert!(validate_path_id("..").is_err());
        assert!(validate_path_id(".").is_err());
        assert!(validate_path_id("../users/root").is_err());
        assert!(validate_path_id("..\\users").is_err());
        assert!(validate_path_id("r1\n").is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(20.5, -87.1).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_amenity_input_accepts_text_or_list() {
        #[derive(Deserialize)]
        struct Form {
            #[serde(default)]
            amenities: AmenityInput,
            #[serde(default, deserialize_with = "empty_string_as_none")]
            password: Option<String>,
        }

        let text: Form = serde_json::from_str(r#"{"amenities":"Pool, Spa","password":""}"#).unwrap();
        assert_eq!(text.amenities.into_set().len(), 2);
        assert!(text.password.is_none());

        let list: Form =
            serde_json::from_str(r#"{"amenities":[" Pool ","Spa"],"password":"secret1"}"#).unwrap();
        assert!(list.amenities.into_set().contains("Pool"));
        assert_eq!(list.password.as_deref(), Some("secret1"));

        let missing: Form = serde_json::from_str("{}").unwrap();
        assert!(missing.amenities.into_set().is_empty());
        assert!(missing.password.is_none());
    }
}
