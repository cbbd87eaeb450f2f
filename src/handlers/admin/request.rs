//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_PHONE_LENGTH, MAX_RESORT_DESCRIPTION_LENGTH,
    MAX_RESORT_LOCATION_LENGTH, MAX_RESORT_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::models::{BookingStatus, Money, ResortDraft, Role, UserAccount};
use crate::utils::validation::{empty_string_as_none, sanitize_string, AmenityInput};

/// Resort create/update form
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResortForm {
    #[validate(length(min = 1, max = MAX_RESORT_NAME_LENGTH))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = MAX_RESORT_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(length(min = 1, max = MAX_RESORT_LOCATION_LENGTH))]
    pub location: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub price_per_night: Money,

    /// Comma-separated text or a list
    #[serde(default)]
    pub amenities: AmenityInput,

    #[validate(range(min = 1))]
    pub max_guests: u32,

    #[validate(range(min = 1))]
    pub rooms: u32,

    #[serde(default)]
    pub images: Vec<String>,
}

impl ResortForm {
    pub fn into_draft(self) -> ResortDraft {
        ResortDraft {
            name: sanitize_string(&self.name),
            description: sanitize_string(&self.description),
            location: sanitize_string(&self.location),
            latitude: self.latitude,
            longitude: self.longitude,
            price_per_night: self.price_per_night,
            amenities: self.amenities.into_set(),
            max_guests: self.max_guests,
            rooms: self.rooms,
            images: self
                .images
                .iter()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
        }
    }
}

/// Booking status change request
#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: BookingStatus,
}

/// Account create/update form
#[derive(Debug, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = MAX_PHONE_LENGTH))]
    pub phone: String,

    pub role: Role,

    /// Blank means "leave unchanged" on update
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: Option<String>,
}

impl UserForm {
    pub fn into_account(self) -> UserAccount {
        UserAccount {
            name: sanitize_string(&self.name),
            email: self.email.trim().to_string(),
            phone: sanitize_string(&self.phone),
            role: self.role,
            password: self.password,
        }
    }
}
