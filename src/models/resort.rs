//! Resort model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Money;

/// Bookable property as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resort {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub price_per_night: Money,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    pub max_guests: u32,
    pub rooms: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Resort {
    /// Check whether the resort offers an amenity
    pub fn offers(&self, amenity: &str) -> bool {
        self.amenities.contains(amenity)
    }

    /// Amenities in `selected` that this resort does not offer
    pub fn unknown_amenities<'a>(&self, selected: &'a BTreeSet<String>) -> Vec<&'a str> {
        selected
            .iter()
            .filter(|a| !self.offers(a))
            .map(String::as_str)
            .collect()
    }

    /// Check whether a party of `guests` fits
    pub fn accommodates(&self, guests: u32) -> bool {
        guests >= 1 && guests <= self.max_guests
    }
}

/// Resort create/update payload sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResortDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_night: Money,
    pub amenities: BTreeSet<String>,
    pub max_guests: u32,
    pub rooms: u32,
    pub images: Vec<String>,
}
