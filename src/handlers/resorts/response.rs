//! Resort browsing response DTOs

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Resort;
use crate::pricing::Quote;

/// Filtered listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResortListResponse {
    pub resorts: Vec<Resort>,
    pub total: usize,
    /// Every amenity offered across the catalogue, sorted
    pub available_amenities: BTreeSet<String>,
}

/// Price quote for a resort
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub resort_id: String,
    #[serde(flatten)]
    pub quote: Quote,
}
