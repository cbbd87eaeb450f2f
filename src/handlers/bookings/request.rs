//! Booking request DTOs

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::services::Stay;
use crate::utils::time::deserialize_date;
use crate::utils::validation::normalize_amenities;

/// Booking submission. The price is always computed here; any client-sent
/// total is ignored.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1))]
    pub resort_id: String,

    #[serde(deserialize_with = "deserialize_date")]
    pub check_in_date: NaiveDate,

    #[serde(deserialize_with = "deserialize_date")]
    pub check_out_date: NaiveDate,

    #[validate(range(min = 1))]
    pub number_of_guests: u32,

    #[serde(default)]
    pub selected_amenities: BTreeSet<String>,
}

impl CreateBookingRequest {
    pub fn into_parts(self) -> (String, Stay) {
        let stay = Stay {
            check_in: self.check_in_date,
            check_out: self.check_out_date,
            guests: Some(self.number_of_guests),
            selected_amenities: normalize_amenities(self.selected_amenities),
        };
        (self.resort_id.trim().to_string(), stay)
    }
}
