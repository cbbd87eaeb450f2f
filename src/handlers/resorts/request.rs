//! Resort browsing request DTOs

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::Money;
use crate::services::{ResortFilter, Stay};
use crate::utils::time::deserialize_date;
use crate::utils::validation::{normalize_amenities, parse_amenity_list, sanitize_string};

/// Listing query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResortQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    /// Comma-separated
    pub amenities: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub guests: Option<u32>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| sanitize_string(&v))
        .filter(|v| !v.is_empty())
}

fn price(value: Option<f64>, field: &str) -> AppResult<Option<Money>> {
    match value {
        None => Ok(None),
        Some(v) if v < 0.0 => Err(AppError::Validation(format!("{} cannot be negative", field))),
        Some(v) => Money::from_major_f64(v)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{} is not a valid amount", field))),
    }
}

impl ResortQuery {
    pub fn into_filter(self) -> AppResult<ResortFilter> {
        Ok(ResortFilter {
            query: non_blank(self.q),
            location: non_blank(self.location),
            amenities: self
                .amenities
                .as_deref()
                .map(parse_amenity_list)
                .unwrap_or_default(),
            min_price: price(self.min_price, "minPrice")?,
            max_price: price(self.max_price, "maxPrice")?,
            guests: self.guests,
        })
    }
}

/// Price quote request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub check_in_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub check_out_date: NaiveDate,
    #[serde(default)]
    pub number_of_guests: Option<u32>,
    #[serde(default)]
    pub selected_amenities: BTreeSet<String>,
}

impl QuoteRequest {
    pub fn into_stay(self) -> Stay {
        Stay {
            check_in: self.check_in_date,
            check_out: self.check_out_date,
            guests: self.number_of_guests,
            selected_amenities: normalize_amenities(self.selected_amenities),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_into_filter() {
        let filter = ResortQuery {
            q: Some("  ".into()),
            location: Some(" Tulum ".into()),
            amenities: Some("Pool, Spa".into()),
            min_price: Some(99.5),
            max_price: None,
            guests: Some(2),
        }
        .into_filter()
        .unwrap();

        assert!(filter.query.is_none());
        assert_eq!(filter.location.as_deref(), Some("Tulum"));
        assert_eq!(filter.amenities.len(), 2);
        assert_eq!(filter.min_price, Some(Money::from_cents(9950)));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let query = ResortQuery {
            max_price: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(query.into_filter(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_quote_request_accepts_timestamps() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"checkInDate":"2025-05-01T00:00:00.000Z","checkOutDate":"2025-05-07","selectedAmenities":["WiFi"]}"#,
        )
        .unwrap();
        let stay = request.into_stay();
        assert_eq!(stay.check_in, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert!(stay.guests.is_none());
    }

    #[test]
    fn test_quote_request_trims_amenities() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"checkInDate":"2025-05-01","checkOutDate":"2025-05-03","selectedAmenities":[" Pool ","Pool",""]}"#,
        )
        .unwrap();
        let stay = request.into_stay();
        assert_eq!(stay.selected_amenities.len(), 1);
        assert!(stay.selected_amenities.contains("Pool"));
    }
}
