//! Booking model

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Money, Resort};
use crate::constants::booking_statuses;
use crate::utils::time::{deserialize_date, deserialize_optional_datetime};

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => booking_statuses::PENDING,
            BookingStatus::Confirmed => booking_statuses::CONFIRMED,
            BookingStatus::Cancelled => booking_statuses::CANCELLED,
        }
    }

    /// Confirmed and cancelled bookings never change again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }

    /// Only `pending -> confirmed` and `pending -> cancelled` exist
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub resort_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resort: Option<Resort>,
    #[serde(deserialize_with = "deserialize_date")]
    pub check_in_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub check_out_date: NaiveDate,
    pub number_of_guests: u32,
    #[serde(default)]
    pub selected_amenities: BTreeSet<String>,
    pub total_price: Money,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Whether the booking belongs to the given user; a booking without an owner belongs to nobody
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        !self.user_id.is_empty() && self.user_id == user_id
    }
}

/// Booking submission sent to the backend; always starts as pending
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub resort_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: u32,
    pub selected_amenities: BTreeSet<String>,
    pub total_price: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(Confirmed.is_terminal());
        assert!(!Pending.is_terminal());
    }

    #[test]
    fn test_deserialize_backend_booking() {
        let booking: Booking = serde_json::from_str(
            r#"{
                "id": "BK-002",
                "userId": "u1",
                "resortId": "r2",
                "checkInDate": "2025-06-15T00:00:00.000Z",
                "checkOutDate": "2025-06-18",
                "numberOfGuests": 4,
                "totalPrice": 750,
                "status": "pending",
                "createdAt": "2025-05-20T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(booking.check_in_date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(booking.total_price, Money::from_major(750));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.selected_amenities.is_empty());
        assert!(booking.created_at.is_some());
        assert!(booking.is_owned_by("u1"));
        assert!(!booking.is_owned_by("u2"));
    }

    #[test]
    fn test_booking_without_owner_belongs_to_nobody() {
        let booking: Booking = serde_json::from_str(
            r#"{"id": "BK-003", "resortId": "r2", "checkInDate": "2025-06-15",
                "checkOutDate": "2025-06-18", "numberOfGuests": 2, "totalPrice": 750,
                "status": "pending"}"#,
        )
        .unwrap();

        assert!(booking.user_id.is_empty());
        assert!(!booking.is_owned_by(""));
        assert!(!booking.is_owned_by("u1"));
    }

    #[test]
    fn test_draft_serializes_plain_dates() {
        let draft = BookingDraft {
            resort_id: "r1".into(),
            check_in_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
            number_of_guests: 2,
            selected_amenities: BTreeSet::new(),
            total_price: Money::from_major(2700),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["checkInDate"], "2025-05-01");
        assert_eq!(json["resortId"], "r1");
        assert_eq!(json["totalPrice"], 2700);
    }
}
