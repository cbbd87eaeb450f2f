//! Booking response DTOs

use serde::Serialize;

use crate::models::Booking;
use crate::pricing::Quote;

/// Booking submission result
#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub quote: Quote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

/// Caller's bookings
#[derive(Debug, Serialize)]
pub struct BookingsListResponse {
    pub bookings: Vec<Booking>,
    pub total: usize,
}
