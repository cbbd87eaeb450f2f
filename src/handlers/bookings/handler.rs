//! Booking handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::extract::ResourceId,
    middleware::auth::CurrentSession,
    models::Booking,
    services::BookingService,
    state::AppState,
};

use super::{
    request::CreateBookingRequest,
    response::{BookingCreatedResponse, BookingsListResponse},
};

/// Submit a booking
pub async fn create_booking(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    payload.validate()?;

    let (resort_id, stay) = payload.into_parts();
    let placed = BookingService::place(state.backend(), &session, &resort_id, stay).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking created successfully".to_string(),
            quote: placed.quote,
            booking: placed.booking,
        }),
    ))
}

/// List the caller's bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<BookingsListResponse>> {
    let bookings = BookingService::list_own(state.backend(), &session).await?;

    Ok(Json(BookingsListResponse {
        total: bookings.len(),
        bookings,
    }))
}

/// Get one of the caller's bookings
pub async fn get_booking(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Booking>> {
    let booking = BookingService::get_own(state.backend(), &session, &id).await?;
    Ok(Json(booking))
}
