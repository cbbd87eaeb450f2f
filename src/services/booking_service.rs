//! Booking service

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    access::{self, Action},
    backend::Backend,
    error::{AppError, AppResult},
    models::{Booking, BookingDraft},
    pricing::Quote,
    services::resort_service::{price_stay, ResortService, Stay},
    session::Session,
    utils::now_utc,
};

/// Booking placed at the backend, with the quote it was priced at
#[derive(Debug, Clone)]
pub struct PlacedBooking {
    pub quote: Quote,
    /// The backend's record, when its answer could be read
    pub booking: Option<Booking>,
}

/// Booking service for members
pub struct BookingService;

impl BookingService {
    /// Validate, price and submit a booking as `pending`.
    ///
    /// Nothing reaches the backend unless the dates, guest count and
    /// amenities are valid for the resort.
    pub async fn place(
        backend: &dyn Backend,
        session: &Session,
        resort_id: &str,
        stay: Stay,
    ) -> AppResult<PlacedBooking> {
        Self::place_on(backend, session, resort_id, stay, now_utc().date_naive()).await
    }

    async fn place_on(
        backend: &dyn Backend,
        session: &Session,
        resort_id: &str,
        stay: Stay,
        today: NaiveDate,
    ) -> AppResult<PlacedBooking> {
        access::enforce(session.role(), Action::PlaceBooking)?;

        let guests = stay
            .guests
            .ok_or_else(|| AppError::Validation("Number of guests is required".to_string()))?;
        if stay.check_in < today {
            return Err(AppError::Validation(
                "Check-in date cannot be in the past".to_string(),
            ));
        }

        let resort = ResortService::get(backend, session.role(), resort_id).await?;
        let quote = price_stay(&resort, &stay)?;

        let draft = BookingDraft {
            resort_id: resort.id.clone(),
            check_in_date: stay.check_in,
            check_out_date: stay.check_out,
            number_of_guests: guests,
            selected_amenities: stay.selected_amenities,
            total_price: quote.total_price,
        };

        let booking = backend.create_booking(&session.backend_token, &draft).await?;
        info!(
            user_id = %session.user.id,
            resort_id = %draft.resort_id,
            nights = quote.nights,
            total = %quote.total_price,
            "Booking submitted"
        );

        Ok(PlacedBooking { quote, booking })
    }

    /// Bookings belonging to the caller
    pub async fn list_own(backend: &dyn Backend, session: &Session) -> AppResult<Vec<Booking>> {
        access::enforce(session.role(), Action::ViewOwnBookings)?;
        backend.list_bookings(&session.backend_token).await
    }

    /// One of the caller's bookings; another account's booking reads as not found
    pub async fn get_own(backend: &dyn Backend, session: &Session, id: &str) -> AppResult<Booking> {
        access::enforce(session.role(), Action::ViewOwnBookings)?;

        let booking = backend
            .get_booking(&session.backend_token, id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Booking not found".to_string()),
                other => other,
            })?;

        if !booking.is_owned_by(&session.user.id) {
            warn!(booking_id = %id, user_id = %session.user.id, owner = %booking.user_id, "Backend returned a booking not owned by the caller");
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        Ok(booking)
    }
}
