//! Member booking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Booking routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_bookings).post(handler::create_booking))
        .route("/{id}", get(handler::get_booking))
}
