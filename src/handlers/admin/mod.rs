//! Admin area handlers
//!
//! Mounted behind the admin area gate; see [`crate::middleware::admin_area`].

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, patch, put},
    Router,
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handler::dashboard))
        // Resort catalogue
        .route(
            "/resorts",
            get(handler::list_resorts).post(handler::create_resort),
        )
        .route(
            "/resorts/{id}",
            put(handler::update_resort).delete(handler::delete_resort),
        )
        // Bookings
        .route("/bookings", get(handler::list_bookings))
        .route("/bookings/{id}/status", patch(handler::change_booking_status))
        // Accounts
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route(
            "/users/{id}",
            put(handler::update_user).delete(handler::delete_user),
        )
}
