//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod extract;
pub mod health;
pub mod resorts;

use axum::{middleware, Router};

use crate::{
    constants::API_BASE_PATH,
    error::AppError,
    middleware::{admin_area_middleware, logging_middleware, session_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/resorts", resorts::routes())
        .nest("/bookings", bookings::routes())
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn(admin_area_middleware)),
        )
}

/// Unknown routes answer exactly like a hidden admin route
async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

/// The API router with session resolution and request logging applied
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, routes())
        .fallback(not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .with_state(state)
}
