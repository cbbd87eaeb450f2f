//! Resort browsing handlers (open to anonymous callers)

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Resort routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_resorts))
        .route("/{id}", get(handler::get_resort))
        .route("/{id}/quote", post(handler::quote))
}
