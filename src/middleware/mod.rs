//! HTTP middleware

pub mod admin_area;
pub mod auth;
pub mod logging;

pub use admin_area::admin_area_middleware;
pub use auth::{session_middleware, CurrentSession, OptionalSession};
pub use logging::logging_middleware;
