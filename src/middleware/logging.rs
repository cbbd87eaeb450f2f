//! Request logging middleware

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

use crate::session::Session;

/// Log each request with its outcome and the caller's role
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let role = request
        .extensions()
        .get::<Session>()
        .map(|s| s.user.role.as_str())
        .unwrap_or("anonymous");

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        warn!(method = %method, path = %path, role, status = status.as_u16(), duration_ms = %duration_ms, "Request completed with server error");
    } else if status.is_client_error() {
        info!(method = %method, path = %path, role, status = status.as_u16(), duration_ms = %duration_ms, "Request rejected");
    } else {
        info!(method = %method, path = %path, role, status = status.as_u16(), duration_ms = %duration_ms, "Request completed");
    }

    response
}
