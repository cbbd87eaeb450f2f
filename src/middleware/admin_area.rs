//! Admin area gate
//!
//! Everything nested under `/admin` passes through here first. Callers who
//! may not enter get the same "not found" answer as an unknown route.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::{
    access::{self, Action},
    error::AppError,
    session::Session,
};

pub async fn admin_area_middleware(request: Request<Body>, next: Next) -> Result<Response, AppError> {
    let role = request.extensions().get::<Session>().and_then(Session::role);

    if let Err(e) = access::enforce(role, Action::AdminArea) {
        debug!(path = %request.uri().path(), role = ?role, "Admin area hidden from caller");
        return Err(e);
    }

    Ok(next.run(request).await)
}
