//! Session middleware and extractors

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{error::AppError, models::Role, session::Session, state::AppState};

/// Live session of the caller; rejects anonymous requests
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or(AppError::Unauthorized)
    }
}

/// Session of the caller if any (never fails)
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<Session>);

impl OptionalSession {
    /// `None` for anonymous callers
    pub fn role(&self) -> Option<Role> {
        self.0.as_ref().and_then(Session::role)
    }
}

impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalSession(parts.extensions.get::<Session>().cloned()))
    }
}

/// Extract the bearer token from an Authorization header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the caller's session token, if present and live.
///
/// Requests without a valid session continue anonymously; routes that need
/// a session reject them through [`CurrentSession`].
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string);

    if let Some(token) = token {
        match state.sessions().resolve(&token).await {
            Ok(session) => {
                debug!(path = %request.uri().path(), session_id = %session.id, role = %session.user.role, "Session resolved");
                request.extensions_mut().insert(session);
            }
            Err(e) => {
                debug!(path = %request.uri().path(), error = %e, "Session token rejected, continuing anonymously");
            }
        }
    }

    next.run(request).await
}
