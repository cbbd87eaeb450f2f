//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    access,
    error::AppResult,
    middleware::auth::CurrentSession,
    services::AuthService,
    session::Session,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse, LogoutResponse},
};

fn auth_response(session: Session, access_token: String) -> AuthResponse {
    AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_at: session.expires_at,
        show_admin_entry: access::shows_admin_entry(session.role()),
        user: session.user,
    }
}

fn current_user_response(session: Session) -> CurrentUserResponse {
    CurrentUserResponse {
        show_admin_entry: access::shows_admin_entry(session.role()),
        admin_sections: access::visible_sections(session.role()),
        user: session.user,
    }
}

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let (session, token) = AuthService::register(
        state.backend(),
        state.sessions(),
        &payload.into_registration(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(auth_response(session, token))))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (session, token) =
        AuthService::login(state.backend(), state.sessions(), &payload.into_credentials()).await?;

    Ok(Json(auth_response(session, token)))
}

/// Logout (tear the session down)
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<LogoutResponse>> {
    AuthService::logout(state.sessions(), &session).await?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get the session's cached user
pub async fn get_current_user(
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<CurrentUserResponse>> {
    access::enforce(session.role(), access::Action::ViewProfile)?;
    Ok(Json(current_user_response(session)))
}

/// Refresh the user's profile from the backend
pub async fn refresh_profile(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<CurrentUserResponse>> {
    let session = AuthService::refresh_profile(state.backend(), state.sessions(), &session).await?;
    Ok(Json(current_user_response(session)))
}
