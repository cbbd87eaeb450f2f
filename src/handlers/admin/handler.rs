//! Admin handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    access,
    error::AppResult,
    handlers::extract::ResourceId,
    middleware::auth::CurrentSession,
    models::{Booking, Resort},
    services::AdminService,
    state::AppState,
};

use super::{
    request::{ResortForm, StatusChangeRequest, UserForm},
    response::{AdminBookingsResponse, AdminResortsResponse, AdminUsersResponse, DashboardResponse},
};

fn resorts_response(resorts: Vec<Resort>) -> AdminResortsResponse {
    AdminResortsResponse {
        total: resorts.len(),
        resorts,
    }
}

fn bookings_response(bookings: Vec<Booking>) -> AdminBookingsResponse {
    AdminBookingsResponse {
        total: bookings.len(),
        bookings,
    }
}

/// Dashboard overview
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<DashboardResponse>> {
    let stats = AdminService::dashboard(state.backend(), &session).await?;

    Ok(Json(DashboardResponse {
        stats,
        sections: access::visible_sections(session.role()),
    }))
}

// =============================================================================
// Resorts
// =============================================================================

pub async fn list_resorts(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<AdminResortsResponse>> {
    let resorts = AdminService::list_resorts(state.backend(), &session).await?;
    Ok(Json(resorts_response(resorts)))
}

pub async fn create_resort(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<ResortForm>,
) -> AppResult<(StatusCode, Json<AdminResortsResponse>)> {
    payload.validate()?;

    let resorts = AdminService::create_resort(state.backend(), &session, &payload.into_draft()).await?;
    Ok((StatusCode::CREATED, Json(resorts_response(resorts))))
}

pub async fn update_resort(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ResourceId(id): ResourceId,
    Json(payload): Json<ResortForm>,
) -> AppResult<Json<AdminResortsResponse>> {
    payload.validate()?;

    let resorts =
        AdminService::update_resort(state.backend(), &session, &id, &payload.into_draft()).await?;
    Ok(Json(resorts_response(resorts)))
}

pub async fn delete_resort(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ResourceId(id): ResourceId,
) -> AppResult<Json<AdminResortsResponse>> {
    let resorts = AdminService::delete_resort(state.backend(), &session, &id).await?;
    Ok(Json(resorts_response(resorts)))
}

// =============================================================================
// Bookings
// =============================================================================

pub async fn list_bookings(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<AdminBookingsResponse>> {
    let bookings = AdminService::list_bookings(state.backend(), &session).await?;
    Ok(Json(bookings_response(bookings)))
}

/// Confirm or cancel a pending booking
pub async fn change_booking_status(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ResourceId(id): ResourceId,
    Json(payload): Json<StatusChangeRequest>,
) -> AppResult<Json<AdminBookingsResponse>> {
    let bookings =
        AdminService::transition_booking(state.backend(), &session, &id, payload.status).await?;
    Ok(Json(bookings_response(bookings)))
}

// =============================================================================
// Users
// =============================================================================

pub async fn list_users(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<AdminUsersResponse>> {
    let (users, stats) = AdminService::list_users(state.backend(), &session).await?;
    Ok(Json(AdminUsersResponse { users, stats }))
}

pub async fn create_user(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<UserForm>,
) -> AppResult<(StatusCode, Json<AdminUsersResponse>)> {
    payload.validate()?;

    let (users, stats) =
        AdminService::create_user(state.backend(), &session, &payload.into_account()).await?;
    Ok((StatusCode::CREATED, Json(AdminUsersResponse { users, stats })))
}

pub async fn update_user(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ResourceId(id): ResourceId,
    Json(payload): Json<UserForm>,
) -> AppResult<Json<AdminUsersResponse>> {
    payload.validate()?;

    let (users, stats) =
        AdminService::update_user(state.backend(), &session, &id, &payload.into_account()).await?;
    Ok(Json(AdminUsersResponse { users, stats }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ResourceId(id): ResourceId,
) -> AppResult<Json<AdminUsersResponse>> {
    let (users, stats) = AdminService::delete_user(state.backend(), &session, &id).await?;
    Ok(Json(AdminUsersResponse { users, stats }))
}
