//! Resort browsing handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    handlers::extract::ResourceId,
    middleware::auth::OptionalSession,
    models::Resort,
    services::ResortService,
    state::AppState,
};

use super::{
    request::{QuoteRequest, ResortQuery},
    response::{QuoteResponse, ResortListResponse},
};

/// List resorts, optionally filtered
pub async fn list_resorts(
    State(state): State<AppState>,
    caller: OptionalSession,
    Query(query): Query<ResortQuery>,
) -> AppResult<Json<ResortListResponse>> {
    let filter = query.into_filter()?;
    let listing = ResortService::browse(state.backend(), caller.role(), &filter).await?;

    Ok(Json(ResortListResponse {
        total: listing.resorts.len(),
        resorts: listing.resorts,
        available_amenities: listing.available_amenities,
    }))
}

/// Get resort by ID
pub async fn get_resort(
    State(state): State<AppState>,
    caller: OptionalSession,
    ResourceId(id): ResourceId,
) -> AppResult<Json<Resort>> {
    let resort = ResortService::get(state.backend(), caller.role(), &id).await?;
    Ok(Json(resort))
}

/// Price a prospective stay
pub async fn quote(
    State(state): State<AppState>,
    caller: OptionalSession,
    ResourceId(id): ResourceId,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<QuoteResponse>> {
    let quote = ResortService::quote(state.backend(), caller.role(), &id, &payload.into_stay()).await?;
    Ok(Json(QuoteResponse { resort_id: id, quote }))
}
