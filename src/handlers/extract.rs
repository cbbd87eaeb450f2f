//! Shared extractors

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{error::AppError, utils::validation::validate_path_id};

/// Single `{id}` path parameter, checked to stay one backend path segment
#[derive(Debug, Clone)]
pub struct ResourceId(pub String);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        validate_path_id(&id).map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(ResourceId(id))
    }
}
