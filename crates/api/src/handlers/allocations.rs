//! Handlers for the `/allocations` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::CreatedResponse;
use crate::service::allocations;
use crate::service::allocations::CreateAllocationsRequest;
use crate::state::AppState;

/// POST /api/v1/allocations
///
/// Validate and create resource allocations. Accepts a single allocation
/// object or `{"allocations": [...]}`.
pub async fn create_allocations(
    State(state): State<AppState>,
    Json(request): Json<CreateAllocationsRequest>,
) -> AppResult<impl IntoResponse> {
    let ids = allocations::create_allocations(state.store.as_ref(), request).await?;
    Ok(Json(CreatedResponse::new(ids)))
}
