//! Handlers for the `/timebills` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use suitebridge_core::types::RecordId;

use crate::error::AppResult;
use crate::response::{CreatedResponse, DeletedResponse, TimebillsResponse};
use crate::service::timebills;
use crate::service::timebills::{CreateTimebillsRequest, DeleteByDateRequest};
use crate::state::AppState;

/// Query parameters for `GET /timebills`.
#[derive(Debug, Deserialize)]
pub struct TimebillQuery {
    /// Restrict results to a single transaction date (equality filter).
    pub date: Option<String>,
}

/// POST /api/v1/timebills
///
/// Validate and create a batch of timebills. Returns the id of every record
/// created, in batch order.
pub async fn create_timebills(
    State(state): State<AppState>,
    Json(request): Json<CreateTimebillsRequest>,
) -> AppResult<impl IntoResponse> {
    let ids = timebills::create_timebills(state.store.as_ref(), request).await?;
    Ok(Json(CreatedResponse::new(ids)))
}

/// GET /api/v1/timebills
///
/// List timebills, optionally filtered by transaction date.
pub async fn get_timebills(
    State(state): State<AppState>,
    Query(params): Query<TimebillQuery>,
) -> AppResult<impl IntoResponse> {
    let results = timebills::get_timebills(state.store.as_ref(), params.date.as_deref()).await?;
    Ok(Json(TimebillsResponse::new(results)))
}

/// DELETE /api/v1/timebills/{id}
///
/// Delete a single timebill. 404 when no such record exists.
pub async fn delete_timebill(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    timebills::delete_timebill(state.store.as_ref(), id).await?;
    Ok(Json(DeletedResponse::new(1)))
}

/// POST /api/v1/timebills/delete-by-date
///
/// Bulk delete every timebill dated on any of the given dates. Destructive;
/// the reply reports how many records were removed.
pub async fn delete_by_date(
    State(state): State<AppState>,
    Json(request): Json<DeleteByDateRequest>,
) -> AppResult<impl IntoResponse> {
    let deleted = timebills::delete_timebills_by_date(state.store.as_ref(), request).await?;
    Ok(Json(DeletedResponse::new(deleted)))
}
