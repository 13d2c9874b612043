//! Handler for the `/projects` lookup.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::ProjectsResponse;
use crate::service::projects;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Run the configured projects saved search and return its raw results.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let results =
        projects::list_projects(state.store.as_ref(), state.config.projects_search_id).await?;
    Ok(Json(ProjectsResponse::new(results)))
}
