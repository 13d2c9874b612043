pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST   /allocations                 create allocation batch (or single)
/// POST   /timebills                   create timebill batch
/// GET    /timebills                   list (optional ?date= equality filter)
/// DELETE /timebills/{id}              delete one timebill
/// POST   /timebills/delete-by-date    bulk delete by transaction date
/// GET    /projects                    projects saved-search lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/allocations",
            post(handlers::allocations::create_allocations),
        )
        .route(
            "/timebills",
            post(handlers::timebills::create_timebills).get(handlers::timebills::get_timebills),
        )
        .route("/timebills/{id}", delete(handlers::timebills::delete_timebill))
        .route(
            "/timebills/delete-by-date",
            post(handlers::timebills::delete_by_date),
        )
        .route("/projects", get(handlers::projects::list_projects))
}
