//! Route definitions for the `/tecnicos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tecnico;
use crate::state::AppState;

/// Routes mounted at `/tecnicos`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tecnico::list).post(tecnico::create))
        .route(
            "/{id}",
            get(tecnico::get_by_id)
                .put(tecnico::update)
                .delete(tecnico::delete),
        )
}
