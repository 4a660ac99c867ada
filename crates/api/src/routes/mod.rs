pub mod health;
pub mod tecnico;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /tecnicos          list, create
/// /tecnicos/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tecnicos", tecnico::router())
}
