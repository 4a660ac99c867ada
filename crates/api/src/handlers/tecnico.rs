//! Handlers for the `/tecnicos` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ordem_core::pagination::Page;
use ordem_core::types::DbId;
use ordem_db::models::tecnico::TecnicoDto;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /tecnicos?page=&size=&sort=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Page<TecnicoDto>>> {
    let request = params.into_page_request()?;
    let page = state.tecnicos.find_all_paged(request).await?;
    Ok(Json(page))
}

/// GET /tecnicos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TecnicoDto>> {
    let tecnico = state.tecnicos.find_by_id(id).await?;
    Ok(Json(tecnico))
}

/// POST /tecnicos
///
/// Responds 201 with a `Location` header pointing at the new technician.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<TecnicoDto>,
) -> AppResult<impl IntoResponse> {
    let tecnico = state.tecnicos.insert(input).await?;
    let location = tecnico.id.map(|id| [(LOCATION, format!("/tecnicos/{id}"))]);
    Ok((StatusCode::CREATED, location, Json(tecnico)))
}

/// PUT /tecnicos/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TecnicoDto>,
) -> AppResult<Json<TecnicoDto>> {
    let tecnico = state.tecnicos.update(id, input).await?;
    Ok(Json(tecnico))
}

/// DELETE /tecnicos/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.tecnicos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
