use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use service::clinic::domain::Visit;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{created, non_empty, Codec};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/visits", tag = "visits",
    responses(
        (status = 200, description = "Visits", body = [crate::openapi::VisitDoc]),
        (status = 404, description = "No visits found")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Codec<Vec<Visit>>, JsonApiError> {
    Ok(Codec(non_empty(state.clinic.visits.find_all().await?, "visits")?))
}

#[utoipa::path(
    get, path = "/api/visits/{id}", tag = "visits",
    params(("id" = i32, Path, description = "Visit id")),
    responses((status = 200, description = "OK", body = crate::openapi::VisitDoc), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Codec<Visit>, JsonApiError> {
    Ok(Codec(state.clinic.visits.find(id).await?))
}

#[utoipa::path(
    post, path = "/api/visits", tag = "visits",
    request_body = crate::openapi::VisitDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VisitDoc),
        (status = 400, description = "Decode or Validation Error")
    )
)]
pub async fn create(State(state): State<AppState>, Codec(visit): Codec<Visit>) -> Result<Response, JsonApiError> {
    let saved = state.clinic.create_visit(visit).await?;
    let id = saved.id.unwrap_or_default();
    info!(id, pet_id = saved.pet_id, "created visit");
    Ok(created("visits", id, Codec(saved)))
}

#[utoipa::path(
    put, path = "/api/visits/{id}", tag = "visits",
    params(("id" = i32, Path, description = "Visit id")),
    request_body = crate::openapi::VisitDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Decode or Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Codec(visit): Codec<Visit>,
) -> Result<StatusCode, JsonApiError> {
    state.clinic.update_visit(id, visit).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/visits/{id}", tag = "visits",
    params(("id" = i32, Path, description = "Visit id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.clinic.visits.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
