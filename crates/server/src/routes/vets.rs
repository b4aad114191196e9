use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::clinic::domain::Vet;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{created, non_empty, Payload};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/vets", tag = "vets",
    responses(
        (status = 200, description = "Vets with their specialties", body = [crate::openapi::VetDoc]),
        (status = 404, description = "No vets found")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Vet>>, JsonApiError> {
    Ok(Json(non_empty(state.clinic.vets.find_all().await?, "vets")?))
}

#[utoipa::path(
    get, path = "/api/vets/{id}", tag = "vets",
    params(("id" = i32, Path, description = "Vet id")),
    responses((status = 200, description = "OK", body = crate::openapi::VetDoc), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Vet>, JsonApiError> {
    Ok(Json(state.clinic.vets.find(id).await?))
}

#[utoipa::path(
    post, path = "/api/vets", tag = "vets",
    request_body = crate::openapi::VetDoc,
    responses((status = 201, description = "Created", body = crate::openapi::VetDoc), (status = 400, description = "Validation Error"))
)]
pub async fn create(State(state): State<AppState>, Payload(vet): Payload<Vet>) -> Result<Response, JsonApiError> {
    let saved = state.clinic.vets.create(vet).await?;
    let id = saved.id.unwrap_or_default();
    info!(id, specialties = saved.specialties.len(), "created vet");
    Ok(created("vets", id, Json(saved)))
}

#[utoipa::path(
    put, path = "/api/vets/{id}", tag = "vets",
    params(("id" = i32, Path, description = "Vet id")),
    request_body = crate::openapi::VetDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(vet): Payload<Vet>,
) -> Result<StatusCode, JsonApiError> {
    state.clinic.vets.update(id, vet).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/vets/{id}", tag = "vets",
    params(("id" = i32, Path, description = "Vet id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.clinic.vets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
