use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::clinic::domain::Specialty;

use crate::errors::JsonApiError;
use crate::extract::{created, non_empty, Payload};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/specialties", tag = "specialties",
    responses(
        (status = 200, description = "Specialties", body = [crate::openapi::SpecialtyDoc]),
        (status = 404, description = "No specialties found")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Specialty>>, JsonApiError> {
    Ok(Json(non_empty(state.clinic.specialties.find_all().await?, "specialties")?))
}

#[utoipa::path(
    get, path = "/api/specialties/{id}", tag = "specialties",
    params(("id" = i32, Path, description = "Specialty id")),
    responses((status = 200, description = "OK", body = crate::openapi::SpecialtyDoc), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Specialty>, JsonApiError> {
    Ok(Json(state.clinic.specialties.find(id).await?))
}

#[utoipa::path(
    post, path = "/api/specialties", tag = "specialties",
    request_body = crate::openapi::SpecialtyDoc,
    responses((status = 201, description = "Created", body = crate::openapi::SpecialtyDoc), (status = 400, description = "Validation Error"))
)]
pub async fn create(State(state): State<AppState>, Payload(specialty): Payload<Specialty>) -> Result<Response, JsonApiError> {
    let saved = state.clinic.specialties.create(specialty).await?;
    Ok(created("specialties", saved.id.unwrap_or_default(), Json(saved)))
}

#[utoipa::path(
    put, path = "/api/specialties/{id}", tag = "specialties",
    params(("id" = i32, Path, description = "Specialty id")),
    request_body = crate::openapi::SpecialtyDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(specialty): Payload<Specialty>,
) -> Result<StatusCode, JsonApiError> {
    state.clinic.specialties.update(id, specialty).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/specialties/{id}", tag = "specialties",
    params(("id" = i32, Path, description = "Specialty id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.clinic.specialties.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
