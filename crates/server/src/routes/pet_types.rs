use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use service::clinic::domain::PetType;

use crate::errors::JsonApiError;
use crate::extract::{created, non_empty, Payload};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/pettypes", tag = "pettypes",
    responses(
        (status = 200, description = "Pet types", body = [crate::openapi::PetTypeDoc]),
        (status = 404, description = "No pet types found")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PetType>>, JsonApiError> {
    Ok(Json(non_empty(state.clinic.pet_types.find_all().await?, "pet types")?))
}

#[utoipa::path(
    get, path = "/api/pettypes/{id}", tag = "pettypes",
    params(("id" = i32, Path, description = "Pet type id")),
    responses((status = 200, description = "OK", body = crate::openapi::PetTypeDoc), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<PetType>, JsonApiError> {
    Ok(Json(state.clinic.pet_types.find(id).await?))
}

#[utoipa::path(
    post, path = "/api/pettypes", tag = "pettypes",
    request_body = crate::openapi::PetTypeDoc,
    responses((status = 201, description = "Created", body = crate::openapi::PetTypeDoc), (status = 400, description = "Validation Error"))
)]
pub async fn create(State(state): State<AppState>, Payload(kind): Payload<PetType>) -> Result<Response, JsonApiError> {
    let saved = state.clinic.pet_types.create(kind).await?;
    Ok(created("pettypes", saved.id.unwrap_or_default(), Json(saved)))
}

#[utoipa::path(
    put, path = "/api/pettypes/{id}", tag = "pettypes",
    params(("id" = i32, Path, description = "Pet type id")),
    request_body = crate::openapi::PetTypeDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(kind): Payload<PetType>,
) -> Result<StatusCode, JsonApiError> {
    state.clinic.pet_types.update(id, kind).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/pettypes/{id}", tag = "pettypes",
    params(("id" = i32, Path, description = "Pet type id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Pet type is used by a pet")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.clinic.delete_pet_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
