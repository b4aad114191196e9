use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use service::clinic::domain::{Pet, Visit};
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{created, non_empty, Codec};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/pets", tag = "pets",
    responses(
        (status = 200, description = "Pets", body = [crate::openapi::PetDoc]),
        (status = 404, description = "No pets found")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Codec<Vec<Pet>>, JsonApiError> {
    Ok(Codec(non_empty(state.clinic.pets.find_all().await?, "pets")?))
}

#[utoipa::path(
    get, path = "/api/pets/{id}", tag = "pets",
    params(("id" = i32, Path, description = "Pet id")),
    responses((status = 200, description = "OK", body = crate::openapi::PetDoc), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Codec<Pet>, JsonApiError> {
    Ok(Codec(state.clinic.pets.find(id).await?))
}

#[utoipa::path(
    post, path = "/api/pets", tag = "pets",
    request_body = crate::openapi::PetDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PetDoc),
        (status = 400, description = "Decode or Validation Error")
    )
)]
pub async fn create(State(state): State<AppState>, Codec(pet): Codec<Pet>) -> Result<Response, JsonApiError> {
    let saved = state.clinic.create_pet(pet).await?;
    let id = saved.id.unwrap_or_default();
    info!(id, owner_id = saved.owner_id, "created pet");
    Ok(created("pets", id, Codec(saved)))
}

#[utoipa::path(
    put, path = "/api/pets/{id}", tag = "pets",
    params(("id" = i32, Path, description = "Pet id")),
    request_body = crate::openapi::PetDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Decode or Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Codec(pet): Codec<Pet>,
) -> Result<StatusCode, JsonApiError> {
    state.clinic.update_pet(id, pet).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/pets/{id}", tag = "pets",
    params(("id" = i32, Path, description = "Pet id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.clinic.pets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/pets/{id}/visits", tag = "pets",
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Visits of the pet", body = [crate::openapi::VisitDoc]),
        (status = 404, description = "Unknown pet or no visits")
    )
)]
pub async fn visits(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Codec<Vec<Visit>>, JsonApiError> {
    Ok(Codec(non_empty(state.clinic.visits_for_pet(id).await?, "visits")?))
}
