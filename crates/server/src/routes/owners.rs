use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use service::clinic::domain::Owner;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{created, non_empty, Payload};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OwnerQuery {
    /// Case-sensitive last-name prefix.
    pub last_name: Option<String>,
}

#[utoipa::path(
    get, path = "/api/owners", tag = "owners",
    params(OwnerQuery),
    responses(
        (status = 200, description = "Owners", body = [crate::openapi::OwnerDoc]),
        (status = 404, description = "No owners found")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<OwnerQuery>) -> Result<Json<Vec<Owner>>, JsonApiError> {
    let owners = match q.last_name.as_deref() {
        Some(prefix) => state.clinic.owners_by_last_name(prefix).await?,
        None => state.clinic.owners.find_all().await?,
    };
    Ok(Json(non_empty(owners, "owners")?))
}

#[utoipa::path(
    get, path = "/api/owners/{id}", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OwnerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Owner>, JsonApiError> {
    Ok(Json(state.clinic.owners.find(id).await?))
}

#[utoipa::path(
    post, path = "/api/owners", tag = "owners",
    request_body = crate::openapi::OwnerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OwnerDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<AppState>, Payload(owner): Payload<Owner>) -> Result<Response, JsonApiError> {
    let saved = state.clinic.owners.create(owner).await?;
    let id = saved.id.unwrap_or_default();
    info!(id, "created owner");
    Ok(created("owners", id, Json(saved)))
}

#[utoipa::path(
    put, path = "/api/owners/{id}", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    request_body = crate::openapi::OwnerDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(owner): Payload<Owner>,
) -> Result<StatusCode, JsonApiError> {
    state.clinic.owners.update(id, owner).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/owners/{id}", tag = "owners",
    params(("id" = i32, Path, description = "Owner id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.clinic.owners.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
