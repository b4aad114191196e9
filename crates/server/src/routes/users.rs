use axum::{extract::State, response::Response, Json};
use service::users::domain::User;

use crate::errors::JsonApiError;
use crate::extract::{created, Payload};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::UserDoc,
    responses(
        (status = 201, description = "User saved with normalized roles", body = crate::openapi::UserDoc),
        (status = 400, description = "User must have at least a role set!"),
        (status = 409, description = "A role clashes with a stored role")
    )
)]
pub async fn create(State(state): State<AppState>, Payload(mut user): Payload<User>) -> Result<Response, JsonApiError> {
    state.users.save_user(&mut user).await?;
    let location = user.username.clone();
    Ok(created("users", location, Json(user)))
}
