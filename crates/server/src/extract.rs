//! Request/response wrappers.
//!
//! [`Codec`] routes pets and visits through [`service::codec`]; [`Payload`]
//! is plain serde JSON with errors shaped like every other API error.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::codec::{self, EntityCodec};

use crate::errors::JsonApiError;

/// Body decoded with the entity's [`EntityCodec`].
pub struct Codec<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Codec<T>
where
    S: Send + Sync,
    T: EntityCodec + Send,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Body", Some(e.body_text())))?;
        Ok(Codec(codec::from_slice(&bytes)?))
    }
}

impl<T: EntityCodec> IntoResponse for Codec<T> {
    fn into_response(self) -> Response { Json(self.0.encode()).into_response() }
}

/// Plain serde JSON body; rejections use the API error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct Payload<T>(pub T);

impl<T: Serialize> IntoResponse for Payload<T> {
    fn into_response(self) -> Response { Json(self.0).into_response() }
}

/// `201 Created` with a `Location: /api/<resource>/<key>` header.
pub fn created(resource: &str, key: impl std::fmt::Display, body: impl IntoResponse) -> Response {
    let location = format!("/api/{resource}/{key}");
    (StatusCode::CREATED, [(header::LOCATION, location)], body).into_response()
}

/// Empty collections answer 404 rather than `[]`.
pub fn non_empty<T>(items: Vec<T>, what: &str) -> Result<Vec<T>, JsonApiError> {
    if items.is_empty() {
        return Err(JsonApiError::not_found(format!("no {what} found")));
    }
    Ok(items)
}
