use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::codec::DecodeError;
use service::errors::ServiceError;
use tracing::{error, warn};

use crate::metrics;

/// HTTP-facing error: status plus a `{"error", "message"}` body.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "message": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<DecodeError> for JsonApiError {
    fn from(e: DecodeError) -> Self {
        metrics::DECODE_ERRORS_TOTAL.inc();
        warn!(error = %e, "request body rejected by codec");
        Self::new(StatusCode::BAD_REQUEST, "Decode Error", Some(e.to_string()))
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        metrics::DECODE_ERRORS_TOTAL.inc();
        Self::new(e.status(), "Invalid JSON", Some(e.body_text()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => {
                metrics::VALIDATION_ERRORS_TOTAL.inc();
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Conflict(msg) => {
                warn!(error = %msg, "write conflicts with stored data");
                Self::new(StatusCode::CONFLICT, "Conflict", Some(msg))
            }
            // Driver text stays in the log; clients get a fixed message.
            ServiceError::Db(msg) => {
                error!(error = %msg, "repository failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database Error",
                    Some("the request could not be completed".into()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::validation("bad"), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("pet", 3), StatusCode::NOT_FOUND),
            (ServiceError::conflict("pet type 2 is in use"), StatusCode::CONFLICT),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn database_details_stay_out_of_the_body() {
        let err = JsonApiError::from(ServiceError::Db("FOREIGN KEY constraint failed (code: 1811)".into()));
        assert_eq!(err.title, "Database Error");
        let detail = err.detail.unwrap();
        assert!(!detail.contains("FOREIGN KEY"));
        assert!(!detail.contains("1811"));
    }

    #[test]
    fn decode_errors_are_bad_requests() {
        let err = JsonApiError::from(DecodeError::MissingField("petId"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail.as_deref(), Some("missing required field `petId`"));
    }
}
