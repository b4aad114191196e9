use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "petclinic_http_requests_total",
        "HTTP requests by status class",
        &["class"]
    )
    .expect("register http_requests_total")
});

pub static DECODE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "petclinic_decode_errors_total",
        "Request bodies rejected by the JSON codec"
    )
    .expect("register decode_errors_total")
});

pub static VALIDATION_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "petclinic_validation_errors_total",
        "Requests rejected by business validation"
    )
    .expect("register validation_errors_total")
});

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}

/// Middleware counting responses by status class.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let res = next.run(req).await;
    HTTP_REQUESTS_TOTAL.with_label_values(&[status_class(res.status())]).inc();
    res
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> impl IntoResponse {
    // Touch the statics so every series shows up before its first increment.
    Lazy::force(&DECODE_ERRORS_TOTAL);
    Lazy::force(&VALIDATION_ERRORS_TOTAL);
    encode_metrics()
}
