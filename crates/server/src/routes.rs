use axum::{middleware, routing::get, routing::post, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc, state::AppState};

pub mod owners;
pub mod pet_types;
pub mod pets;
pub mod specialties;
pub mod users;
pub mod vets;
pub mod visits;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, metrics, docs and the `/api` resources.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/owners", get(owners::list).post(owners::create))
        .route("/api/owners/:id", get(owners::get).put(owners::update).delete(owners::delete))
        .route("/api/pets", get(pets::list).post(pets::create))
        .route("/api/pets/:id", get(pets::get).put(pets::update).delete(pets::delete))
        .route("/api/pets/:id/visits", get(pets::visits))
        .route("/api/pettypes", get(pet_types::list).post(pet_types::create))
        .route("/api/pettypes/:id", get(pet_types::get).put(pet_types::update).delete(pet_types::delete))
        .route("/api/visits", get(visits::list).post(visits::create))
        .route("/api/visits/:id", get(visits::get).put(visits::update).delete(visits::delete))
        .route("/api/specialties", get(specialties::list).post(specialties::create))
        .route(
            "/api/specialties/:id",
            get(specialties::get).put(specialties::update).delete(specialties::delete),
        )
        .route("/api/vets", get(vets::list).post(vets::create))
        .route("/api/vets/:id", get(vets::get).put(vets::update).delete(vets::delete))
        .route("/api/users", post(users::create));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
