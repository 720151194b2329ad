//! # API REST
//!
//! REST API implementation for the Gizi growth and development screening
//! service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS)
//!
//! Domain logic lives in `gizi-core`; the WHO Z-score mathematics sits behind
//! the `GrowthCalculator` trait and is injected when building [`AppState`].

#![warn(rust_2018_idioms)]

pub mod routes;
pub mod wire;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use routes::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        routes::calculate_zscore,
        routes::evaluate_kpsp,
        routes::kpsp_questions,
        routes::create_report,
        routes::immunisation_due,
        routes::info,
    ),
    components(schemas(
        wire::HealthRes,
        wire::ZScoreReq,
        wire::ZScoreRes,
        wire::ZScoreInputs,
        wire::ClassificationRes,
        wire::KpspReq,
        wire::KpspRes,
        wire::QuestionsRes,
        wire::ReportReq,
        wire::ReportRes,
        wire::ZScoreEntryRes,
        wire::ImmunisationRes,
        wire::InfoRes,
    ))
)]
struct ApiDoc;

/// Build the REST router with all endpoints, Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/zscore", post(routes::calculate_zscore))
        .route("/api/kpsp", post(routes::evaluate_kpsp))
        .route("/api/kpsp/questions/:age_months", get(routes::kpsp_questions))
        .route("/api/report", post(routes::create_report))
        .route("/api/immunisation/:age_months", get(routes::immunisation_due))
        .route("/api/info", get(routes::info))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
