//! Gizi REST server binary.
//!
//! Resolves configuration once at startup, wires the external WHO Z-score
//! calculator adapter into the REST router, and serves HTTP.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use gizi_core::GrowthConfig;
use growth_calc::HttpGrowthCalculator;

/// Main entry point for the Gizi REST server
///
/// # Environment Variables
/// - `GIZI_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `GROWTH_CALC_URL`: Base URL of the external WHO Z-score calculator
///   service (default: "http://127.0.0.1:8080")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the calculator client cannot be constructed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("gizi=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("GIZI_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let calc_url =
        std::env::var("GROWTH_CALC_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".into());

    tracing::info!("-- Starting Gizi REST API on {}", addr);
    tracing::info!("-- Using growth calculator at {}", calc_url);

    let config = GrowthConfig::permenkes();
    let calculator = Arc::new(HttpGrowthCalculator::new(calc_url)?);
    let state = AppState::new(&config, calculator);

    let app = api_rest::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
