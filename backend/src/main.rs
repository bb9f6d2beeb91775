//! Fertilizer Advisory Service - Backend Server
//!
//! An advisory endpoint for farmers: soil-nutrient reference lookup, optional
//! live weather, and a rule-based fertilizer recommendation with a rendered
//! advisory message.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::ReferenceTable;

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::weather::WeatherClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Reference table, loaded once at startup
    pub reference: Arc<ReferenceTable>,
    /// Present only when a weather credential is configured
    pub weather_client: Option<WeatherClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fra_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Fertilizer Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    let weather_client = if config.weather.has_credential() {
        tracing::info!("Live weather enabled via {}", config.weather.api_endpoint);
        Some(WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        ))
    } else {
        tracing::info!("No weather credential configured; using default conditions");
        None
    };

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        reference: Arc::new(ReferenceTable::builtin()),
        weather_client,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
