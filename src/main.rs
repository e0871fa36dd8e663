//! Seizure Detection Server
//!
//! Scores one 178-sample EEG epoch per request with a pre-trained classifier.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  SEIZURE DETECTION AI                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌────────────────────┐ │
//! │  │  Page /   │   │  Input       │   │  InferenceContext  │ │
//! │  │  JSON API ├──►│  Validation  ├──►│  scaler → ONNX     │ │
//! │  │  (Axum)   │   │  (Submission)│   │  → PredictionResult│ │
//! │  └───────────┘   └──────────────┘   └────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod constants;
mod error;
mod handlers;
mod input;
mod model;
mod render;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

use model::InferenceContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    init_tracing(config.json_logs);

    tracing::info!("{} v{} starting...", constants::APP_NAME, constants::APP_VERSION);
    tracing::info!("Environment: {}", config.environment);
    if config.is_production() && config.model_sha256.is_none() {
        tracing::warn!("MODEL_SHA256 not set - model file will not be verified");
    }

    // Load artifacts once; nothing can be scored without them
    let context = InferenceContext::load(&config).with_context(|| {
        format!(
            "failed to load artifacts (model: {}, scaler: {})",
            config.model_path.display(),
            config.scaler_path.display()
        )
    })?;

    // Build application state
    let state = AppState {
        context: Arc::new(context),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "seizure_detect=debug,tower_http=debug".into());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<InferenceContext>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    // Interactive page
    let page_routes = Router::new()
        .route("/", get(handlers::page::index))
        .route("/analyze", post(handlers::page::analyze));

    // JSON API
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/model/status", get(handlers::status::get));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
