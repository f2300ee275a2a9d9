pub mod news;

use axum::{
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use http::{header, HeaderValue, Method, StatusCode};
use serde_json::json;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::{error::Error, str::FromStr, sync::Arc};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    db::pg::PgNewsStore,
    handlers::news::get_active_news,
    routes::news::news_routes,
    utils::{config::Config, state::AppState},
};

pub async fn make_app() -> Result<Router, Box<dyn Error>> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let config = Config::init();

    info!("Configuration loaded successfully");
    let connect_options = PgConnectOptions::from_str(&config.database_url)?.statement_cache_capacity(0);
    // Create database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .idle_timeout(Some(std::time::Duration::from_secs(60)))
        .connect_with(connect_options)
        .await?;

    info!("Database connection pool created successfully");
    let state = Arc::new(AppState {
        store: Arc::new(PgNewsStore::new(db_pool)),
        config,
    });

    let app = app_with_state(state);
    info!("Application initialized successfully");

    Ok(app)
}

/// Router assembly, split from [`make_app`] so tests can inject a store.
pub fn app_with_state(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(health_check).post(get_active_news))
        .nest("/api/v1", news_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn health_check() -> impl IntoResponse {
    return (StatusCode::OK, Json(json!({"message": "ok"}))).into_response();
}
