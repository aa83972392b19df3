//! Roster user-directory server
//!
//! A minimal HTTP service exposing CRUD over a single user collection in
//! MongoDB, with password-hash login, JWT bearer authentication, and a
//! seeding endpoint backed by the public random-user generator.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{HeaderValue, Method, StatusCode};
use axum::{routing::get, Json, Router};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use roster_server::auth::AuthService;
use roster_server::config::Config;
use roster_server::db::UserStore;
use roster_server::middleware;
use roster_server::routes;
use roster_server::seeding::SeedService;
use roster_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(
        environment = config.environment.as_str(),
        database = %config.mongodb_uri_masked(),
        "Starting roster-server"
    );

    // Connection parameters only; each request opens its own client
    let store = Arc::new(UserStore::new(
        config.mongodb_uri.clone(),
        config.database_name.clone(),
    ));

    let auth_service = Arc::new(AuthService::new(
        store.clone(),
        config.access_token_secret.clone(),
        config.access_token_ttl_seconds,
    ));

    let seed_service = Arc::new(SeedService::new(
        store.clone(),
        config.random_user_url.clone(),
        config.seed_count,
        config.bcrypt_cost,
        PathBuf::from(&config.seed_output_path),
    ));

    // Create shared app state
    let app_state = AppState::new(
        store.clone(),
        auth_service,
        seed_service,
        config.bcrypt_cost,
    );

    // Clone store for health check
    let health_store = store.clone();

    // Create the app router
    let app = Router::new()
        .route("/", get(root))
        .route("/isalive", get(is_alive))
        .route("/health", get(move || health_check(health_store.clone())))
        .merge(routes::auth_routes())
        .merge(routes::user_routes())
        .merge(routes::seed_routes())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(config.cors_allowed_origins.as_deref()));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

async fn root() -> &'static str {
    "Roster API Server"
}

/// Liveness probe: bare 200
async fn is_alive() -> StatusCode {
    StatusCode::OK
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    version: String,
}

/// Health check endpoint
async fn health_check(store: Arc<UserStore>) -> Json<HealthResponse> {
    let db_status = match store.ping().await {
        Ok(_) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if db_status == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database: db_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let allowed_origins_str = allowed_origins.unwrap_or_default();

    if allowed_origins_str.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins_str
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
