//! SmartHealth Host Server
//!
//! Serves the built single-page frontend, built with Axum.
//!
//! Any path that is not a file in the bundle gets `index.html`, so
//! client-side routes such as `/dashboard?tab=sleep` work on a fresh load
//! and the frontend derives the active tab from the query itself.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Frontend
//! - `GET /*` - Static bundle with `index.html` fallback

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let frontend = ServeDir::new(state.static_dir())
        .fallback(ServeFile::new(state.config.index_file()));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.addr();
    let static_dir = state.static_dir().to_path_buf();

    if !state.frontend_ready().await {
        tracing::warn!(
            "No index.html in {:?}; build the frontend with `trunk build` first",
            static_dir
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SmartHealth listening on {} (serving {:?})", addr, static_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("SmartHealth shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>smarthealth</body></html>";

    fn create_test_app(with_bundle: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
            std::fs::create_dir(dir.path().join("smarthealth")).unwrap();
            std::fs::write(dir.path().join("smarthealth/app.js"), "console.log(1)").unwrap();
        }

        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        (build_router(AppState::new(config)), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_with_bundle() {
        let (app, _dir) = create_test_app(true);
        let (status, _) = get(app, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_bundle() {
        let (app, _dir) = create_test_app(false);
        let (status, body) = get(app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("SERVICE_UNAVAILABLE"));
        assert!(body.contains("request_id"));
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(false);
        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["frontend"], "missing");
    }

    #[tokio::test]
    async fn test_deep_link_serves_index() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app, "/dashboard?tab=heart").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app, "/smarthealth/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }
}
