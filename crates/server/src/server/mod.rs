pub mod api;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::{routing::get, Router};
use gold_rupee_core::PriceHistory;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers.
///
/// Read-only: every request loads the data file itself.
#[derive(Clone, Debug)]
pub struct AppState {
    pub history: PriceHistory,
}

/// Build the router: JSON endpoints under `/api`, the static front end for
/// everything else.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        tracing::info_span!(
            "request",
            id = %uuid::Uuid::new_v4(),
            method = %req.method(),
            path = %req.uri().path(),
        )
    });

    Router::new()
        .route("/api/gold-rupee", get(api::gold_rupee_handler))
        .route("/api/gold-rupee/chart", get(api::chart_config_handler))
        .route("/api/gold-rupee/chart.svg", get(api::chart_svg_handler))
        .route("/health", get(api::health_handler))
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .layer(trace)
        .with_state(state)
}

/// Bind `port` on all interfaces and serve until the process is stopped.
pub async fn serve(
    state: AppState,
    public_dir: &Path,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Registering routes:");
    tracing::info!("  GET /api/gold-rupee");
    tracing::info!("  GET /api/gold-rupee/chart");
    tracing::info!("  GET /api/gold-rupee/chart.svg");
    tracing::info!("  GET /health");
    tracing::info!("  GET /* (static files from {})", public_dir.display());

    let app = router(state, public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
