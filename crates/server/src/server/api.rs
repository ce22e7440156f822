use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use gold_rupee_core::errors::CoreError;
use gold_rupee_core::models::chart::ChartConfig;
use gold_rupee_core::models::dataset::RawDataset;
use gold_rupee_core::PriceHistory;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::server::AppState;

/// Run a synchronous `PriceHistory` call on the blocking pool.
async fn with_history<T, F>(history: PriceHistory, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&PriceHistory) -> Result<T, CoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&history))
        .await
        .map_err(|e| ApiError(CoreError::FileIO(format!("data file task failed: {e}"))))?
        .map_err(ApiError)
}

/// `GET /api/gold-rupee`
///
/// The windowed dataset in whatever layout the data file uses.
pub async fn gold_rupee_handler(State(state): State<AppState>) -> Result<Json<RawDataset>, ApiError> {
    let dataset = with_history(state.history.clone(), PriceHistory::load_dataset).await?;
    debug!(shape = %dataset.shape(), records = dataset.record_count(), "serving dataset");
    Ok(Json(dataset))
}

/// `GET /api/gold-rupee/chart`
///
/// Falls back to the sample series with a notice when the data file is
/// missing or unreadable, so the page always has something to draw.
pub async fn chart_config_handler(
    State(state): State<AppState>,
) -> Result<Json<ChartConfig>, ApiError> {
    let config = with_history(state.history.clone(), |h| Ok(h.chart_config())).await?;
    if let Some(notice) = &config.notice {
        debug!(%notice, "serving fallback chart config");
    }
    Ok(Json(config))
}

/// `GET /api/gold-rupee/chart.svg`
///
/// Same fallback as the chart config; only a painting failure is an error.
pub async fn chart_svg_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let svg = with_history(state.history.clone(), PriceHistory::chart_svg).await?;
    Ok((
        [(CONTENT_TYPE, "image/svg+xml"), (CACHE_CONTROL, "no-cache")],
        svg,
    )
        .into_response())
}

/// `GET /health`
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
