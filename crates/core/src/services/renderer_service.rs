use std::collections::HashMap;
use std::sync::Arc;

use crate::clock::Clock;
use crate::errors::CoreError;
use crate::models::chart::{ChartConfig, ChartData};
use crate::models::settings::RendererSettings;
use crate::providers::sample::{sample_series, OFFLINE_NOTICE};
use crate::providers::traits::PriceSource;
use crate::services::chart_service::ChartService;
use crate::services::normalize_service::NormalizeService;
use crate::services::svg_painter::SvgPainter;
use crate::services::window_service::HistoryWindow;

/// Where a renderer is in its fetch → transform → render run.
///
/// A run moves `Loading → Retrying(1..=n) → Rendered | Fallback`; it never
/// goes back once `Rendered` or `Fallback` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Retrying { attempt: u32 },
    Rendered,
    Fallback,
}

/// The chart a renderer produced, kept by the renderer that owns it.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub data: ChartData,
    pub config: ChartConfig,
    pub svg: String,
    /// Set when the chart shows something other than live data.
    pub notice: Option<String>,
}

impl RenderedChart {
    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}

/// One chart instance: fetches, normalizes and paints, with a fixed retry
/// policy and a sample-data fallback so the chart area is never blank.
pub struct ChartRenderer {
    source: Arc<dyn PriceSource>,
    clock: Arc<dyn Clock>,
    policy: RendererSettings,
    window_years: u32,
    painter: SvgPainter,
    normalize_service: NormalizeService,
    chart_service: ChartService,
    state: LoadState,
    history: Vec<LoadState>,
    chart: Option<RenderedChart>,
}

impl std::fmt::Debug for ChartRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRenderer")
            .field("source", &self.source.name())
            .field("policy", &self.policy)
            .field("state", &self.state)
            .field("rendered", &self.chart.is_some())
            .finish()
    }
}

impl ChartRenderer {
    pub fn new(
        source: Arc<dyn PriceSource>,
        clock: Arc<dyn Clock>,
        policy: RendererSettings,
        window_years: u32,
    ) -> Self {
        Self {
            source,
            clock,
            policy,
            window_years,
            painter: SvgPainter::default(),
            normalize_service: NormalizeService::new(),
            chart_service: ChartService::new(),
            state: LoadState::Idle,
            history: Vec::new(),
            chart: None,
        }
    }

    pub fn with_painter(mut self, painter: SvgPainter) -> Self {
        self.painter = painter;
        self
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Every state entered so far, in order.
    pub fn history(&self) -> &[LoadState] {
        &self.history
    }

    pub fn chart(&self) -> Option<&RenderedChart> {
        self.chart.as_ref()
    }

    pub fn is_rendered(&self) -> bool {
        self.chart.is_some()
    }

    fn transition(&mut self, next: LoadState) {
        tracing::debug!(from = ?self.state, to = ?next, source = self.source.name(), "renderer state change");
        self.state = next;
        self.history.push(next);
    }

    /// Run the pipeline once and keep the result.
    ///
    /// Fetch failures are retried `policy.retries` times with a fixed delay;
    /// after that, or when the fetched data has no usable points, the
    /// built-in sample series is drawn with `OFFLINE_NOTICE`.
    pub async fn render(&mut self) -> Result<&RenderedChart, CoreError> {
        self.transition(LoadState::Loading);
        let today = self.clock.today();
        let window = HistoryWindow::last_years(today, self.window_years);

        let mut attempt = 0;
        let fetched = loop {
            match self.source.fetch().await {
                Ok(dataset) => break Some(dataset),
                Err(e) => {
                    tracing::warn!(source = self.source.name(), attempt, error = %e, "fetch failed");
                    if attempt >= self.policy.retries {
                        break None;
                    }
                    attempt += 1;
                    self.transition(LoadState::Retrying { attempt });
                    tokio::time::sleep(self.policy.retry_delay()).await;
                }
            }
        };

        let live = fetched
            .map(|dataset| self.normalize_service.normalize(&dataset, &window))
            .filter(|data| !data.is_empty());

        let (data, notice, state) = match live {
            Some(data) => (data, None, LoadState::Rendered),
            None => {
                tracing::warn!(source = self.source.name(), "falling back to sample data");
                let data = self
                    .normalize_service
                    .to_chart_data(sample_series(today), &window);
                (data, Some(OFFLINE_NOTICE.to_string()), LoadState::Fallback)
            }
        };

        let config = self.chart_service.build_config(&data, notice.as_deref());
        let svg = self.painter.paint(&data, notice.as_deref())?;
        self.transition(state);

        Ok(self.chart.insert(RenderedChart {
            data,
            config,
            svg,
            notice,
        }))
    }
}

/// Owns one renderer per container id and renders each container at most once.
#[derive(Debug, Default)]
pub struct ChartPage {
    charts: HashMap<String, ChartRenderer>,
}

impl ChartPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `container` with the renderer `make` builds, unless the
    /// container was already initialized, in which case its existing chart
    /// is returned and `make` is not called.
    pub async fn mount<F>(&mut self, container: &str, make: F) -> Result<&RenderedChart, CoreError>
    where
        F: FnOnce() -> ChartRenderer,
    {
        let renderer = self
            .charts
            .entry(container.to_string())
            .or_insert_with(make);
        if !renderer.is_rendered() {
            renderer.render().await?;
        } else {
            tracing::debug!(container, "container already initialized");
        }
        renderer
            .chart()
            .ok_or_else(|| CoreError::Render(format!("container {container} has no chart")))
    }

    pub fn is_initialized(&self, container: &str) -> bool {
        self.charts.get(container).is_some_and(ChartRenderer::is_rendered)
    }

    pub fn renderer(&self, container: &str) -> Option<&ChartRenderer> {
        self.charts.get(container)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
