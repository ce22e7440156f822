pub mod clock;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::path::PathBuf;
use std::sync::Arc;

use clock::{Clock, SystemClock};
use errors::CoreError;
use models::{
    chart::{ChartConfig, ChartData},
    dataset::RawDataset,
    settings::Settings,
};
use services::{
    chart_service::ChartService, normalize_service::NormalizeService, svg_painter::SvgPainter,
    window_service::HistoryWindow,
};
use providers::sample::{sample_series, OFFLINE_NOTICE};
use storage::data_file::DataFileLocator;

/// Main entry point for the gold vs. rupee history.
///
/// Each call reads the data file fresh (nothing is cached between calls) and
/// applies the history window.
#[must_use]
#[derive(Clone)]
pub struct PriceHistory {
    locator: DataFileLocator,
    window_years: u32,
    clock: Arc<dyn Clock>,
    normalize_service: NormalizeService,
    chart_service: ChartService,
    painter: SvgPainter,
}

impl std::fmt::Debug for PriceHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceHistory")
            .field("candidates", &self.locator.candidates())
            .field("window_years", &self.window_years)
            .field("today", &self.clock.today())
            .finish()
    }
}

impl PriceHistory {
    /// History served from the settings' candidate files, windowed by the real date.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            DataFileLocator::new(settings.data_files.clone()),
            settings.window_years,
            Arc::new(SystemClock),
        )
    }

    pub fn new(locator: DataFileLocator, window_years: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            locator,
            window_years,
            clock,
            normalize_service: NormalizeService::new(),
            chart_service: ChartService::new(),
            painter: SvgPainter::default(),
        }
    }

    pub fn with_painter(mut self, painter: SvgPainter) -> Self {
        self.painter = painter;
        self
    }

    pub fn locator(&self) -> &DataFileLocator {
        &self.locator
    }

    /// The window as of today.
    pub fn window(&self) -> HistoryWindow {
        HistoryWindow::last_years(self.clock.today(), self.window_years)
    }

    /// Load the data file and keep only records inside the window.
    /// The result has the same layout the file had.
    pub fn load_dataset(&self) -> Result<RawDataset, CoreError> {
        let (path, mut dataset) = self.locator.load()?;
        let removed = self.window().apply_to_dataset(&mut dataset);
        tracing::debug!(
            path = %path.display(),
            kept = dataset.record_count(),
            removed,
            "served dataset"
        );
        Ok(dataset)
    }

    /// Path of the data file that would be served, if any.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.locator.locate().map(PathBuf::from)
    }

    pub fn chart_data(&self) -> Result<ChartData, CoreError> {
        let dataset = self.load_dataset()?;
        Ok(self.normalize_service.normalize(&dataset, &self.window()))
    }

    /// What the chart should show right now.
    ///
    /// Live data when the file loads and has points in the window. Otherwise
    /// the sample series, with `OFFLINE_NOTICE` as the second element.
    pub fn display_data(&self) -> (ChartData, Option<&'static str>) {
        let reason = match self.chart_data() {
            Ok(data) if !data.is_empty() => return (data, None),
            Ok(_) => "no points in window".to_string(),
            Err(e) => e.to_string(),
        };
        tracing::warn!(%reason, "charting sample data");
        let data = self
            .normalize_service
            .to_chart_data(sample_series(self.clock.today()), &self.window());
        (data, Some(OFFLINE_NOTICE))
    }

    pub fn chart_config(&self) -> ChartConfig {
        let (data, notice) = self.display_data();
        self.chart_service.build_config(&data, notice)
    }

    /// Only painting itself can fail; data errors fall back to the sample.
    pub fn chart_svg(&self) -> Result<String, CoreError> {
        let (data, notice) = self.display_data();
        self.painter.paint(&data, notice)
    }
}
