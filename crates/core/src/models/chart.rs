use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format for X-axis labels ("Jan 2020").
pub const LABEL_FORMAT: &str = "%b %Y";

/// Chart-ready parallel arrays.
///
/// `dates`, `labels`, `gold_values` and `rupee_values` always have the same
/// length and are ordered ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Raw dates behind each label, used by painters that need a time axis.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub dates: Vec<NaiveDate>,
    pub labels: Vec<String>,
    pub gold_values: Vec<f64>,
    pub rupee_values: Vec<f64>,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Which vertical axis a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisId {
    #[serde(rename = "y")]
    Left,
    #[serde(rename = "y1")]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

/// A dual-axis line chart description, shaped so a browser charting
/// library can consume it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartConfigData,
    pub options: ChartOptions,
    /// Visible warning shown above the chart (e.g. offline sample data).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: AxisId,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: ChartScales,
    pub plugins: ChartPlugins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub x: CategoryAxis,
    pub y: ValueAxis,
    pub y1: ValueAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    pub title: AxisTitle,
    pub ticks: AxisTicks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTicks {
    pub max_ticks_limit: u32,
    pub auto_skip: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub position: AxisPosition,
    pub title: AxisTitle,
    pub grid: AxisGrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisGrid {
    /// `false` on the right axis so the two grids don't overlap.
    pub draw_on_chart_area: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlugins {
    pub title: AxisTitle,
    pub legend: ChartLegend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLegend {
    pub display: bool,
    pub position: String,
}
