use crate::models::chart::{
    AxisGrid, AxisId, AxisPosition, AxisTicks, AxisTitle, CategoryAxis, ChartConfig,
    ChartConfigData, ChartData, ChartDataset, ChartLegend, ChartOptions, ChartPlugins,
    ChartScales, ValueAxis,
};

pub const CHART_TITLE: &str = "Gold Price vs USD/INR Exchange Rate (Last 5 Years)";
pub const GOLD_LABEL: &str = "Gold Price (USD/oz)";
pub const RUPEE_LABEL: &str = "USD/INR Exchange Rate";

pub const GOLD_COLOR: &str = "rgb(212, 175, 55)";
pub const RUPEE_COLOR: &str = "rgb(54, 162, 235)";

/// Builds the dual-axis chart description from normalized data.
///
/// Gold goes on the left axis, the exchange rate on the right axis.
#[derive(Debug, Clone, Default)]
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    pub fn build_config(&self, data: &ChartData, notice: Option<&str>) -> ChartConfig {
        ChartConfig {
            kind: "line".to_string(),
            data: ChartConfigData {
                labels: data.labels.clone(),
                datasets: vec![
                    dataset(GOLD_LABEL, &data.gold_values, AxisId::Left, GOLD_COLOR),
                    dataset(RUPEE_LABEL, &data.rupee_values, AxisId::Right, RUPEE_COLOR),
                ],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                scales: ChartScales {
                    x: CategoryAxis {
                        title: title("Date"),
                        ticks: AxisTicks {
                            max_ticks_limit: 12,
                            auto_skip: true,
                        },
                    },
                    y: ValueAxis {
                        position: AxisPosition::Left,
                        title: title(GOLD_LABEL),
                        grid: AxisGrid {
                            draw_on_chart_area: true,
                        },
                    },
                    y1: ValueAxis {
                        position: AxisPosition::Right,
                        title: title(RUPEE_LABEL),
                        grid: AxisGrid {
                            draw_on_chart_area: false,
                        },
                    },
                },
                plugins: ChartPlugins {
                    title: title(CHART_TITLE),
                    legend: ChartLegend {
                        display: true,
                        position: "top".to_string(),
                    },
                },
            },
            notice: notice.map(str::to_string),
        }
    }
}

fn dataset(label: &str, values: &[f64], axis: AxisId, color: &str) -> ChartDataset {
    ChartDataset {
        label: label.to_string(),
        data: values.to_vec(),
        y_axis_id: axis,
        border_color: color.to_string(),
        background_color: color.replace("rgb(", "rgba(").replace(')', ", 0.1)"),
        tension: 0.1,
    }
}

fn title(text: &str) -> AxisTitle {
    AxisTitle {
        display: true,
        text: text.to_string(),
    }
}
