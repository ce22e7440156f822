use chrono::{Days, NaiveDate};
use plotters::prelude::*;

use crate::errors::CoreError;
use crate::models::chart::{ChartData, LABEL_FORMAT};
use crate::services::chart_service::{CHART_TITLE, GOLD_LABEL, RUPEE_LABEL};

const GOLD_RGB: RGBColor = RGBColor(212, 175, 55);
const RUPEE_RGB: RGBColor = RGBColor(54, 162, 235);
const NOTICE_RGB: RGBColor = RGBColor(200, 60, 40);

/// Paints chart data as a standalone SVG document.
///
/// Gold is drawn against the left axis, the exchange rate against the right
/// axis, with a date X axis.
#[derive(Debug, Clone, Copy)]
pub struct SvgPainter {
    width: u32,
    height: u32,
}

impl Default for SvgPainter {
    fn default() -> Self {
        Self::new(1000, 500)
    }
}

impl SvgPainter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Render `data` to an SVG string. `notice`, when set, is printed in a
    /// banner above the plot.
    ///
    /// Empty data still produces a titled frame with a "No data available"
    /// caption.
    pub fn paint(&self, data: &ChartData, notice: Option<&str>) -> Result<String, CoreError> {
        let n = data.dates.len();
        if data.gold_values.len() != n || data.rupee_values.len() != n {
            return Err(CoreError::Render(format!(
                "mismatched series lengths: {} dates, {} gold, {} rupee",
                n,
                data.gold_values.len(),
                data.rupee_values.len()
            )));
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let body = match notice {
                Some(text) => {
                    let (banner, body) = root.split_vertically(30);
                    banner
                        .draw(&Text::new(
                            text.to_string(),
                            (12, 8),
                            ("sans-serif", 15.0).into_font().color(&NOTICE_RGB),
                        ))
                        .map_err(render_err)?;
                    body
                }
                None => root.clone(),
            };

            if n == 0 {
                let center_x = i32::try_from(self.width / 2).unwrap_or(0);
                let center_y = i32::try_from(self.height / 2).unwrap_or(0);
                body.draw(&Text::new(
                    CHART_TITLE.to_string(),
                    (center_x - 220, 20),
                    ("sans-serif", 22.0).into_font(),
                ))
                .map_err(render_err)?;
                body.draw(&Text::new(
                    "No data available".to_string(),
                    (center_x - 70, center_y),
                    ("sans-serif", 18.0).into_font().color(&BLACK.mix(0.6)),
                ))
                .map_err(render_err)?;
            } else {
                let (x_from, x_to) = date_span(&data.dates);
                let gold_range = padded_range(&data.gold_values);
                let rupee_range = padded_range(&data.rupee_values);

                let mut chart = ChartBuilder::on(&body)
                    .caption(CHART_TITLE, ("sans-serif", 22.0).into_font())
                    .margin(15)
                    .x_label_area_size(40)
                    .y_label_area_size(70)
                    .right_y_label_area_size(60)
                    .build_cartesian_2d(x_from..x_to, gold_range)
                    .map_err(render_err)?
                    .set_secondary_coord(x_from..x_to, rupee_range);

                chart
                    .configure_mesh()
                    .x_labels(8)
                    .x_label_formatter(&|d: &NaiveDate| d.format(LABEL_FORMAT).to_string())
                    .y_label_formatter(&|v: &f64| format!("{v:.0}"))
                    .x_desc("Date")
                    .y_desc(GOLD_LABEL)
                    .draw()
                    .map_err(render_err)?;

                chart
                    .configure_secondary_axes()
                    .y_label_formatter(&|v: &f64| format!("{v:.1}"))
                    .y_desc(RUPEE_LABEL)
                    .draw()
                    .map_err(render_err)?;

                chart
                    .draw_series(LineSeries::new(
                        data.dates.iter().copied().zip(data.gold_values.iter().copied()),
                        GOLD_RGB.stroke_width(2),
                    ))
                    .map_err(render_err)?
                    .label(GOLD_LABEL)
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GOLD_RGB));

                chart
                    .draw_secondary_series(LineSeries::new(
                        data.dates.iter().copied().zip(data.rupee_values.iter().copied()),
                        RUPEE_RGB.stroke_width(2),
                    ))
                    .map_err(render_err)?
                    .label(RUPEE_LABEL)
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RUPEE_RGB));

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .draw()
                    .map_err(render_err)?;
            }

            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> CoreError {
    CoreError::Render(e.to_string())
}

/// First and last date, widened by two weeks either side for a single point.
fn date_span(dates: &[NaiveDate]) -> (NaiveDate, NaiveDate) {
    let first = dates.iter().copied().min().unwrap_or(NaiveDate::MIN);
    let last = dates.iter().copied().max().unwrap_or(first);
    if first < last {
        return (first, last);
    }
    let from = first.checked_sub_days(Days::new(14)).unwrap_or(first);
    let to = last.checked_add_days(Days::new(14)).unwrap_or(last);
    (from, to)
}

/// Value range with 10% headroom, never collapsing to zero width.
fn padded_range(values: &[f64]) -> std::ops::Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(max.abs() * 0.02).max(1.0);
    let padding = span * 0.1;
    (min - padding).max(0.0)..(max + padding)
}
