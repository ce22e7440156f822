use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::chart::{ChartData, LABEL_FORMAT};
use crate::models::dataset::{
    RawDataset, RawRecord, GOLD_PRICE_KEYS, RUPEE_RATE_KEYS, SPLIT_VALUE_KEYS,
};
use crate::models::price::{PricePoint, PriceSeries};
use crate::services::window_service::HistoryWindow;

/// Turns any accepted dataset layout into the canonical `PriceSeries`, and a
/// series into chart-ready arrays.
///
/// Malformed records never abort the run:
/// - a missing or non-numeric price becomes `0.0` (logged at warn),
/// - a record without a usable date is skipped (logged at warn).
#[derive(Debug, Clone, Default)]
pub struct NormalizeService;

impl NormalizeService {
    pub fn new() -> Self {
        Self
    }

    /// Reduce a raw dataset to one sorted point per date.
    pub fn to_series(&self, dataset: &RawDataset) -> PriceSeries {
        match dataset {
            RawDataset::Series(records) | RawDataset::Wrapped { data: records, .. } => {
                records.iter().filter_map(combined_point).collect()
            }
            RawDataset::Split {
                gold_data,
                rupee_data,
                ..
            } => merge_split(gold_data, rupee_data),
        }
    }

    /// Build the chart arrays, re-applying `window` defensively in case the
    /// data was not filtered upstream.
    pub fn to_chart_data(&self, mut series: PriceSeries, window: &HistoryWindow) -> ChartData {
        let removed = window.apply_to_series(&mut series);
        if removed > 0 {
            tracing::debug!(removed, cutoff = %window.cutoff(), "dropped points outside history window");
        }

        let mut chart = ChartData {
            dates: Vec::with_capacity(series.len()),
            labels: Vec::with_capacity(series.len()),
            gold_values: Vec::with_capacity(series.len()),
            rupee_values: Vec::with_capacity(series.len()),
        };
        for point in series.into_points() {
            chart.dates.push(point.date);
            chart.labels.push(point.date.format(LABEL_FORMAT).to_string());
            chart.gold_values.push(point.gold_price);
            chart.rupee_values.push(point.rupee_rate);
        }
        chart
    }

    /// `to_series` followed by `to_chart_data`.
    pub fn normalize(&self, dataset: &RawDataset, window: &HistoryWindow) -> ChartData {
        let series = self.to_series(dataset);
        self.to_chart_data(series, window)
    }
}

fn record_date(record: &RawRecord) -> Option<NaiveDate> {
    let date = record.date();
    if date.is_none() {
        tracing::warn!(date = %record.date_text(), "skipping record with unparseable date");
    }
    date
}

fn number_or_zero(record: &RawRecord, keys: &[&str], date: NaiveDate, field: &str) -> f64 {
    record.number(keys).unwrap_or_else(|| {
        tracing::warn!(%date, field, "missing or invalid value, using 0");
        0.0
    })
}

fn combined_point(record: &RawRecord) -> Option<PricePoint> {
    let date = record_date(record)?;
    Some(PricePoint {
        date,
        gold_price: number_or_zero(record, GOLD_PRICE_KEYS, date, "goldPrice"),
        rupee_rate: number_or_zero(record, RUPEE_RATE_KEYS, date, "rupeeRate"),
    })
}

fn merge_split(gold_data: &[RawRecord], rupee_data: &[RawRecord]) -> PriceSeries {
    let mut merged: BTreeMap<NaiveDate, (Option<f64>, Option<f64>)> = BTreeMap::new();

    for record in gold_data {
        if let Some(date) = record_date(record) {
            let value = number_or_zero(record, SPLIT_VALUE_KEYS, date, "goldData.price");
            merged.entry(date).or_default().0 = Some(value);
        }
    }
    for record in rupee_data {
        if let Some(date) = record_date(record) {
            let value = number_or_zero(record, SPLIT_VALUE_KEYS, date, "rupeeData.price");
            merged.entry(date).or_default().1 = Some(value);
        }
    }

    merged
        .into_iter()
        .map(|(date, (gold, rupee))| {
            let gold_price = gold.unwrap_or_else(|| {
                tracing::warn!(%date, "no gold price for date, using 0");
                0.0
            });
            let rupee_rate = rupee.unwrap_or_else(|| {
                tracing::warn!(%date, "no exchange rate for date, using 0");
                0.0
            });
            PricePoint {
                date,
                gold_price,
                rupee_rate,
            }
        })
        .collect()
}
