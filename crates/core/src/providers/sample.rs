use async_trait::async_trait;
use chrono::{Months, NaiveDate};
use serde_json::json;

use super::traits::PriceSource;
use crate::errors::CoreError;
use crate::models::dataset::{RawDataset, RawRecord};
use crate::models::price::{PricePoint, PriceSeries};

/// Visible notice shown when the chart falls back to the built-in data.
pub const OFFLINE_NOTICE: &str = "Showing offline sample data";

/// Half-yearly gold prices (USD/oz), oldest first.
const SAMPLE_GOLD: [f64; 11] = [
    1760.0, 1805.0, 1830.0, 1790.0, 1815.0, 1935.0, 1975.0, 2045.0, 2330.0, 2640.0, 2910.0,
];

/// Half-yearly USD/INR rates, aligned with `SAMPLE_GOLD`.
const SAMPLE_RUPEE: [f64; 11] = [
    73.5, 74.2, 74.8, 77.6, 81.5, 82.4, 82.8, 83.2, 83.5, 84.1, 85.7,
];

/// The built-in sample history: eleven half-yearly points ending on `today`.
///
/// Dates are anchored to `today` so the series always falls inside the
/// five-year window.
pub fn sample_series(today: NaiveDate) -> PriceSeries {
    let last = SAMPLE_GOLD.len() - 1;
    SAMPLE_GOLD
        .iter()
        .zip(SAMPLE_RUPEE.iter())
        .enumerate()
        .filter_map(|(i, (&gold, &rupee))| {
            let months_back = u32::try_from((last - i) * 6).ok()?;
            let date = today.checked_sub_months(Months::new(months_back))?;
            Some(PricePoint::new(date, gold, rupee))
        })
        .collect()
}

/// Offline stand-in for the HTTP endpoint, serving `sample_series`.
#[derive(Debug, Clone, Copy)]
pub struct SamplePriceSource {
    today: NaiveDate,
}

impl SamplePriceSource {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn dataset(&self) -> RawDataset {
        let records = sample_series(self.today)
            .points()
            .iter()
            .map(|p| {
                RawRecord(json!({
                    "date": p.date.format("%Y-%m-%d").to_string(),
                    "goldPrice": p.gold_price,
                    "rupeeRate": p.rupee_rate,
                }))
            })
            .collect();
        RawDataset::Series(records)
    }
}

#[async_trait]
impl PriceSource for SamplePriceSource {
    fn name(&self) -> &str {
        "built-in sample data"
    }

    async fn fetch(&self) -> Result<RawDataset, CoreError> {
        Ok(self.dataset())
    }
}
