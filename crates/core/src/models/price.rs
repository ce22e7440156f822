use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single dated observation of the gold price and the USD/INR rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,

    /// USD per troy ounce.
    #[serde(alias = "gold_price")]
    pub gold_price: f64,

    /// Rupees per US dollar.
    #[serde(alias = "rupee_rate")]
    pub rupee_rate: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, gold_price: f64, rupee_rate: f64) -> Self {
        Self {
            date,
            gold_price,
            rupee_rate,
        }
    }
}

/// Canonical price history: sorted ascending by date, one point per date.
///
/// Every input shape is reduced to this before any charting happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from points in any order.
    /// When two points share a date the later one in the input wins.
    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, PricePoint> = BTreeMap::new();
        for point in points {
            if let Some(previous) = by_date.insert(point.date, point) {
                tracing::debug!(date = %previous.date, "duplicate price point replaced");
            }
        }
        Self {
            points: by_date.into_values().collect(),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Drop every point dated before `cutoff`. Returns the number removed.
    /// Uses binary search on the sorted points (O(log n) to find the split).
    pub fn retain_since(&mut self, cutoff: NaiveDate) -> usize {
        let split = self.points.partition_point(|p| p.date < cutoff);
        self.points.drain(..split);
        split
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
