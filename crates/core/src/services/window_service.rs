use chrono::{Months, NaiveDate};

use crate::models::dataset::RawDataset;
use crate::models::price::PriceSeries;

/// The inclusive history window `[today - years, today]`.
///
/// Only the lower bound is enforced; records dated after `today` are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    cutoff: NaiveDate,
}

impl HistoryWindow {
    /// Window of `years` calendar years ending on `today`.
    ///
    /// Feb 29 minus a non-multiple-of-four number of years clamps to Feb 28.
    pub fn last_years(today: NaiveDate, years: u32) -> Self {
        let cutoff = today
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN);
        Self { cutoff }
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.cutoff
    }

    /// Filter a raw dataset in place, preserving its shape.
    /// Records without a parseable date are dropped. Returns how many were removed.
    pub fn apply_to_dataset(&self, dataset: &mut RawDataset) -> usize {
        let before = dataset.record_count();
        dataset.retain_records(|record| record.date().is_some_and(|d| self.contains(d)));
        let removed = before - dataset.record_count();
        tracing::debug!(cutoff = %self.cutoff, removed, "applied history window to dataset");
        removed
    }

    /// Filter a canonical series in place. Returns how many points were removed.
    pub fn apply_to_series(&self, series: &mut PriceSeries) -> usize {
        series.retain_since(self.cutoff)
    }
}
