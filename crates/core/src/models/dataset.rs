use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Field names accepted for the gold price in combined records.
pub const GOLD_PRICE_KEYS: &[&str] = &["goldPrice", "gold_price"];
/// Field names accepted for the exchange rate in combined records.
pub const RUPEE_RATE_KEYS: &[&str] = &["rupeeRate", "rupee_rate"];
/// Field names accepted for the value in split-shape records.
pub const SPLIT_VALUE_KEYS: &[&str] = &["price", "value"];

/// One record exactly as it appeared in the data file.
///
/// Kept as raw JSON so a malformed record never fails decoding of the whole
/// file; the record passes through the endpoint untouched and is only
/// interpreted during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Value);

impl RawRecord {
    /// The `date` field, if it is a string in one of the accepted formats.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0.get("date").and_then(Value::as_str).and_then(parse_date)
    }

    /// Raw text of the `date` field, for log messages.
    pub fn date_text(&self) -> String {
        match self.0.get("date") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<missing>".to_string(),
        }
    }

    /// The first of `keys` present on the record, coerced to a finite number.
    /// JSON numbers and numeric strings are accepted.
    pub fn number(&self, keys: &[&str]) -> Option<f64> {
        let value = keys.iter().find_map(|k| self.0.get(*k))?;
        let n = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        n.is_finite().then_some(n)
    }
}

/// The three data file layouts, decoded once at the boundary.
///
/// Variant order matters for `untagged`: an object carrying both
/// `goldData` and `rupeeData` is the split layout even if it also has `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDataset {
    /// `[{date, goldPrice, rupeeRate}, ...]`
    Series(Vec<RawRecord>),

    /// `{"goldData": [{date, price}], "rupeeData": [{date, price}]}`
    Split {
        #[serde(rename = "goldData")]
        gold_data: Vec<RawRecord>,
        #[serde(rename = "rupeeData")]
        rupee_data: Vec<RawRecord>,
        /// Any other top-level keys, passed through unchanged.
        #[serde(flatten)]
        rest: Map<String, Value>,
    },

    /// `{"data": [{date, goldPrice, rupeeRate}, ...]}`
    Wrapped {
        data: Vec<RawRecord>,
        #[serde(flatten)]
        rest: Map<String, Value>,
    },
}

impl RawDataset {
    /// Parse a data file's contents.
    ///
    /// Invalid JSON yields `MalformedJson` with the parser's message; valid
    /// JSON in none of the accepted layouts yields `UnrecognizedShape`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|_| CoreError::UnrecognizedShape)
    }

    pub fn shape(&self) -> DatasetShape {
        match self {
            RawDataset::Series(_) => DatasetShape::Series,
            RawDataset::Wrapped { .. } => DatasetShape::Wrapped,
            RawDataset::Split { .. } => DatasetShape::Split,
        }
    }

    /// Total number of records across all arrays.
    pub fn record_count(&self) -> usize {
        match self {
            RawDataset::Series(records) | RawDataset::Wrapped { data: records, .. } => records.len(),
            RawDataset::Split {
                gold_data,
                rupee_data,
                ..
            } => gold_data.len() + rupee_data.len(),
        }
    }

    /// Keep only the records for which `keep` returns true, in every array.
    pub fn retain_records<F>(&mut self, mut keep: F)
    where
        F: FnMut(&RawRecord) -> bool,
    {
        match self {
            RawDataset::Series(records) | RawDataset::Wrapped { data: records, .. } => {
                records.retain(|r| keep(r))
            }
            RawDataset::Split {
                gold_data,
                rupee_data,
                ..
            } => {
                gold_data.retain(|r| keep(r));
                rupee_data.retain(|r| keep(r));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetShape {
    Series,
    Wrapped,
    Split,
}

impl std::fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetShape::Series => write!(f, "array"),
            DatasetShape::Wrapped => write!(f, "data"),
            DatasetShape::Split => write!(f, "goldData/rupeeData"),
        }
    }
}

/// Parse a record date: `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}
