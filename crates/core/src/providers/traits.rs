use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::dataset::RawDataset;

/// Where the chart renderer gets its data from.
///
/// The HTTP endpoint is the production source; tests and the offline
/// fallback plug in their own implementations.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the dataset once. Retrying is the caller's job.
    async fn fetch(&self) -> Result<RawDataset, CoreError>;
}
