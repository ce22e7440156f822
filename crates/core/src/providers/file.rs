use async_trait::async_trait;

use super::traits::PriceSource;
use crate::errors::CoreError;
use crate::models::dataset::RawDataset;
use crate::storage::data_file::DataFileLocator;

/// Reads the dataset straight from disk, bypassing HTTP.
pub struct FilePriceSource {
    locator: DataFileLocator,
}

impl FilePriceSource {
    pub fn new(locator: DataFileLocator) -> Self {
        Self { locator }
    }
}

#[async_trait]
impl PriceSource for FilePriceSource {
    fn name(&self) -> &str {
        "local data file"
    }

    async fn fetch(&self) -> Result<RawDataset, CoreError> {
        let locator = self.locator.clone();
        let (_, dataset) = tokio::task::spawn_blocking(move || locator.load())
            .await
            .map_err(|e| CoreError::FileIO(format!("data file read task failed: {e}")))??;
        Ok(dataset)
    }
}
