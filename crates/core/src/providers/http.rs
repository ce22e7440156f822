use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::traits::PriceSource;
use crate::errors::CoreError;
use crate::models::dataset::RawDataset;

/// Path of the price history endpoint.
pub const GOLD_RUPEE_PATH: &str = "/api/gold-rupee";

/// Fetches the price history from a running data endpoint.
///
/// Accepts any of the three response layouts the endpoint can produce.
pub struct HttpPriceSource {
    client: Client,
    url: String,
}

impl HttpPriceSource {
    /// `url` is the full endpoint URL, e.g. `http://localhost:3000/api/gold-rupee`.
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            url: url.into(),
        }
    }

    /// Source for the endpoint on `base_url` (scheme + host, no trailing path).
    pub fn for_base_url(base_url: &str) -> Self {
        Self::new(format!("{}{GOLD_RUPEE_PATH}", base_url.trim_end_matches('/')))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    fn name(&self) -> &str {
        "gold-rupee endpoint"
    }

    async fn fetch(&self) -> Result<RawDataset, CoreError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or(body);
            return Err(CoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = resp.bytes().await?;
        RawDataset::from_slice(&bytes)
    }
}
