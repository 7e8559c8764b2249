use crate::error::CoreError;
use crate::storage::PageSource;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_STATS_URL: &str = "http://www.espn.com/golf/stats/hole";

/// Fetches the hole-by-hole statistics page over HTTP.
pub struct EspnPageSource {
    client: Client,
    url: String,
}

impl EspnPageSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PageSource for EspnPageSource {
    async fn fetch(&self) -> Result<String, CoreError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CoreError::Network(format!(
                "GET {} returned status {}",
                self.url,
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))
    }
}
