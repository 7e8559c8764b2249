use crate::storage::{EventPublisher, PublishError};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_URL: &str = "https://api.microprediction.org";

/// REST client for the prediction-stream service: one PUT per scalar value,
/// authenticated by the hole's write key.
pub struct MicroStreamPublisher {
    client: Client,
    base_url: String,
}

impl MicroStreamPublisher {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn stream_url(&self, stream_name: &str) -> String {
        format!("{}/live/{}", self.base_url.trim_end_matches('/'), stream_name)
    }
}

#[async_trait]
impl EventPublisher for MicroStreamPublisher {
    async fn publish(
        &self,
        write_key: &str,
        stream_name: &str,
        value: i32,
    ) -> Result<(), PublishError> {
        let url = self.stream_url(stream_name);
        let resp = self
            .client
            .put(&url)
            .form(&[
                ("write_key", write_key),
                ("budget", "1"),
                ("value", &value.to_string()),
            ])
            .send()
            .await
            .map_err(|e| PublishError::new(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(PublishError::new(format!(
                "PUT {url} returned status {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
