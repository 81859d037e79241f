use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for fetching a remote player document
pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// Fetch the body of `url`; any non-success status is an error
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send_get_request(url).await?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error! status: {}", response.status());
        }

        response.text().await.context("Failed to read response body")
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}
