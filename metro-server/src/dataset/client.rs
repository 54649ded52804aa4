//! HTTP client for the stations JSON feed.

use crate::domain::Station;

use super::error::DatasetError;
use super::parse::load_str;

/// Default URL of the published stations feed.
const DEFAULT_URL: &str =
    "https://m4tinbeigi-official.github.io/tehran-metro-data/data/stations.json";

/// Configuration for the dataset client.
#[derive(Debug, Clone)]
pub struct DatasetClientConfig {
    /// Full URL of the stations document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DatasetClientConfig {
    /// Create a config pointing at the default published feed.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom feed URL (for testing or mirrors).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for DatasetClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for fetching the stations feed.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    url: String,
}

impl DatasetClient {
    /// Create a new dataset client.
    pub fn new(config: DatasetClientConfig) -> Result<Self, DatasetError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and parse the full station set.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, DatasetError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DatasetError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        load_str(&body)
    }
}
