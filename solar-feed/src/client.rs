//! HTTP client for the `/history` and `/current` endpoints.

use crate::{
    error::{FetchError, Result},
    sample::SeriesSet,
    snapshot::CurrentSnapshot,
};
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const HISTORY_PATH: &str = "/history";
pub const CURRENT_PATH: &str = "/current";

/// How long a full load may take before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the dashboard needs, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedData {
    pub series: SeriesSet,
    pub snapshot: CurrentSnapshot,
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
    http: Client,
}

impl FeedClient {
    /// Create a client for `base_url` (e.g. `https://example.com/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = Client::builder()
            .build()
            .map_err(|source| FetchError::Http {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;
        let body = response.text().await.map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }

    pub async fn get_history(&self) -> Result<SeriesSet> {
        self.get_json(HISTORY_PATH).await
    }

    pub async fn get_current(&self) -> Result<CurrentSnapshot> {
        self.get_json(CURRENT_PATH).await
    }

    /// Fetch history and the current snapshot concurrently.
    ///
    /// Fails as soon as either request fails. If both have not finished
    /// within `deadline` the in-flight requests are dropped and
    /// `FetchError::Timeout` is returned.
    pub async fn load(&self, deadline: Duration) -> Result<FeedData> {
        let both = async { tokio::try_join!(self.get_history(), self.get_current()) };
        match tokio::time::timeout(deadline, both).await {
            Ok(result) => {
                let (series, snapshot) = result?;
                info!(
                    "Loaded {} samples for today and {} for yesterday",
                    series.today.len(),
                    series.yesterday.len()
                );
                Ok(FeedData { series, snapshot })
            }
            Err(_elapsed) => {
                warn!("Feed at {} did not answer within {:?}", self.base_url, deadline);
                Err(FetchError::Timeout(deadline))
            }
        }
    }
}
