use std::time::{Duration, Instant};

use log::trace;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use url::Url;

use super::error::HttpError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub(crate) struct HttpClient {
    base_url: Url,
    client: reqwest::Client,
    last_latency: RwLock<Option<(Duration, Instant)>>,
}

impl HttpClient {
    pub fn new(base_url: Url) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            last_latency: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a request to an absolute URL and decodes the JSON response.
    pub async fn send_request<T: DeserializeOwned>(&self, method: Method, url: Url) -> Result<T, HttpError> {
        let start = Instant::now();
        trace!(method:% = method, url:% = url; "Sending explorer request");

        let resp = self.client.request(method, url).send().await?;
        let latency = start.elapsed();
        self.update_latency(latency).await;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            return Err(HttpError::ServerError { status, body });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn update_latency(&self, duration: Duration) {
        *self.last_latency.write().await = Some((duration, Instant::now()));
    }

    pub async fn get_latency(&self) -> Option<Duration> {
        self.last_latency.read().await.map(|(d, _)| d)
    }
}
