// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the remote gallery API.
//!
//! ```text
//! GET <base>?event_id=<id>&page=<n>&page_size=<size>&key=<key>&order_by=2&order_asc=true
//! ```
//!
//! Failures are classified into [`GalleryError`]. While the shared
//! [`NetworkMonitor`] reports offline, no request is sent at all.

use super::normalize::normalize_page;
use super::source::{GalleryPage, GallerySource};
use crate::config::{ApiConfig, API_ORDER_BY};
use crate::error::GalleryError;
use crate::network::NetworkMonitor;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client with the given total request timeout.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, GalleryError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| GalleryError::Request(e.to_string()))
}

/// [`GallerySource`] backed by the remote gallery API.
#[derive(Debug, Clone)]
pub struct HttpGallerySource {
    client: reqwest::Client,
    base_url: Option<String>,
    api_key: String,
    event_id: String,
    network: NetworkMonitor,
}

impl HttpGallerySource {
    pub fn new(api: &ApiConfig, network: NetworkMonitor) -> Result<Self, GalleryError> {
        let client = build_http_client(api.request_timeout())?;
        Ok(Self::with_client(client, api, network))
    }

    /// Uses an existing client, sharing its connection pool.
    pub fn with_client(client: reqwest::Client, api: &ApiConfig, network: NetworkMonitor) -> Self {
        Self {
            client,
            base_url: api
                .base_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
            api_key: api.api_key.clone().unwrap_or_default(),
            event_id: api.event_id.clone().unwrap_or_default(),
            network,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    async fn fetch(&self, page: u32, page_size: u32) -> Result<GalleryPage, GalleryError> {
        if self.network.is_offline() {
            return Err(GalleryError::NoConnection);
        }
        let Some(base_url) = self.base_url.as_deref() else {
            return Err(GalleryError::Request(
                "gallery API base URL is not configured".to_string(),
            ));
        };

        let page = page.to_string();
        let page_size = page_size.to_string();
        let order_by = API_ORDER_BY.to_string();
        let query = [
            ("event_id", self.event_id.as_str()),
            ("page", page.as_str()),
            ("page_size", page_size.as_str()),
            ("key", self.api_key.as_str()),
            ("order_by", order_by.as_str()),
            ("order_asc", "true"),
        ];

        let response = self
            .client
            .get(base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| GalleryError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GalleryError::from_reqwest(&e))?;
        let json: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| GalleryError::MalformedResponse(e.to_string()))?;

        normalize_page(&json, chrono::Utc::now().timestamp_millis())
    }
}

impl GallerySource for HttpGallerySource {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<GalleryPage, GalleryError> {
        self.fetch(page, page_size).await
    }
}

/// Downloads the raw bytes at `url`.
///
/// Shares the error taxonomy of page fetches.
pub async fn download_bytes(
    client: &reqwest::Client,
    network: &NetworkMonitor,
    url: &str,
) -> Result<Vec<u8>, GalleryError> {
    if network.is_offline() {
        return Err(GalleryError::NoConnection);
    }

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| GalleryError::from_reqwest(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GalleryError::HttpStatus(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| GalleryError::from_reqwest(&e))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkStatus;

    fn api(base_url: Option<&str>) -> ApiConfig {
        ApiConfig {
            base_url: base_url.map(str::to_string),
            api_key: Some("k".into()),
            event_id: Some("e".into()),
            request_timeout_secs: Some(5),
        }
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("IcedGallery/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn offline_short_circuits() {
        let network = NetworkMonitor::new();
        network.set_status(NetworkStatus::Offline);
        // Port 9 on localhost is never contacted: the monitor answers first.
        let source = HttpGallerySource::new(&api(Some("http://127.0.0.1:9/list")), network)
            .expect("client");

        assert_eq!(source.fetch_page(0, 40).await, Err(GalleryError::NoConnection));
    }

    #[tokio::test]
    async fn missing_base_url_is_request_error() {
        let source = HttpGallerySource::new(&api(Some("  ")), NetworkMonitor::new()).expect("client");
        assert!(matches!(
            source.fetch_page(0, 40).await,
            Err(GalleryError::Request(_))
        ));
    }

    #[tokio::test]
    async fn download_offline_short_circuits() {
        let network = NetworkMonitor::new();
        network.set_status(NetworkStatus::Offline);
        let client = build_http_client(Duration::from_secs(5)).expect("client");

        let result = download_bytes(&client, &network, "http://127.0.0.1:9/a.jpg").await;
        assert_eq!(result, Err(GalleryError::NoConnection));
    }
}
