// SPDX-License-Identifier: MPL-2.0
//! Network reachability.
//!
//! The status comes from a periodic TCP connect to the gallery API host. It
//! is shared through an atomic so the HTTP client can fail fast with
//! `NoConnection` while offline, without a round-trip through the UI.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkStatus {
    /// No probe has completed yet. Treated as online.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl NetworkStatus {
    fn to_u8(self) -> u8 {
        match self {
            NetworkStatus::Unknown => 0,
            NetworkStatus::Online => 1,
            NetworkStatus::Offline => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => NetworkStatus::Online,
            2 => NetworkStatus::Offline,
            _ => NetworkStatus::Unknown,
        }
    }
}

/// Shared, cheaply clonable reachability flag.
#[derive(Debug, Clone, Default)]
pub struct NetworkMonitor {
    status: Arc<AtomicU8>,
}

impl NetworkMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> NetworkStatus {
        NetworkStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    pub fn is_offline(&self) -> bool {
        self.status() == NetworkStatus::Offline
    }

    /// Stores `status` and returns the previous one.
    pub fn set_status(&self, status: NetworkStatus) -> NetworkStatus {
        let previous = self.status.swap(status.to_u8(), Ordering::AcqRel);
        let previous = NetworkStatus::from_u8(previous);
        if previous != status {
            log::info!("Network status changed: {previous:?} -> {status:?}");
        }
        previous
    }
}

/// Host and port to probe for a gallery base URL.
///
/// The port defaults to the scheme's well-known port.
pub fn probe_target(base_url: &str) -> Option<(String, u16)> {
    let url = reqwest::Url::parse(base_url).ok()?;
    let host = url.host_str()?.to_string();
    let port = url.port_or_known_default()?;
    Some((host, port))
}

/// Tries a TCP connection to `host:port` within `timeout`.
pub async fn probe(host: String, port: u16, timeout: Duration) -> NetworkStatus {
    match tokio::time::timeout(timeout, TcpStream::connect((host.as_str(), port))).await {
        Ok(Ok(_stream)) => NetworkStatus::Online,
        Ok(Err(err)) => {
            log::debug!("Reachability probe to {host}:{port} failed: {err}");
            NetworkStatus::Offline
        }
        Err(_) => {
            log::debug!("Reachability probe to {host}:{port} timed out");
            NetworkStatus::Offline
        }
    }
}
