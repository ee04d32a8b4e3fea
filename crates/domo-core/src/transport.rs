//! Reading delivery to the collector.

use crate::protocol::{Ack, ReadingPayload};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Default timeout for a single reading delivery.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Capability to deliver one reading to the collector.
///
/// Implementations must be safe for concurrent independent calls; a
/// single handle is shared by every sensor in the fleet.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Delivers one payload and returns the collector's acknowledgement.
    async fn send(&self, payload: ReadingPayload) -> Result<Ack>;
}

/// HTTP transport that POSTs readings to the collector as JSON.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport for the given collector base URL
    /// (e.g. `http://127.0.0.1:8787`) with the default send timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_SEND_TIMEOUT)
    }

    /// Creates a transport with an explicit per-send timeout.
    ///
    /// A timeout is mandatory: a collector that never answers must not
    /// be able to block fleet shutdown.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/readings", base_url.trim_end_matches('/')),
        })
    }

    /// Collector endpoint readings are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, payload: ReadingPayload) -> Result<Ack> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let ack: Ack = response.json().await?;
        if ack.success {
            Ok(ack)
        } else {
            Err(Error::Rejected(ack.message))
        }
    }
}
