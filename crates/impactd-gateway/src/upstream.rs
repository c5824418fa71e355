//! Outbound upstream fetch capability.
//!
//! Handlers never talk to the network directly; they go through the
//! [`UpstreamFetch`] trait so tests can swap in a fake and assert on
//! what would have been sent. The real implementation is a thin wrapper
//! over a shared `reqwest` client carrying the configured timeout.

use std::time::Duration;

use async_trait::async_trait;
use impactd_core::services::UpstreamService;

use crate::error::GatewayError;

/// A relayed upstream response: status and verbatim body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// Upstream HTTP status code.
    pub status: u16,
    /// Upstream body, relayed without inspection.
    pub body: String,
}

/// One-method fetch capability: GET a URL with a query string.
///
/// The `service` tag identifies the integration for error labeling; the
/// URL and parameters are built by the caller. One inbound request makes
/// at most one call through this trait.
#[async_trait]
pub trait UpstreamFetch: Send + Sync {
    /// Issue a GET and return the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UpstreamTimeout`] when the configured
    /// bound elapses and [`GatewayError::UpstreamRequest`] for any other
    /// transport failure. A non-2xx response is not an error at this
    /// layer; relaying decisions belong to the caller.
    async fn get(
        &self,
        service: UpstreamService,
        url: &str,
        params: &[(String, String)],
    ) -> Result<UpstreamResponse, GatewayError>;
}

/// Production fetcher backed by a shared `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher whose every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the underlying client construction error (TLS backend
    /// initialization, in practice).
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl UpstreamFetch for HttpFetcher {
    async fn get(
        &self,
        service: UpstreamService,
        url: &str,
        params: &[(String, String)],
    ) -> Result<UpstreamResponse, GatewayError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    GatewayError::UpstreamTimeout {
                        service: service.name(),
                    }
                } else {
                    GatewayError::UpstreamRequest {
                        service: service.name(),
                        message: err.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| GatewayError::UpstreamRequest {
                service: service.name(),
                message: err.to_string(),
            })?;

        Ok(UpstreamResponse { status, body })
    }
}
