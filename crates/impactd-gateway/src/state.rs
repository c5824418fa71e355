//! Shared gateway state.
//!
//! Nothing here is mutable: the configuration is fixed at startup and
//! the fetcher is stateless, so the state is plain `Arc`s with no locks.

use std::sync::Arc;

use impactd_core::config::GatewayConfig;

use crate::upstream::UpstreamFetch;

/// State injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration (API key, bind address, timeout).
    pub config: Arc<GatewayConfig>,
    /// Outbound fetch capability; a fake in tests.
    pub upstream: Arc<dyn UpstreamFetch>,
}

impl AppState {
    /// Bundle a configuration and fetcher into handler state.
    #[must_use]
    pub fn new(config: GatewayConfig, upstream: Arc<dyn UpstreamFetch>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}
