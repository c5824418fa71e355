//! impactd-gateway - Impact simulation HTTP gateway
//!
//! A small stateless backend with two jobs: compute closed-form impact
//! physics for a hypothetical meteor strike, and proxy a handful of
//! public NASA/USGS data APIs, relaying their JSON responses and
//! translating their failures into one uniform error shape.
//!
//! Every endpoint is an independent request/response transform. There is
//! no shared mutable state, no caching, no retries: one inbound request
//! makes at most one outbound upstream call, bounded by the configured
//! timeout.
//!
//! # Modules
//!
//! - [`handlers`]: Health and the two simulation endpoints
//! - [`proxy`]: One relay handler per upstream integration
//! - [`upstream`]: Injectable outbound fetch capability
//! - [`error`]: The gateway error enum and its HTTP rendering
//! - [`state`]: Immutable per-process handler state

pub mod error;
pub mod handlers;
pub mod proxy;
pub mod state;
pub mod upstream;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the full gateway router over the given state.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/simulate-impact", post(handlers::simulate_impact))
        .route("/api/simulate", get(handlers::simulate))
        .route("/api/neows/browse", get(proxy::neows_browse))
        .route("/api/neows/neo", get(proxy::neows_neo))
        .route("/api/earthquakes", get(proxy::earthquakes))
        .route("/api/elevation", get(proxy::elevation))
        .route("/api/sbdb", get(proxy::sbdb))
        .route("/api/donki", get(proxy::donki))
        .route("/api/nasa-image", get(proxy::nasa_image))
        .route("/api/astronomy", get(proxy::astronomy))
        .with_state(state)
}
