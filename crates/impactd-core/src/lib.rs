//! impactd-core - Impact physics and upstream catalog
//!
//! Domain library for the impact simulation gateway. Everything here is
//! pure computation or static description: the physics functions are
//! deterministic scalar transforms with no I/O, and the upstream catalog
//! is a table of third-party endpoints the gateway relays to.
//!
//! # Modules
//!
//! - [`physics`]: Closed-form impact estimates (mass, kinetic energy,
//!   TNT equivalent, seismic magnitude, crater/shock/thermal scaling,
//!   tsunami risk)
//! - [`impact`]: Request/response records for a simulated impact
//! - [`geo`]: GeoJSON feature-collection view over an impact result
//! - [`services`]: Catalog of proxied NASA/USGS upstream services
//! - [`config`]: Process-environment gateway configuration

pub mod config;
pub mod geo;
pub mod impact;
pub mod physics;
pub mod services;

pub use config::{ConfigError, GatewayConfig};
pub use geo::GeoSummary;
pub use impact::{ImpactParameters, ImpactResult, Target};
pub use services::UpstreamService;
