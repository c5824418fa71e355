//! Simulation and health handlers.
//!
//! The two simulation endpoints deliberately use different crater
//! scaling laws: the full `POST /api/simulate-impact` report derives its
//! crater from the simple angle-blind law inside
//! [`ImpactResult::from_parameters`], while the lean `GET /api/simulate`
//! uses the oblique angle-corrected law. The divergence is inherited
//! behavior and is kept observable.

use axum::Json;
use axum::extract::Query;
use impactd_core::geo::GeoSummary;
use impactd_core::impact::{ImpactParameters, ImpactResult};
use impactd_core::physics;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Liveness response, always `{"ok": true}`.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Full simulation report: echoed inputs, derived physics, map summary.
#[derive(Debug, Clone, Serialize)]
pub struct SimulateImpactResponse {
    /// The parameters actually used, defaults filled in.
    pub inputs: ImpactParameters,
    /// Derived physical quantities.
    pub derived: ImpactResult,
    /// GeoJSON view for map display.
    pub geo: GeoSummary,
}

/// `POST /api/simulate-impact` — full impact report.
///
/// Every body field is optional; an empty object simulates the reference
/// scenario. Inputs are taken as given (garbage in, garbage out), since
/// the physics layer floors the energy-derived quantities at zero.
pub async fn simulate_impact(
    Json(params): Json<ImpactParameters>,
) -> Json<SimulateImpactResponse> {
    let derived = ImpactResult::from_parameters(&params);
    let geo = GeoSummary::for_impact(params.lon, params.lat, &derived);

    Json(SimulateImpactResponse {
        inputs: params,
        derived,
        geo,
    })
}

/// Query parameters for the lean simulation endpoint.
///
/// All fields are required; they are optional here only so their absence
/// surfaces as a gateway error instead of an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateQuery {
    diameter_m: Option<f64>,
    density: Option<f64>,
    v_kms: Option<f64>,
    angle_deg: Option<f64>,
}

/// Lean simulation result: yield in megatons and oblique crater in km.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimulateResponse {
    /// TNT-equivalent yield, megatons.
    pub energy_mt: f64,
    /// Crater diameter from the angle-corrected law, km.
    pub crater_km: f64,
}

/// `GET /api/simulate` — validated lean simulation.
///
/// All four parameters are required and must be positive; the angle must
/// lie strictly between 0 and 90 degrees.
pub async fn simulate(
    Query(query): Query<SimulateQuery>,
) -> Result<Json<SimulateResponse>, GatewayError> {
    let diameter_m = require_positive("diameter_m", query.diameter_m)?;
    let density = require_positive("density", query.density)?;
    let v_kms = require_positive("v_kms", query.v_kms)?;
    let angle_deg = require_positive("angle_deg", query.angle_deg)?;
    if angle_deg >= 90.0 {
        return Err(GatewayError::InvalidParameter {
            name: "angle_deg",
            reason: "must be strictly between 0 and 90".to_string(),
        });
    }

    let mass = physics::sphere_mass(diameter_m, density);
    let energy_mt = physics::kinetic_energy(mass, v_kms) / physics::MEGATON_JOULES;
    let crater_km = physics::crater_diameter_oblique(energy_mt, angle_deg);

    Ok(Json(SimulateResponse { energy_mt, crater_km }))
}

fn require_positive(name: &'static str, value: Option<f64>) -> Result<f64, GatewayError> {
    let value = value.ok_or(GatewayError::MissingParameter { name })?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GatewayError::InvalidParameter {
            name,
            reason: format!("must be positive, got {value}"),
        })
    }
}
