//! Impact simulation records.
//!
//! [`ImpactParameters`] is the inbound shape of a simulation request,
//! [`ImpactResult`] the derived read-only record. Both are plain values
//! constructed fresh per request and discarded with the response; neither
//! carries identity beyond its fields.

use serde::{Deserialize, Serialize};

use crate::physics;

/// What the meteor hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Continental impact.
    #[default]
    Land,
    /// Ocean impact; always a tsunami contributor.
    Water,
}

/// Physical inputs for a simulated impact.
///
/// Every field is optional on the wire; an empty body simulates the
/// reference scenario of a 50 m stony impactor at 17 km/s and 45°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactParameters {
    /// Impactor diameter, meters.
    pub diameter_m: f64,
    /// Impactor bulk density, kg/m³.
    pub density_kg_m3: f64,
    /// Entry velocity, km/s.
    pub velocity_km_s: f64,
    /// Entry angle above horizontal, degrees.
    pub angle_deg: f64,
    /// Impact latitude, degrees.
    pub lat: f64,
    /// Impact longitude, degrees.
    pub lon: f64,
    /// Impact target.
    pub target: Target,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            diameter_m: 50.0,
            density_kg_m3: 3000.0,
            velocity_km_s: 17.0,
            angle_deg: 45.0,
            lat: 0.0,
            lon: 0.0,
            target: Target::Land,
        }
    }
}

/// Quantities derived from a set of impact parameters.
///
/// A pure function of [`ImpactParameters`]: same inputs, same record.
/// Crater size here uses the simple angle-blind scaling law; the oblique
/// law is served by the separate lean simulation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactResult {
    /// Impactor mass, kg.
    pub mass_kg: f64,
    /// Kinetic energy at entry, joules.
    pub energy_joules: f64,
    /// TNT equivalent, tons.
    pub tnt_tons: f64,
    /// Mw-equivalent seismic magnitude.
    pub seismic_mw: f64,
    /// Crater diameter, meters (simple scaling).
    pub crater_diameter_m: f64,
    /// Shock-damage radius, km.
    pub shock_radius_km: f64,
    /// Thermal-radiation radius, km.
    pub thermal_radius_km: f64,
    /// Whether the impact plausibly raises a tsunami.
    pub tsunami_risk: bool,
}

impl ImpactResult {
    /// Derive the full result record from a set of parameters.
    #[must_use]
    pub fn from_parameters(params: &ImpactParameters) -> Self {
        let mass_kg = physics::sphere_mass(params.diameter_m, params.density_kg_m3);
        let energy_joules = physics::kinetic_energy(mass_kg, params.velocity_km_s);
        let tnt_tons = physics::tnt_equivalent(energy_joules);

        Self {
            mass_kg,
            energy_joules,
            tnt_tons,
            seismic_mw: physics::seismic_magnitude(energy_joules),
            crater_diameter_m: physics::crater_diameter(tnt_tons),
            shock_radius_km: physics::shock_radius(tnt_tons),
            thermal_radius_km: physics::thermal_radius(tnt_tons),
            tsunami_risk: physics::tsunami_risk(params.target, params.angle_deg),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parameters_default_to_reference_scenario() {
        let params = ImpactParameters::default();
        assert_relative_eq!(params.diameter_m, 50.0);
        assert_relative_eq!(params.density_kg_m3, 3000.0);
        assert_relative_eq!(params.velocity_km_s, 17.0);
        assert_relative_eq!(params.angle_deg, 45.0);
        assert_eq!(params.target, Target::Land);
    }

    #[test]
    fn empty_body_deserializes_to_defaults() {
        let params: ImpactParameters = serde_json::from_str("{}").expect("empty object");
        assert_eq!(params, ImpactParameters::default());
    }

    #[test]
    fn target_uses_lowercase_wire_names() {
        let params: ImpactParameters =
            serde_json::from_str(r#"{"target": "water"}"#).expect("water target");
        assert_eq!(params.target, Target::Water);
        assert!(serde_json::from_str::<ImpactParameters>(r#"{"target": "Ocean"}"#).is_err());
    }

    #[test]
    fn reference_scenario_derivation() {
        let result = ImpactResult::from_parameters(&ImpactParameters::default());

        assert_relative_eq!(result.mass_kg, 1.963_495_408_5e8, max_relative = 1e-9);
        assert_relative_eq!(result.energy_joules, 2.837_250_865_3e16, max_relative = 1e-9);
        assert_relative_eq!(result.tnt_tons, 6.781_192_3e6, max_relative = 1e-7);
        assert_relative_eq!(result.seismic_mw, 7.768_6, max_relative = 1e-5);
        assert!(!result.tsunami_risk);

        // Derived radii follow the scaling laws exactly.
        assert_relative_eq!(
            result.crater_diameter_m,
            10.0 * result.tnt_tons.powf(1.0 / 3.4),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.shock_radius_km,
            2.0 * result.tnt_tons.powf(0.25),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.thermal_radius_km,
            3.0 * result.tnt_tons.powf(0.22),
            max_relative = 1e-12
        );
    }

    #[test]
    fn water_target_flags_tsunami() {
        let params = ImpactParameters {
            target: Target::Water,
            ..ImpactParameters::default()
        };
        assert!(ImpactResult::from_parameters(&params).tsunami_risk);
    }

    #[test]
    fn shallow_land_entry_flags_tsunami() {
        let params = ImpactParameters {
            angle_deg: 10.0,
            ..ImpactParameters::default()
        };
        assert!(ImpactResult::from_parameters(&params).tsunami_risk);
    }
}
