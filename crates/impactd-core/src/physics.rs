//! Closed-form impact physics.
//!
//! Empirical scaling laws for a hypothetical meteor impact. All functions
//! are total over f64, reentrant and stateless; none allocate and none
//! return errors. Quantities derived from an energy release are floored
//! at zero for non-positive input so the logarithm and fractional powers
//! stay out of their invalid domains. Mass and kinetic energy are not
//! guarded: a caller feeding negative diameter or density gets a
//! physically meaningless number back, exactly as it put one in.
//!
//! Two crater scaling laws coexist here on purpose. They came from
//! different entry points of the system, disagree in both units and
//! angle sensitivity, and observable behavior depends on which endpoint
//! is asked. See [`crater_diameter`] and [`crater_diameter_oblique`].

use crate::impact::Target;

/// Energy released by one ton of TNT, in joules.
pub const TNT_TON_JOULES: f64 = 4.184e9;

/// Energy released by one megaton of TNT, in joules.
pub const MEGATON_JOULES: f64 = 4.184e15;

/// Standard Earth surface gravity, m/s².
///
/// Kept as a tuning hook for a gravity-corrected crater law; the simple
/// scaling below does not use it.
pub const EARTH_GRAVITY_M_S2: f64 = 9.80665;

/// Impact angle below which a shallow oblique entry is treated as a
/// tsunami contributor regardless of target.
pub const TSUNAMI_ANGLE_DEG: f64 = 20.0;

/// Mass of a sphere of the given diameter and density, in kilograms.
///
/// Volume of a sphere times density: (4/3)·π·r³·ρ. Negative inputs are
/// not rejected; garbage in, garbage out.
#[must_use]
pub fn sphere_mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    density_kg_m3 * volume
}

/// Kinetic energy in joules for a mass moving at the given speed in km/s.
#[must_use]
pub fn kinetic_energy(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let v = velocity_km_s * 1000.0;
    0.5 * mass_kg * v * v
}

/// TNT equivalent of an energy release, in tons.
#[must_use]
pub fn tnt_equivalent(energy_j: f64) -> f64 {
    energy_j / TNT_TON_JOULES
}

/// Moment-magnitude-like scalar for an energy release.
///
/// (2/3)·(log10 E − 4.8), floored at 0 for non-positive energy to keep
/// the logarithm in its domain. This is an empirical Mw-equivalent, not
/// a seismological moment magnitude.
#[must_use]
pub fn seismic_magnitude(energy_j: f64) -> f64 {
    if energy_j <= 0.0 {
        return 0.0;
    }
    (2.0 / 3.0) * (energy_j.log10() - 4.8)
}

/// Crater diameter in meters from a TNT-equivalent yield in tons.
///
/// Simple strategy: 10·t^(1/3.4), an empirical scaling constant with no
/// gravity or target-density correction applied (see
/// [`EARTH_GRAVITY_M_S2`]) and no angle sensitivity. Returns 0 for
/// non-positive yield.
#[must_use]
pub fn crater_diameter(tnt_tons: f64) -> f64 {
    if tnt_tons <= 0.0 {
        return 0.0;
    }
    10.0 * tnt_tons.powf(1.0 / 3.4)
}

/// Crater diameter in kilometers from a yield in megatons and an impact
/// angle in degrees above horizontal.
///
/// Oblique strategy: 1.161·E^(1/3.4)·sin(θ)^1.3. This is the
/// angle-sensitive law used by the lean `GET /api/simulate` entry point;
/// it deliberately diverges from [`crater_diameter`] and the two are
/// never reconciled. Returns 0 for non-positive yield.
#[must_use]
pub fn crater_diameter_oblique(energy_mt: f64, angle_deg: f64) -> f64 {
    if energy_mt <= 0.0 {
        return 0.0;
    }
    1.161 * energy_mt.powf(1.0 / 3.4) * angle_deg.to_radians().sin().powf(1.3)
}

/// Shock-damage radius in kilometers from a TNT-equivalent yield in
/// tons. 2·t^0.25, floored at 0 for non-positive yield.
#[must_use]
pub fn shock_radius(tnt_tons: f64) -> f64 {
    if tnt_tons <= 0.0 {
        return 0.0;
    }
    2.0 * tnt_tons.powf(0.25)
}

/// Thermal-radiation radius in kilometers from a TNT-equivalent yield in
/// tons. 3·t^0.22, floored at 0 for non-positive yield.
#[must_use]
pub fn thermal_radius(tnt_tons: f64) -> f64 {
    if tnt_tons <= 0.0 {
        return 0.0;
    }
    3.0 * tnt_tons.powf(0.22)
}

/// Whether the impact plausibly raises a tsunami.
///
/// A water target always does; a shallow entry (below
/// [`TSUNAMI_ANGLE_DEG`]) does regardless of target. Plain disjunction,
/// no probabilistic model.
#[must_use]
pub fn tsunami_risk(target: Target, angle_deg: f64) -> bool {
    target == Target::Water || angle_deg < TSUNAMI_ANGLE_DEG
}
