//! GeoJSON summary of an impact.
//!
//! A presentation-layer view over [`ImpactResult`]: three point features
//! sharing the impact coordinate, with the shock and thermal zones tagged
//! with their radii. This is a small typed subset of GeoJSON, enough for
//! a map client to draw the impact; it is not a general GeoJSON model.

use serde::Serialize;

use crate::impact::ImpactResult;

/// Feature collection summarizing an impact for map display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoSummary {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Impact point, shock zone, thermal zone. Always exactly three.
    pub features: Vec<Feature>,
}

/// A single point feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Zone tag and optional radius.
    pub properties: FeatureProperties,
    /// Point geometry at the impact coordinate.
    pub geometry: PointGeometry,
}

/// Properties attached to a summary feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureProperties {
    /// Zone tag: `impact_point`, `shock_zone_km` or `thermal_zone_km`.
    #[serde(rename = "type")]
    pub zone: &'static str,
    /// Zone radius in km; absent on the impact point itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
}

/// GeoJSON point geometry, coordinates in [lon, lat] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    /// [longitude, latitude].
    pub coordinates: [f64; 2],
}

impl GeoSummary {
    /// Build the three-feature summary for an impact at the given
    /// coordinate.
    #[must_use]
    pub fn for_impact(lon: f64, lat: f64, result: &ImpactResult) -> Self {
        let point = |zone, radius_km| Feature {
            kind: "Feature",
            properties: FeatureProperties { zone, radius_km },
            geometry: PointGeometry {
                kind: "Point",
                coordinates: [lon, lat],
            },
        };

        Self {
            kind: "FeatureCollection",
            features: vec![
                point("impact_point", None),
                point("shock_zone_km", Some(result.shock_radius_km)),
                point("thermal_zone_km", Some(result.thermal_radius_km)),
            ],
        }
    }
}
