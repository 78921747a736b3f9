//! Input record types supplied by the external data collaborator.
//!
//! Coordinate validity is decided once here; downstream builders skip
//! records whose `position()` is `None` rather than re-checking fields.

use serde::{Deserialize, Serialize};

/// One radio cell as reported in a snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CellRecord {
    pub cell_name: String,
    pub tower_id: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub band: String,
    /// Direction the antenna points, degrees clockwise from north.
    pub azimuth_deg: f64,
    /// Antenna angular spread in degrees.
    pub beamwidth_deg: f64,
    /// Nominal coverage radius derived from antenna hardware size.
    pub physical_radius_km: f64,
    /// Measured 90th-percentile timing-advance radius, when available.
    pub statistical_radius_km: Option<f64>,
}

impl CellRecord {
    /// The cell's position when its coordinates are usable.
    ///
    /// A coordinate is usable when present, non-zero and within
    /// `[-90, 90]` latitude / `[-180, 180]` longitude. Zero is treated
    /// as absent because the source exports unknown sites as (0, 0).
    pub fn position(&self) -> Option<(f64, f64)> {
        let lat = self.lat?;
        let lon = self.lon?;
        if lat == 0.0 || lon == 0.0 {
            return None;
        }
        if lat.abs() > 90.0 || lon.abs() > 180.0 || lat.is_nan() || lon.is_nan() {
            return None;
        }
        Some((lat, lon))
    }
}

/// A declared neighbor relationship between two towers.
///
/// Multiple cells on one tower commonly declare the same neighbor; the
/// adjacency builder collapses duplicates by the ordered
/// `(source, target)` pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdjacencyDeclaration {
    pub source_tower_id: String,
    pub target_tower_id: String,
    /// Inter-site distance as recorded upstream; carried for comparison
    /// only, never trusted over the computed great-circle distance.
    pub declared_distance_km: Option<f64>,
}
