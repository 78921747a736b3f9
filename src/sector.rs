//! Sector ("wedge") polygon construction.
//!
//! A directional antenna's coverage is modeled as a closed fan: the site
//! location, an arc of points swept across the beamwidth at the coverage
//! radius, then back to the site. Renderers treat the result as one
//! filled shape with no gaps.

use crate::constants::{
    DEFAULT_ARC_POINTS, DEFAULT_BEAMWIDTH_DEG, MAX_SECTOR_RADIUS_KM, MIN_SECTOR_RADIUS_KM,
};
use crate::geo::destination_point;
use crate::math_utils::lerp_indexed;

/// Clamp a radius into `(0, 100]` km; anything outside degrades to the
/// minimal default rather than aborting the scene for one bad record.
fn normalize_radius_km(radius_km: f64) -> f64 {
    if radius_km.is_nan() || radius_km <= 0.0 || radius_km > MAX_SECTOR_RADIUS_KM {
        MIN_SECTOR_RADIUS_KM
    } else {
        radius_km
    }
}

/// Clamp a beamwidth into `(0, 360]` degrees, defaulting to 65°.
fn normalize_beamwidth_deg(beamwidth_deg: f64) -> f64 {
    if beamwidth_deg.is_nan() || beamwidth_deg <= 0.0 || beamwidth_deg > 360.0 {
        DEFAULT_BEAMWIDTH_DEG
    } else {
        beamwidth_deg
    }
}

/// Build a closed sector polygon around `(lat, lon)`.
///
/// `arc_points` vertices are spread evenly across
/// `[azimuth - beamwidth/2, azimuth + beamwidth/2]`; the returned
/// sequence is `[center] + arc + [center]`, length `arc_points + 2`.
/// A 360° beamwidth approximates a full circle.
pub fn build_sector(
    lat: f64,
    lon: f64,
    azimuth_deg: f64,
    beamwidth_deg: f64,
    radius_km: f64,
    arc_points: usize,
) -> Vec<(f64, f64)> {
    let radius_km = normalize_radius_km(radius_km);
    let beamwidth_deg = normalize_beamwidth_deg(beamwidth_deg);
    let arc_points = arc_points.max(1);

    let start_angle = azimuth_deg - beamwidth_deg / 2.0;
    let end_angle = start_angle + beamwidth_deg;

    let mut points = Vec::with_capacity(arc_points + 2);
    points.push((lat, lon));

    for i in 0..arc_points {
        let bearing = lerp_indexed(start_angle, end_angle, i, arc_points - 1);
        points.push(destination_point(lat, lon, bearing, radius_km));
    }

    points.push((lat, lon));
    points
}

/// `build_sector` with the standard 50-point arc.
pub fn build_sector_default(
    lat: f64,
    lon: f64,
    azimuth_deg: f64,
    beamwidth_deg: f64,
    radius_km: f64,
) -> Vec<(f64, f64)> {
    build_sector(lat, lon, azimuth_deg, beamwidth_deg, radius_km, DEFAULT_ARC_POINTS)
}
