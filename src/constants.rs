pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Sector normalization bounds
pub const MIN_SECTOR_RADIUS_KM: f64 = 0.1; // substituted when a radius is non-positive or absurd
pub const MAX_SECTOR_RADIUS_KM: f64 = 100.0;
pub const DEFAULT_BEAMWIDTH_DEG: f64 = 65.0;
pub const DEFAULT_ARC_POINTS: usize = 50;

// Beam layer styling
pub const BEAM_FILL_OPACITY: f64 = 1.0;
pub const BEAM_STROKE_OPACITY: f64 = 0.8;

// Statistical (TA90) layer styling
pub const STATISTICAL_FILL_OPACITY: f64 = 0.2;
pub const STATISTICAL_STROKE_OPACITY: f64 = 0.6;

// Cell-name labels sit outward along the azimuth so they clear the marker
pub const LABEL_OFFSET_KM: f64 = 1.5;

// Connector control points bend ~40 m off the midpoint so coincident
// edges stay distinguishable
pub const CONNECTOR_BEND_OFFSET_DEG: f64 = 0.00036;
pub const CONNECTOR_COLOR: &str = "#FF0000";

// Fallback map center when a snapshot has no valid coordinates
pub const DEFAULT_MAP_CENTER: (f64, f64) = (5.2, 95.9);
