//! Drawable value objects handed to the external map renderer.
//!
//! The renderer owns tiles, popups and interaction; this crate only
//! emits these primitives, serialized via serde at the boundary.

use serde::{Deserialize, Serialize};

/// Stroke style for polylines. Connectors render dashed so they read as
/// relationships rather than coverage boundaries.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawablePrimitive {
    /// Closed filled shape; vertices are (lat, lon) degree pairs.
    Polygon {
        vertices: Vec<(f64, f64)>,
        fill_color: String,
        fill_opacity: f64,
        stroke_opacity: f64,
        tooltip: String,
    },
    PointMarker {
        lat: f64,
        lon: f64,
        color: String,
        tooltip: String,
    },
    TextLabel {
        lat: f64,
        lon: f64,
        text: String,
        color: String,
    },
    Polyline {
        vertices: Vec<(f64, f64)>,
        color: String,
        style: LineStyle,
        tooltip: String,
    },
}
