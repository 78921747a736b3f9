//! Scene assembly: the sole export surface toward the map renderer.
//!
//! `assemble` sequences the coverage and adjacency outputs into a fixed
//! layer order. Later layers draw on top, so the dense opaque beam
//! shapes sit over the translucent statistical footprints, and the
//! connector lines stay legible over both.

use crate::adjacency;
use crate::color::ColorAssigner;
use crate::constants::DEFAULT_MAP_CENTER;
use crate::coverage;
use crate::primitive::DrawablePrimitive;
use crate::record::{AdjacencyDeclaration, CellRecord};
use serde::{Deserialize, Serialize};

pub const STATISTICAL_LAYER_NAME: &str = "statistical coverage";
pub const BEAM_LAYER_NAME: &str = "beam coverage";
pub const ADJACENCY_LAYER_NAME: &str = "adjacency connections";

/// One named draw layer, rendered in list order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: String,
    pub primitives: Vec<DrawablePrimitive>,
}

impl Layer {
    fn new(name: &str, primitives: Vec<DrawablePrimitive>) -> Self {
        Layer {
            name: name.to_string(),
            primitives,
        }
    }
}

/// Assemble the full scene from one snapshot.
///
/// Layer order is a rendering contract: statistical beneath beam
/// beneath adjacency. A fresh `ColorAssigner` is built per call; color
/// state never outlives an invocation.
pub fn assemble(cells: &[CellRecord], declarations: &[AdjacencyDeclaration]) -> Vec<Layer> {
    let colors = ColorAssigner::for_cells(cells);
    let coverage_layers = coverage::compose(cells, &colors);

    let positions = adjacency::representative_positions(cells);
    let connectors = adjacency::build(declarations, &positions);

    vec![
        Layer::new(STATISTICAL_LAYER_NAME, coverage_layers.statistical),
        Layer::new(BEAM_LAYER_NAME, coverage_layers.beam),
        Layer::new(ADJACENCY_LAYER_NAME, connectors),
    ]
}

/// Mean position of the cells with usable coordinates, for centering
/// the external map view. Falls back to a fixed default when the
/// snapshot has no usable position.
pub fn map_center(cells: &[CellRecord]) -> (f64, f64) {
    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;
    let mut count = 0usize;

    for cell in cells {
        if let Some((lat, lon)) = cell.position() {
            lat_sum += lat;
            lon_sum += lon;
            count += 1;
        }
    }

    if count == 0 {
        DEFAULT_MAP_CENTER
    } else {
        (lat_sum / count as f64, lon_sum / count as f64)
    }
}

/// Serialize assembled layers for the rendering collaborator.
pub fn to_json(layers: &[Layer]) -> serde_json::Result<String> {
    serde_json::to_string(layers)
}
