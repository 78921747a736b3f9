//! Inter-site adjacency connectors.
//!
//! Declared neighbor relationships become bent three-point polylines
//! between tower positions, annotated with the computed great-circle
//! distance. Duplicate declarations for one ordered tower pair collapse
//! to the first occurrence; edges with an unresolvable endpoint are
//! dropped, never fatal.

use crate::constants::{CONNECTOR_BEND_OFFSET_DEG, CONNECTOR_COLOR};
use crate::geo::haversine_distance_km;
use crate::primitive::{DrawablePrimitive, LineStyle};
use crate::record::{AdjacencyDeclaration, CellRecord};
use std::collections::{HashMap, HashSet};

/// Representative position per tower: the first cell in snapshot order
/// with usable coordinates.
pub fn representative_positions(cells: &[CellRecord]) -> HashMap<String, (f64, f64)> {
    let mut positions = HashMap::new();
    for cell in cells {
        if positions.contains_key(&cell.tower_id) {
            continue;
        }
        if let Some(position) = cell.position() {
            positions.insert(cell.tower_id.clone(), position);
        }
    }
    positions
}

/// Build connector primitives from declarations and resolved tower
/// positions. Each surviving edge yields one dashed polyline and one
/// distance label at the bent control point.
pub fn build(
    declarations: &[AdjacencyDeclaration],
    positions: &HashMap<String, (f64, f64)>,
) -> Vec<DrawablePrimitive> {
    let mut primitives = Vec::new();
    let mut drawn: HashSet<(String, String)> = HashSet::new();

    for declaration in declarations {
        let key = (
            declaration.source_tower_id.clone(),
            declaration.target_tower_id.clone(),
        );
        if drawn.contains(&key) {
            continue;
        }

        let Some(&(lat1, lon1)) = positions.get(&declaration.source_tower_id) else {
            continue;
        };
        let Some(&(lat2, lon2)) = positions.get(&declaration.target_tower_id) else {
            continue;
        };

        // dedup applies to rendered edges only; an unresolvable duplicate
        // earlier in the snapshot must not shadow a later resolvable one
        drawn.insert(key);

        let control_lat = (lat1 + lat2) / 2.0 + CONNECTOR_BEND_OFFSET_DEG;
        let control_lon = (lon1 + lon2) / 2.0 + CONNECTOR_BEND_OFFSET_DEG;
        let distance_km = haversine_distance_km(lat1, lon1, lat2, lon2);

        let tooltip = match declaration.declared_distance_km {
            Some(declared) => format!(
                "{} -> {} | computed {:.2} km, declared {:.2} km",
                declaration.source_tower_id, declaration.target_tower_id, distance_km, declared
            ),
            None => format!(
                "{} -> {} | computed {:.2} km",
                declaration.source_tower_id, declaration.target_tower_id, distance_km
            ),
        };

        primitives.push(DrawablePrimitive::Polyline {
            vertices: vec![(lat1, lon1), (control_lat, control_lon), (lat2, lon2)],
            color: CONNECTOR_COLOR.to_string(),
            style: LineStyle::Dashed,
            tooltip,
        });

        primitives.push(DrawablePrimitive::TextLabel {
            lat: control_lat,
            lon: control_lon,
            text: format!("{:.1} km", distance_km),
            color: CONNECTOR_COLOR.to_string(),
        });
    }

    primitives
}
