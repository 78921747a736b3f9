//! Coverage layer composition.
//!
//! Two independent passes over the snapshot: the beam layer draws each
//! antenna's nominal wedge at full opacity with a site marker and an
//! offset name label; the statistical layer draws the measured TA90
//! footprint at low opacity so it reads underneath the beam shapes.
//! Cells with unusable coordinates are skipped, never fatal.

use crate::color::ColorAssigner;
use crate::constants::{
    BEAM_FILL_OPACITY, BEAM_STROKE_OPACITY, LABEL_OFFSET_KM, STATISTICAL_FILL_OPACITY,
    STATISTICAL_STROKE_OPACITY,
};
use crate::geo::destination_point;
use crate::primitive::DrawablePrimitive;
use crate::record::CellRecord;
use crate::sector::build_sector_default;

/// The two coverage layers, beam over statistical.
#[derive(Clone, Debug, Default)]
pub struct CoverageLayers {
    pub beam: Vec<DrawablePrimitive>,
    pub statistical: Vec<DrawablePrimitive>,
}

/// Compose both coverage layers from a snapshot.
pub fn compose(cells: &[CellRecord], colors: &ColorAssigner) -> CoverageLayers {
    CoverageLayers {
        beam: beam_layer(cells, colors),
        statistical: statistical_layer(cells, colors),
    }
}

/// Beam coverage: one wedge, marker and label per cell with usable
/// coordinates and a positive physical radius.
pub fn beam_layer(cells: &[CellRecord], colors: &ColorAssigner) -> Vec<DrawablePrimitive> {
    let mut primitives = Vec::new();

    for cell in cells {
        let Some((lat, lon)) = cell.position() else {
            continue;
        };
        if cell.physical_radius_km <= 0.0 {
            continue;
        }

        let color = colors.get_color(&cell.cell_name).to_string();
        let vertices = build_sector_default(
            lat,
            lon,
            cell.azimuth_deg,
            cell.beamwidth_deg,
            cell.physical_radius_km,
        );

        primitives.push(DrawablePrimitive::Polygon {
            vertices,
            fill_color: color.clone(),
            fill_opacity: BEAM_FILL_OPACITY,
            stroke_opacity: BEAM_STROKE_OPACITY,
            tooltip: format!(
                "{} band={} {:.3} km",
                cell.cell_name, cell.band, cell.physical_radius_km
            ),
        });

        primitives.push(DrawablePrimitive::PointMarker {
            lat,
            lon,
            color: color.clone(),
            tooltip: format!("{} - {}", cell.tower_id, cell.cell_name),
        });

        let (label_lat, label_lon) = destination_point(lat, lon, cell.azimuth_deg, LABEL_OFFSET_KM);
        primitives.push(DrawablePrimitive::TextLabel {
            lat: label_lat,
            lon: label_lon,
            text: cell.cell_name.clone(),
            color,
        });
    }

    primitives
}

/// Statistical coverage: one low-opacity wedge per cell with a measured
/// TA90 radius.
pub fn statistical_layer(cells: &[CellRecord], colors: &ColorAssigner) -> Vec<DrawablePrimitive> {
    let mut primitives = Vec::new();

    for cell in cells {
        let Some((lat, lon)) = cell.position() else {
            continue;
        };
        let Some(ta90_km) = cell.statistical_radius_km else {
            continue;
        };
        if ta90_km <= 0.0 {
            continue;
        }

        let color = colors.get_color(&cell.cell_name).to_string();
        let vertices =
            build_sector_default(lat, lon, cell.azimuth_deg, cell.beamwidth_deg, ta90_km);

        primitives.push(DrawablePrimitive::Polygon {
            vertices,
            fill_color: color,
            fill_opacity: STATISTICAL_FILL_OPACITY,
            stroke_opacity: STATISTICAL_STROKE_OPACITY,
            tooltip: format!("TA90: {:.3} km ({})", ta90_km, cell.cell_name),
        });
    }

    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CellRecord;

    fn cell(name: &str, lat: Option<f64>, lon: Option<f64>, ta90: Option<f64>) -> CellRecord {
        CellRecord {
            cell_name: name.to_string(),
            tower_id: "T1".to_string(),
            lat,
            lon,
            band: "L1800".to_string(),
            azimuth_deg: 120.0,
            beamwidth_deg: 65.0,
            physical_radius_km: 0.3,
            statistical_radius_km: ta90,
        }
    }

    fn count_polygons(primitives: &[DrawablePrimitive]) -> usize {
        primitives
            .iter()
            .filter(|p| matches!(p, DrawablePrimitive::Polygon { .. }))
            .count()
    }

    #[test]
    fn test_beam_layer_emits_polygon_marker_label_per_cell() {
        let cells = vec![
            cell("ACEH001_A", Some(5.2), Some(95.9), None),
            cell("ACEH001_B", Some(5.21), Some(95.91), None),
        ];
        let colors = ColorAssigner::for_cells(&cells);
        let beam = beam_layer(&cells, &colors);
        assert_eq!(beam.len(), 6);
        assert_eq!(count_polygons(&beam), 2);
    }

    #[test]
    fn test_invalid_coordinates_skip_cell_not_scene() {
        let cells = vec![
            cell("BAD_A", None, Some(95.9), Some(1.0)),
            cell("OK_B", Some(5.2), Some(95.9), Some(1.0)),
        ];
        let colors = ColorAssigner::for_cells(&cells);
        let layers = compose(&cells, &colors);
        // the invalid cell contributes to neither layer
        assert_eq!(count_polygons(&layers.beam), 1);
        assert_eq!(count_polygons(&layers.statistical), 1);
    }

    #[test]
    fn test_non_positive_physical_radius_skips_beam_entry() {
        let mut bad = cell("ZERO_A", Some(5.2), Some(95.9), None);
        bad.physical_radius_km = 0.0;
        let cells = vec![bad, cell("OK_B", Some(5.3), Some(95.8), None)];
        let colors = ColorAssigner::for_cells(&cells);
        let beam = beam_layer(&cells, &colors);
        assert_eq!(count_polygons(&beam), 1);
    }

    #[test]
    fn test_statistical_layer_requires_measurement() {
        let cells = vec![
            cell("NOTA_A", Some(5.2), Some(95.9), None),
            cell("ZEROTA_B", Some(5.3), Some(95.8), Some(0.0)),
            cell("OK_C", Some(5.4), Some(95.7), Some(2.5)),
        ];
        let colors = ColorAssigner::for_cells(&cells);
        let statistical = statistical_layer(&cells, &colors);
        assert_eq!(statistical.len(), 1);
        match &statistical[0] {
            DrawablePrimitive::Polygon { fill_opacity, tooltip, .. } => {
                assert_eq!(*fill_opacity, STATISTICAL_FILL_OPACITY);
                assert!(tooltip.contains("TA90: 2.500 km"));
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_label_offset_along_azimuth() {
        let cells = vec![cell("ACEH001_A", Some(5.2), Some(95.9), None)];
        let colors = ColorAssigner::for_cells(&cells);
        let beam = beam_layer(&cells, &colors);
        let label = beam
            .iter()
            .find_map(|p| match p {
                DrawablePrimitive::TextLabel { lat, lon, .. } => Some((*lat, *lon)),
                _ => None,
            })
            .unwrap();
        let d = crate::geo::haversine_distance_km(5.2, 95.9, label.0, label.1);
        crate::assert_deviation!(d, LABEL_OFFSET_KM, 0.1);
    }

    #[test]
    fn test_sectors_of_one_pattern_share_color() {
        let cells = vec![
            cell("ACEH001_A", Some(5.2), Some(95.9), None),
            cell("ACEH001_B", Some(5.2), Some(95.9), None),
        ];
        let colors = ColorAssigner::for_cells(&cells);
        let beam = beam_layer(&cells, &colors);
        let fills: Vec<&String> = beam
            .iter()
            .filter_map(|p| match p {
                DrawablePrimitive::Polygon { fill_color, .. } => Some(fill_color),
                _ => None,
            })
            .collect();
        assert_eq!(fills[0], fills[1]);
    }
}
