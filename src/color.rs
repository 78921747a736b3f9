//! Deterministic pattern-to-color assignment.
//!
//! Cells sharing a name prefix (the "pattern", everything before the
//! first underscore) render in one color so sectors of a site read as a
//! group. The first 20 patterns take palette colors in first-encounter
//! order; later patterns get a hash-derived color. Palette collisions
//! with hash colors are tolerated.

use crate::record::CellRecord;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Returned for empty or unknown cell names.
pub const NEUTRAL_GRAY: &str = "#95A5A6";

static PALETTE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "#E74C3C", "#3498DB", "#2ECC71", "#F39C12", "#D4C32A", "#1ABC9C", "#E67E22", "#DB1248",
        "#E91E63", "#FF5722", "#00BCD4", "#8BC34A", "#FFC107", "#795548", "#0FEF2D", "#FF6B6B",
        "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7",
    ]
});

/// The grouping key of a cell name: the substring before the first
/// underscore, or the whole name if there is none.
pub fn pattern_of(cell_name: &str) -> &str {
    match cell_name.split_once('_') {
        Some((pattern, _)) => pattern,
        None => cell_name,
    }
}

fn hash_color(pattern: &str) -> String {
    let mut hasher = DefaultHasher::new();
    pattern.hash(&mut hasher);
    format!("#{:06x}", hasher.finish() & 0xFF_FFFF)
}

/// Per-invocation pattern-to-color mapping.
///
/// Built fresh for every scene; sharing one across invocations would
/// break the first-encounter determinism contract.
#[derive(Clone, Debug, Default)]
pub struct ColorAssigner {
    colors: HashMap<String, String>,
    order: Vec<String>,
}

impl ColorAssigner {
    /// Assign colors to patterns in the order given (first occurrence
    /// wins; later duplicates are ignored). Order is significant: it
    /// decides which patterns receive palette colors before the palette
    /// is exhausted and hashing takes over.
    pub fn assign<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut assigner = ColorAssigner::default();
        for pattern in patterns {
            let pattern = pattern.into();
            if pattern.is_empty() || assigner.colors.contains_key(&pattern) {
                continue;
            }
            let color = match PALETTE.get(assigner.order.len()) {
                Some(palette_color) => (*palette_color).to_string(),
                None => hash_color(&pattern),
            };
            assigner.colors.insert(pattern.clone(), color);
            assigner.order.push(pattern);
        }
        assigner
    }

    /// Build an assigner from a snapshot, taking patterns in the order
    /// cells first appear.
    pub fn for_cells(cells: &[CellRecord]) -> Self {
        Self::assign(cells.iter().map(|cell| pattern_of(&cell.cell_name)))
    }

    /// Color for a cell name, via its pattern. Neutral gray for empty
    /// input or patterns this assigner has never seen.
    pub fn get_color(&self, cell_name: &str) -> &str {
        if cell_name.is_empty() {
            return NEUTRAL_GRAY;
        }
        match self.colors.get(pattern_of(cell_name)) {
            Some(color) => color.as_str(),
            None => NEUTRAL_GRAY,
        }
    }

    /// `(pattern, color)` pairs in assignment order, capped at `limit`,
    /// for the external legend UI.
    pub fn legend_entries(&self, limit: usize) -> Vec<(String, String)> {
        self.order
            .iter()
            .take(limit)
            .map(|pattern| (pattern.clone(), self.colors[pattern].clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
