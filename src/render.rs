//! # Text Output
//!
//! Formats filtered grids for a terminal or for machine consumption.
//!
//! ```text
//!            0  1  2  3
//! string 1  E  F  .  G
//! string 2  A  .  B  C
//! ```
//! Fret numbers head the columns, excluded cells are shown as `.`, and labels
//! follow the instrument's notation.

use crate::error::FretboardError;
use crate::fretboard::{string_label, Cell, FilteredGrid};
use crate::instrument::Notation;

const EXCLUDED_MARK: &str = ".";

/// Render a grid as an aligned text table.
pub fn to_text(grid: &FilteredGrid, notation: Notation) -> String {
    let label_width = string_label(grid.num_strings()).len();
    // Widest cell is "10"/"11" or "C#"; fret numbers may be wider on long necks
    let cell_width = grid.num_frets().to_string().len().max(2);

    let mut text = String::new();

    text.push_str(&" ".repeat(label_width));
    for fret in 0..=grid.num_frets() {
        text.push_str(&format!(" {:>width$}", fret, width = cell_width));
    }
    text.push('\n');

    for (i, row) in grid.rows().iter().enumerate() {
        text.push_str(&format!("{:<width$}", string_label(i + 1), width = label_width));
        for cell in row {
            text.push_str(&format!(" {:>width$}", cell_text(*cell, notation), width = cell_width));
        }
        text.push('\n');
    }

    text
}

fn cell_text(cell: Cell, notation: Notation) -> String {
    match cell {
        Cell::InScale(pc) => notation.label(pc),
        Cell::Excluded => EXCLUDED_MARK.to_string(),
    }
}

/// Serialize a grid as YAML: one list per string, `null` for excluded cells.
pub fn to_yaml(grid: &FilteredGrid) -> Result<String, FretboardError> {
    serde_yaml::to_string(grid).map_err(|e| FretboardError::OutputError(e.to_string()))
}
