//! # Fretboard Grids
//!
//! The fretboard grid is the pitch class sounding at every (string, fret)
//! position: `grid[s][f] = (tuning[s] + f) mod 12`.
//!
//! ## Layout
//! ```text
//!            fret 0   fret 1   ...   fret N
//! string 1     4        5      ...
//! string 2     9       10      ...
//! ...
//! ```
//! - One row per string, in tuning order
//! - `num_frets + 1` columns, the open string being fret 0
//! - External labels are 1-indexed for strings and 0-indexed for frets
//!
//! A [`FilteredGrid`] has the same shape, with every cell outside the active
//! scale replaced by [`Cell::Excluded`].

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::trace;

use crate::instrument::Instrument;
use crate::notes::PitchClass;

/// Label of a 1-indexed string, e.g. `"string 1"`.
pub fn string_label(string: usize) -> String {
    format!("string {}", string)
}

/// Label of a fret, e.g. `"fret 0"` for the open string.
pub fn fret_label(fret: usize) -> String {
    format!("fret {}", fret)
}

/// Pitch classes of every string at every fret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FretboardGrid {
    rows: Vec<Vec<PitchClass>>,
}

impl FretboardGrid {
    pub fn num_strings(&self) -> usize {
        self.rows.len()
    }

    /// Highest fret in the grid (columns are `0..=num_frets`).
    pub fn num_frets(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len().saturating_sub(1))
    }

    /// Pitch class at a 1-indexed string and 0-indexed fret.
    pub fn get(&self, string: usize, fret: usize) -> Option<PitchClass> {
        let row = self.rows.get(string.checked_sub(1)?)?;
        row.get(fret).copied()
    }

    pub fn rows(&self) -> &[Vec<PitchClass>] {
        &self.rows
    }

    /// Replace every cell whose pitch class is in `excluded` with `Cell::Excluded`.
    pub fn exclude(&self, excluded: &BTreeSet<PitchClass>) -> FilteredGrid {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&pc| {
                        if excluded.contains(&pc) {
                            Cell::Excluded
                        } else {
                            Cell::InScale(pc)
                        }
                    })
                    .collect()
            })
            .collect();
        FilteredGrid { rows }
    }
}

/// A grid position after scale filtering.
///
/// Serializes as the pitch class number, or `null` when excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    InScale(PitchClass),
    Excluded,
}

impl Cell {
    pub fn pitch_class(self) -> Option<PitchClass> {
        match self {
            Cell::InScale(pc) => Some(pc),
            Cell::Excluded => None,
        }
    }

    pub fn is_excluded(self) -> bool {
        matches!(self, Cell::Excluded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredGrid {
    rows: Vec<Vec<Cell>>,
}

impl FilteredGrid {
    pub fn num_strings(&self) -> usize {
        self.rows.len()
    }

    pub fn num_frets(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len().saturating_sub(1))
    }

    /// Cell at a 1-indexed string and 0-indexed fret.
    pub fn get(&self, string: usize, fret: usize) -> Option<Cell> {
        let row = self.rows.get(string.checked_sub(1)?)?;
        row.get(fret).copied()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Positions still in scale, as (1-indexed string, fret, pitch class).
    pub fn in_scale(&self) -> impl Iterator<Item = (usize, usize, PitchClass)> + '_ {
        self.rows.iter().enumerate().flat_map(|(s, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(f, cell)| cell.pitch_class().map(|pc| (s + 1, f, pc)))
        })
    }
}

impl From<FretboardGrid> for FilteredGrid {
    fn from(grid: FretboardGrid) -> Self {
        grid.exclude(&BTreeSet::new())
    }
}

impl Instrument {
    /// Compute the pitch-class grid of this instrument's whole fretboard.
    ///
    /// Pure: two calls on the same instrument return identical grids.
    pub fn fretboard(&self) -> FretboardGrid {
        trace!(
            strings = self.num_strings(),
            frets = self.num_frets(),
            "generating fretboard"
        );
        let rows = self
            .tuning()
            .iter()
            .map(|&open| {
                (0..=self.num_frets())
                    .map(|fret| open.transpose(fret as i64))
                    .collect()
            })
            .collect();
        FretboardGrid { rows }
    }
}
