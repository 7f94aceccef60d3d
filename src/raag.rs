//! # Raag Filtering
//!
//! A raag (scale) is the set of pitch classes a player may use. Filtering a
//! fretboard by a raag keeps the cells in the set and marks every other cell
//! [`Cell::Excluded`](crate::Cell::Excluded).
//!
//! ## Resolving the requested scale
//! | input | `is_tab` | pitch classes |
//! |---|---|---|
//! | none | either | all twelve (the grid is returned unfiltered) |
//! | integers | false | the integers, reduced mod 12 |
//! | integers | true | decoded as tablature frets |
//! | letters | false | looked up as note names |
//! | letters | true | decoded as tablature (`x` mutes a string) |
//!
//! The excluded set is always the complement over all twelve pitch classes,
//! not over the values that happen to appear on the grid.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::FretboardError;
use crate::fretboard::FilteredGrid;
use crate::instrument::Instrument;
use crate::notes::{NoteSequence, PitchClass};
use crate::tab::TabEntry;

/// A scale request after its input form has been decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scale {
    /// Every pitch class; filtering is the identity.
    Chromatic,
    /// Notes named directly, as integers or letters.
    Notes(NoteSequence),
    /// A chord shape whose sounding notes form the scale.
    Tab(TabEntry),
}

impl Scale {
    /// Decide how to read a raag request. An empty note list is rejected.
    pub fn resolve(scale: Option<&NoteSequence>, is_tab: bool) -> Result<Self, FretboardError> {
        match (scale, is_tab) {
            (None, _) => Ok(Scale::Chromatic),
            (Some(notes), _) if notes.is_empty() => Err(FretboardError::EmptySequence),
            (Some(notes), false) => Ok(Scale::Notes(notes.clone())),
            (Some(notes), true) => Ok(Scale::Tab(TabEntry::from_sequence(notes)?)),
        }
    }
}

impl From<NoteSequence> for Scale {
    fn from(notes: NoteSequence) -> Self {
        Scale::Notes(notes)
    }
}

impl From<TabEntry> for Scale {
    fn from(tab: TabEntry) -> Self {
        Scale::Tab(tab)
    }
}

/// Pitch classes not in `scale`, taken over all twelve.
pub fn excluded(scale: &BTreeSet<PitchClass>) -> BTreeSet<PitchClass> {
    PitchClass::all().filter(|pc| !scale.contains(pc)).collect()
}

impl Instrument {
    /// Pitch classes a scale allows on this instrument.
    pub fn scale_pitch_classes(&self, scale: &Scale) -> Result<BTreeSet<PitchClass>, FretboardError> {
        let pcs = match scale {
            Scale::Chromatic => PitchClass::all().collect(),
            Scale::Notes(notes) if notes.is_empty() => return Err(FretboardError::EmptySequence),
            Scale::Notes(notes) => notes.to_pitch_classes()?.into_iter().collect(),
            Scale::Tab(tab) => self.tab_to_integer(tab)?.into_iter().collect(),
        };
        Ok(pcs)
    }

    /// Fretboard grid with every cell outside `scale` excluded.
    pub fn filter(&self, scale: &Scale) -> Result<FilteredGrid, FretboardError> {
        let allowed = self.scale_pitch_classes(scale)?;
        let excluded = excluded(&allowed);
        debug!(?scale, ?allowed, ?excluded, "filtering fretboard");
        Ok(self.fretboard().exclude(&excluded))
    }

    /// Filter the fretboard by a raag given as notes or, with `is_tab`, as a
    /// tab entry. `None` returns the full fretboard.
    ///
    /// A tab mixing fret numbers and mute markers (`x,3,2,0,1,0`) is not a
    /// homogeneous `NoteSequence`; pass it as a [`TabEntry`] through
    /// [`filter`](Self::filter) with `Scale::from(tab)` instead.
    ///
    /// # Example
    /// ```rust
    /// use fretboard::{Cell, Instrument, Notation, NoteSequence, PitchClass};
    ///
    /// let guitar = Instrument::new(5, NoteSequence::from(vec![4, 9, 2, 7, 11, 4]), Notation::Integer, 0)?;
    /// let c_major_triad = NoteSequence::from(vec!["C", "E", "G"]);
    /// let grid = guitar.raag(Some(&c_major_triad), false)?;
    /// assert_eq!(grid.get(1, 0), Some(Cell::InScale(PitchClass::new(4))));
    /// assert_eq!(grid.get(1, 1), Some(Cell::Excluded));
    /// # Ok::<(), fretboard::FretboardError>(())
    /// ```
    pub fn raag(&self, scale: Option<&NoteSequence>, is_tab: bool) -> Result<FilteredGrid, FretboardError> {
        let scale = Scale::resolve(scale, is_tab)?;
        self.filter(&scale)
    }
}
