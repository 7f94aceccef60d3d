//! # Instrument
//!
//! An instrument is a fixed number of frets plus the open pitch class of each
//! string. It is built once and never changes; every grid, tab decode and raag
//! filter is derived from it on demand.
//!
//! ## Tuning
//! - Given as a [`NoteSequence`]: all integers (`[4, 9, 2, 7, 11, 4]`) or all
//!   letters (`["E", "A", "D", "G", "B", "E"]`)
//! - String 1 is the first entry of the sequence
//! - The capo offset is added to every string and the result reduced mod 12
//!
//! ## Example
//! ```rust
//! use fretboard::{Instrument, Notation, NoteSequence, PitchClass};
//!
//! let guitar = Instrument::new(12, NoteSequence::from(vec!["E", "A", "D", "G", "B", "E"]), Notation::Letter, 0)?;
//! assert_eq!(guitar.num_strings(), 6);
//! assert_eq!(guitar.tuning()[1], PitchClass::new(9));
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FretboardError;
use crate::notes::{NoteSequence, PitchClass};

/// How note labels are shown to a reader. Has no effect on computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Integer,
    Letter,
}

impl Notation {
    /// Parse a notation name ("integer" or "letter", any case).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "integer" => Some(Notation::Integer),
            "letter" => Some(Notation::Letter),
            _ => None,
        }
    }

    /// Label for a pitch class in this notation (`4` or `"E"`).
    pub fn label(self, pc: PitchClass) -> String {
        match self {
            Notation::Integer => pc.to_string(),
            Notation::Letter => pc.letter().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    num_frets: usize,
    tuning: Vec<PitchClass>,
    notation: Notation,
    capo: i64,
}

impl Instrument {
    /// Build an instrument from its fret count, open-string tuning, display
    /// notation and capo offset.
    ///
    /// # Errors
    /// - `EmptySequence` if the tuning has no strings
    /// - `InvalidNote` if a letter tuning contains an unknown spelling
    pub fn new(
        num_frets: usize,
        tuning: NoteSequence,
        notation: Notation,
        capo: i64,
    ) -> Result<Self, FretboardError> {
        if tuning.is_empty() {
            return Err(FretboardError::EmptySequence);
        }

        let tuning: Vec<PitchClass> = tuning
            .to_pitch_classes()?
            .into_iter()
            .map(|pc| pc.transpose(capo))
            .collect();

        debug!(
            strings = tuning.len(),
            frets = num_frets,
            capo,
            ?notation,
            "built instrument"
        );

        Ok(Self {
            num_frets,
            tuning,
            notation,
            capo,
        })
    }

    pub fn num_strings(&self) -> usize {
        self.tuning.len()
    }

    pub fn num_frets(&self) -> usize {
        self.num_frets
    }

    /// Open pitch class of each string, capo already applied.
    pub fn tuning(&self) -> &[PitchClass] {
        &self.tuning
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn capo(&self) -> i64 {
        self.capo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(values: &[i64]) -> Vec<PitchClass> {
        values.iter().map(|&v| PitchClass::new(v)).collect()
    }

    #[test]
    fn test_letter_tuning() {
        let guitar = Instrument::new(
            5,
            NoteSequence::from(vec!["E", "A", "D", "G", "B", "E"]),
            Notation::Letter,
            0,
        )
        .unwrap();
        assert_eq!(guitar.tuning(), pcs(&[4, 9, 2, 7, 11, 4]).as_slice());
        assert_eq!(guitar.num_strings(), 6);
        assert_eq!(guitar.num_frets(), 5);
    }

    #[test]
    fn test_integer_tuning_matches_letters() {
        let by_int = Instrument::new(5, NoteSequence::from(vec![4, 9, 2, 7, 11, 4]), Notation::Integer, 0).unwrap();
        let by_letter = Instrument::new(
            5,
            NoteSequence::from(vec!["e", "a", "d", "g", "b", "e"]),
            Notation::Integer,
            0,
        )
        .unwrap();
        assert_eq!(by_int.tuning(), by_letter.tuning());
    }

    #[test]
    fn test_capo_is_reduced() {
        // Capo 2 on a B string must wrap to C#
        let inst = Instrument::new(3, NoteSequence::from(vec![11, 4]), Notation::Integer, 2).unwrap();
        assert_eq!(inst.tuning(), pcs(&[1, 6]).as_slice());
        assert_eq!(inst.capo(), 2);
    }

    #[test]
    fn test_negative_capo_wraps() {
        let inst = Instrument::new(3, NoteSequence::from(vec![0]), Notation::Integer, -1).unwrap();
        assert_eq!(inst.tuning(), pcs(&[11]).as_slice());
    }

    #[test]
    fn test_huge_capo_wraps() {
        // i64::MAX = 12 * k + 7, so a B string lands on F#
        let inst = Instrument::new(3, NoteSequence::from(vec![11]), Notation::Integer, i64::MAX).unwrap();
        assert_eq!(inst.tuning(), pcs(&[6]).as_slice());

        let inst = Instrument::new(3, NoteSequence::from(vec![0]), Notation::Integer, i64::MIN).unwrap();
        assert_eq!(inst.tuning(), pcs(&[4]).as_slice());
    }

    #[test]
    fn test_empty_tuning() {
        let result = Instrument::new(3, NoteSequence::Integers(vec![]), Notation::Integer, 0);
        assert_eq!(result, Err(FretboardError::EmptySequence));
    }

    #[test]
    fn test_invalid_tuning_letter() {
        let result = Instrument::new(3, NoteSequence::from(vec!["E", "Q"]), Notation::Letter, 0);
        assert_eq!(
            result,
            Err(FretboardError::InvalidNote {
                token: "Q".to_string()
            })
        );
    }

    #[test]
    fn test_notation_labels() {
        let pc = PitchClass::new(6);
        assert_eq!(Notation::Integer.label(pc), "6");
        assert_eq!(Notation::Letter.label(pc), "F#");
        assert_eq!(Notation::from_name("Letter"), Some(Notation::Letter));
        assert_eq!(Notation::from_name("solfege"), None);
    }
}
