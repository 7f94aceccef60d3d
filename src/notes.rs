//! # Note System
//!
//! Bidirectional conversion between letter spellings and integer pitch classes.
//!
//! ## Conventions
//! - Pitch classes are integers 0-11 with 0 = C, 1 = C#, ..., 11 = B
//! - Letters are case-insensitive on input and title-cased before lookup
//!   (`"eb"`, `"EB"` and `"Eb"` are the same token)
//! - Sharp and flat spellings of a black key map to the same pitch class
//!   (`C#` and `Db` are both 1)
//! - Display always uses the sharp spelling
//! - `E#`, `Fb`, `B#` and `Cb` are not recognized
//!
//! ## Example
//! ```rust
//! use fretboard::{integer_to_letter, letter_to_integer, PitchClass};
//!
//! let pcs = letter_to_integer(&["E", "a", "Db"])?;
//! assert_eq!(pcs, vec![PitchClass::new(4), PitchClass::new(9), PitchClass::new(1)]);
//! assert_eq!(integer_to_letter(PitchClass::new(1)), "C#");
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;

/// Recognized letter spellings and their pitch classes.
const LETTER_TABLE: [(&str, u8); 17] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
];

/// Display spelling for each pitch class.
const DISPLAY_LETTERS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Marker color for each pitch class, used by diagram renderers.
const PITCH_COLORS: [&str; 12] = [
    "#ff0000", "#00ffd8", "#ff7f00", "#ffb1f7", "#ffff00", "#c71585",
    "#32c715", "#917249", "#5959ff", "#ffd864", "#9542ff", "#ebff5e",
];

/// One of the twelve octave-independent pitch classes.
///
/// Construction always reduces mod 12, so a `PitchClass` is in 0..12 for its
/// whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Reduce any integer to its pitch class (`-1` becomes `11`, `14` becomes `2`).
    pub fn new(value: i64) -> Self {
        Self(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The pitch class `semitones` above this one.
    pub fn transpose(self, semitones: i64) -> Self {
        Self::new(self.0 as i64 + semitones.rem_euclid(12))
    }

    /// All twelve pitch classes in ascending order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12u8).map(PitchClass)
    }

    /// Sharp spelling used for display.
    pub fn letter(self) -> &'static str {
        DISPLAY_LETTERS[self.0 as usize]
    }

    /// Hex marker color for diagrams.
    pub fn color(self) -> &'static str {
        PITCH_COLORS[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single note as written by a user, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NoteToken {
    Integer(i64),
    Letter(String),
}

impl NoteToken {
    /// Interpret a command-line word: integer literals are `Integer`, anything
    /// else is kept as a `Letter`.
    pub fn parse(word: &str) -> Self {
        let trimmed = word.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => NoteToken::Integer(n),
            Err(_) => NoteToken::Letter(trimmed.to_string()),
        }
    }

    fn is_integer(&self) -> bool {
        matches!(self, NoteToken::Integer(_))
    }
}

impl fmt::Display for NoteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteToken::Integer(n) => write!(f, "{}", n),
            NoteToken::Letter(s) => write!(f, "{}", s),
        }
    }
}

/// A homogeneous list of notes: either all integers or all letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSequence {
    Integers(Vec<i64>),
    Letters(Vec<String>),
}

impl NoteSequence {
    /// Validate raw tokens into a sequence of a single kind.
    ///
    /// Fails with `EmptySequence` for no tokens and `MixedSequence` when any
    /// token differs in kind from the first one.
    pub fn from_tokens(tokens: Vec<NoteToken>) -> Result<Self, FretboardError> {
        let first_is_integer = match tokens.first() {
            Some(token) => token.is_integer(),
            None => return Err(FretboardError::EmptySequence),
        };

        if let Some(index) = tokens
            .iter()
            .position(|t| t.is_integer() != first_is_integer)
        {
            return Err(FretboardError::MixedSequence { index });
        }

        let sequence = if first_is_integer {
            NoteSequence::Integers(
                tokens
                    .into_iter()
                    .filter_map(|t| match t {
                        NoteToken::Integer(n) => Some(n),
                        NoteToken::Letter(_) => None,
                    })
                    .collect(),
            )
        } else {
            NoteSequence::Letters(
                tokens
                    .into_iter()
                    .filter_map(|t| match t {
                        NoteToken::Letter(s) => Some(s),
                        NoteToken::Integer(_) => None,
                    })
                    .collect(),
            )
        };
        Ok(sequence)
    }

    /// Parse a comma-separated list such as `"C,E,G"` or `"0,4,7"`.
    pub fn parse_list(list: &str) -> Result<Self, FretboardError> {
        let tokens = list
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(NoteToken::parse)
            .collect();
        Self::from_tokens(tokens)
    }

    pub fn len(&self) -> usize {
        match self {
            NoteSequence::Integers(v) => v.len(),
            NoteSequence::Letters(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve every note to its pitch class.
    pub fn to_pitch_classes(&self) -> Result<Vec<PitchClass>, FretboardError> {
        match self {
            NoteSequence::Integers(values) => Ok(values.iter().map(|&v| PitchClass::new(v)).collect()),
            NoteSequence::Letters(letters) => letter_to_integer(letters.as_slice()),
        }
    }
}

impl From<Vec<i64>> for NoteSequence {
    fn from(values: Vec<i64>) -> Self {
        NoteSequence::Integers(values)
    }
}

impl From<Vec<&str>> for NoteSequence {
    fn from(letters: Vec<&str>) -> Self {
        NoteSequence::Letters(letters.into_iter().map(str::to_string).collect())
    }
}

/// Title-case a token: first character upper, the rest lower (`"eB"` -> `"Eb"`).
fn title_case(token: &str) -> String {
    let mut chars = token.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn lookup_letter(token: &str) -> Result<PitchClass, FretboardError> {
    let normalized = title_case(token);
    LETTER_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == normalized)
        .map(|&(_, pc)| PitchClass(pc))
        .ok_or_else(|| FretboardError::InvalidNote {
            token: token.to_string(),
        })
}

/// Convert letter spellings to pitch classes, failing on the first unknown token.
pub fn letter_to_integer<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<PitchClass>, FretboardError> {
    tokens.iter().map(|t| lookup_letter(t.as_ref())).collect()
}

/// Sharp spelling of a pitch class.
pub fn integer_to_letter(pc: PitchClass) -> &'static str {
    pc.letter()
}
