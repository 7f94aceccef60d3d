//! # Tablature
//!
//! A tab entry gives one value per string: the fret to play, or `x` for a
//! string that is not played. Decoding looks every played position up in the
//! instrument's fretboard grid.
//!
//! ## Rules
//! - The entry must have exactly one value per string
//! - `x` / `X` mutes a string; muted strings contribute nothing
//! - Results follow string order (string 1 first), not strum order
//! - A fret past the last fret of the instrument is an error
//!
//! ## Example
//! ```rust
//! use fretboard::{Instrument, Notation, NoteSequence, TabEntry};
//!
//! let guitar = Instrument::new(12, NoteSequence::from(vec!["E", "A", "D", "G", "B", "E"]), Notation::Letter, 0)?;
//! let c_major = TabEntry::parse_list("x,3,2,0,1,0")?;
//! assert_eq!(guitar.tab_to_letter(&c_major)?, vec!["C", "E", "G", "C", "E"]);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use std::fmt;

use tracing::debug;

use crate::error::FretboardError;
use crate::instrument::Instrument;
use crate::notes::{NoteSequence, NoteToken, PitchClass};

/// What is played on one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabValue {
    Fret(usize),
    Muted,
}

impl TabValue {
    /// Interpret a single tab token: a non-negative fret number or a mute marker.
    pub fn from_token(token: &NoteToken) -> Result<Self, FretboardError> {
        match token {
            NoteToken::Integer(n) => usize::try_from(*n)
                .map(TabValue::Fret)
                .map_err(|_| FretboardError::InvalidTabToken {
                    token: n.to_string(),
                }),
            NoteToken::Letter(s) => Self::from_word(s),
        }
    }

    /// A word is a mute marker, a fret number, or an unrecognized note.
    fn from_word(word: &str) -> Result<Self, FretboardError> {
        let trimmed = word.trim();
        if trimmed.eq_ignore_ascii_case("x") {
            return Ok(TabValue::Muted);
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Self::from_token(&NoteToken::Integer(n)),
            Err(_) => Err(FretboardError::InvalidNote {
                token: word.to_string(),
            }),
        }
    }
}

impl fmt::Display for TabValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabValue::Fret(n) => write!(f, "{}", n),
            TabValue::Muted => write!(f, "x"),
        }
    }
}

/// One tab value per string, string 1 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry(Vec<TabValue>);

impl TabEntry {
    pub fn new(values: Vec<TabValue>) -> Self {
        Self(values)
    }

    /// Build from raw tokens. Integers and mute markers may be mixed freely.
    pub fn from_tokens(tokens: &[NoteToken]) -> Result<Self, FretboardError> {
        tokens
            .iter()
            .map(TabValue::from_token)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Reinterpret a note sequence as tablature (used when a raag is given as a tab).
    pub fn from_sequence(sequence: &NoteSequence) -> Result<Self, FretboardError> {
        let values = match sequence {
            NoteSequence::Integers(frets) => frets
                .iter()
                .map(|&n| TabValue::from_token(&NoteToken::Integer(n)))
                .collect::<Result<Vec<_>, _>>()?,
            NoteSequence::Letters(words) => words
                .iter()
                .map(|w| TabValue::from_word(w))
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(Self(values))
    }

    /// Parse a comma-separated tab such as `"x,3,2,0,1,0"`.
    pub fn parse_list(list: &str) -> Result<Self, FretboardError> {
        let tokens: Vec<NoteToken> = list.split(',').map(NoteToken::parse).collect();
        Self::from_tokens(&tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[TabValue] {
        &self.0
    }
}

impl Instrument {
    /// Pitch classes sounded by a tab, in string order, muted strings dropped.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the tab length differs from the string count
    /// - `FretOutOfRange` if a played fret is past the last fret
    pub fn tab_to_integer(&self, tab: &TabEntry) -> Result<Vec<PitchClass>, FretboardError> {
        if tab.len() != self.num_strings() {
            return Err(FretboardError::DimensionMismatch {
                expected: self.num_strings(),
                actual: tab.len(),
            });
        }

        // (string, fret) pairs of the played strings; pairing before dropping
        // keeps strings and frets aligned.
        let played: Vec<(usize, usize)> = tab
            .values()
            .iter()
            .enumerate()
            .filter_map(|(i, value)| match value {
                TabValue::Fret(fret) => Some((i + 1, *fret)),
                TabValue::Muted => None,
            })
            .collect();

        let grid = self.fretboard();
        let notes = played
            .into_iter()
            .map(|(string, fret)| {
                grid.get(string, fret)
                    .ok_or_else(|| FretboardError::FretOutOfRange {
                        string,
                        fret,
                        num_frets: self.num_frets(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(tab = ?tab.values(), ?notes, "decoded tablature");
        Ok(notes)
    }

    /// Letter spellings of the pitch classes sounded by a tab.
    pub fn tab_to_letter(&self, tab: &TabEntry) -> Result<Vec<&'static str>, FretboardError> {
        Ok(self
            .tab_to_integer(tab)?
            .into_iter()
            .map(PitchClass::letter)
            .collect())
    }
}
