//! # Error Types
//!
//! Every failure in this crate is a synchronous validation failure raised at the
//! call that received the bad input. Each variant carries the offending value so
//! the caller can report it.
//!
//! ## Usage
//! ```rust
//! use fretboard::{letter_to_integer, FretboardError};
//!
//! match letter_to_integer(&["H"]) {
//!     Err(FretboardError::InvalidNote { token }) => assert_eq!(token, "H"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FretboardError {
    /// A letter token matched none of the recognized spellings.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidNote { token: "H".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note 'H'");
    /// ```
    #[error("Invalid note '{token}'")]
    InvalidNote { token: String },

    /// A tablature entry did not supply exactly one value per string.
    #[error("Tablature has {actual} entries but the instrument has {expected} strings")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A note sequence mixed integer and letter tokens.
    #[error("Note sequence mixes integers and letters (first differing token at position {index})")]
    MixedSequence { index: usize },

    #[error("Note sequence is empty")]
    EmptySequence,

    /// A tablature token is neither a fret number nor a mute marker.
    #[error("Invalid tablature value '{token}' (expected a fret number or 'x')")]
    InvalidTabToken { token: String },

    /// A tablature fret lies past the last fret of the instrument.
    #[error("Fret {fret} on string {string} is beyond the last fret ({num_frets})")]
    FretOutOfRange {
        string: usize,
        fret: usize,
        num_frets: usize,
    },

    /// Instrument description could not be read or parsed.
    #[error("Invalid instrument config: {0}")]
    ConfigError(String),

    /// A grid could not be written in the requested output format.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::OutputError("unsupported value".to_string());
    /// assert_eq!(err.to_string(), "Failed to write grid: unsupported value");
    /// ```
    #[error("Failed to write grid: {0}")]
    OutputError(String),
}
