//! # Instrument Configuration
//!
//! Instruments can be described in YAML:
//!
//! ```yaml
//! num-frets: 12
//! tuning: [E, A, D, G, B, E]   # or [4, 9, 2, 7, 11, 4]
//! notation: letter             # integer (default) | letter
//! capo: 2                      # default 0
//! ```
//!
//! The raw document is deserialized first, then validated into an
//! [`Instrument`]. Tuning tokens must all be integers or all be letters.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::FretboardError;
use crate::instrument::{Instrument, Notation};
use crate::notes::{NoteSequence, NoteToken};

/// Raw instrument description for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct RawInstrument {
    pub num_frets: usize,
    pub tuning: Vec<NoteToken>,
    pub notation: Option<String>,
    pub capo: Option<i64>,
}

impl RawInstrument {
    pub fn into_instrument(self) -> Result<Instrument, FretboardError> {
        let notation = match &self.notation {
            Some(name) => Notation::from_name(name).ok_or_else(|| {
                FretboardError::ConfigError(format!("Unknown notation: {}", name))
            })?,
            None => Notation::default(),
        };
        let tuning = NoteSequence::from_tokens(self.tuning)?;
        Instrument::new(self.num_frets, tuning, notation, self.capo.unwrap_or(0))
    }
}

impl Instrument {
    /// Build an instrument from a YAML description.
    pub fn from_yaml(content: &str) -> Result<Self, FretboardError> {
        let raw: RawInstrument =
            serde_yaml::from_str(content).map_err(|e| FretboardError::ConfigError(e.to_string()))?;
        raw.into_instrument()
    }
}

/// Read and validate an instrument description file.
pub fn load_instrument(path: impl AsRef<Path>) -> Result<Instrument, FretboardError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading instrument");
    let content = fs::read_to_string(path).map_err(|e| {
        FretboardError::ConfigError(format!("Error reading '{}': {}", path.display(), e))
    })?;
    Instrument::from_yaml(&content)
}
