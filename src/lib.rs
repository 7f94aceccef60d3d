pub mod config;
pub mod error;
pub mod fretboard;
pub mod instrument;
pub mod notes;
pub mod raag;
pub mod render;
pub mod tab;

pub use config::load_instrument;
pub use error::*;
pub use fretboard::{fret_label, string_label, Cell, FilteredGrid, FretboardGrid};
pub use instrument::{Instrument, Notation};
pub use notes::{integer_to_letter, letter_to_integer, NoteSequence, NoteToken, PitchClass};
pub use raag::{excluded, Scale};
pub use tab::{TabEntry, TabValue};

/// Render the fretboard of a YAML-described instrument as a text table.
/// This is the main entry point for the library.
pub fn render_fretboard(
    instrument_yaml: &str,
    scale: Option<&NoteSequence>,
    is_tab: bool,
) -> Result<String, FretboardError> {
    let instrument = Instrument::from_yaml(instrument_yaml)?;
    let grid = instrument.raag(scale, is_tab)?;
    Ok(render::to_text(&grid, instrument.notation()))
}
