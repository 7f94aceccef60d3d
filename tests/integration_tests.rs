//! Integration tests for the fretboard engine
//!
//! Tests the full pipeline from an instrument description to filtered grids
//! and rendered output.

use fretboard::{
    integer_to_letter, letter_to_integer, render_fretboard, Cell, FilteredGrid, FretboardError,
    Instrument, Notation, NoteSequence, PitchClass, TabEntry,
};
use pretty_assertions::assert_eq;

const GUITAR: &str = r#"
num-frets: 5
tuning: [E, A, D, G, B, E]
notation: letter
"#;

fn pcs(values: &[i64]) -> Vec<PitchClass> {
    values.iter().map(|&v| PitchClass::new(v)).collect()
}

#[test]
fn test_standard_guitar_tuning_and_grid() {
    let guitar = Instrument::from_yaml(GUITAR).unwrap();
    assert_eq!(guitar.tuning(), pcs(&[4, 9, 2, 7, 11, 4]).as_slice());

    let grid = guitar.fretboard();
    assert_eq!(grid.get(1, 0), Some(PitchClass::new(4)));
    assert_eq!(grid.get(1, 1), Some(PitchClass::new(5)));
    assert_eq!(grid.get(1, 5), Some(PitchClass::new(9)));
    assert_eq!(grid.get(6, 0), grid.get(1, 0));
}

#[test]
fn test_round_trip_letters() {
    for pc in PitchClass::all() {
        assert_eq!(letter_to_integer(&[integer_to_letter(pc)]).unwrap(), vec![pc]);
    }
}

#[test]
fn test_tab_decode_c_major() {
    let guitar = Instrument::from_yaml(GUITAR).unwrap();
    let tab = TabEntry::parse_list("X,3,2,0,1,0").unwrap();
    assert_eq!(guitar.tab_to_integer(&tab).unwrap(), pcs(&[0, 4, 7, 0, 4]));
    assert_eq!(guitar.tab_to_letter(&tab).unwrap(), vec!["C", "E", "G", "C", "E"]);
}

#[test]
fn test_short_tab_is_rejected() {
    let guitar = Instrument::from_yaml(GUITAR).unwrap();
    let tab = TabEntry::parse_list("3,2,0,1,0").unwrap();
    assert_eq!(
        guitar.tab_to_integer(&tab),
        Err(FretboardError::DimensionMismatch {
            expected: 6,
            actual: 5
        })
    );
}

#[test]
fn test_raag_from_tab_and_notes_agree() {
    let guitar = Instrument::from_yaml(GUITAR).unwrap();
    let from_tab = guitar
        .raag(Some(&NoteSequence::from(vec!["x", "3", "2", "0", "1", "0"])), true)
        .unwrap();
    let from_letters = guitar.raag(Some(&NoteSequence::from(vec!["C", "E", "G"])), false).unwrap();
    assert_eq!(from_tab, from_letters);

    let kept: Vec<PitchClass> = from_tab.in_scale().map(|(_, _, pc)| pc).collect();
    assert!(!kept.is_empty());
    assert!(kept.iter().all(|pc| [0, 4, 7].contains(&pc.value())));
}

#[test]
fn test_null_raag_returns_whole_board() {
    let guitar = Instrument::from_yaml(GUITAR).unwrap();
    let unfiltered = guitar.raag(None, false).unwrap();
    assert_eq!(unfiltered, FilteredGrid::from(guitar.fretboard()));
    assert!(unfiltered.rows().iter().flatten().all(|cell| !cell.is_excluded()));
}

#[test]
fn test_capo_shifts_whole_board() {
    let open = Instrument::new(5, NoteSequence::from(vec!["E", "A", "D", "G", "B", "E"]), Notation::Integer, 0).unwrap();
    let capo = Instrument::new(5, NoteSequence::from(vec!["E", "A", "D", "G", "B", "E"]), Notation::Integer, 2).unwrap();
    let open_grid = open.fretboard();
    let capo_grid = capo.fretboard();
    for s in 1..=6 {
        for f in 0..=3 {
            assert_eq!(capo_grid.get(s, f), open_grid.get(s, f + 2));
        }
    }
    assert!(capo.tuning().iter().all(|pc| pc.value() < 12));
}

#[test]
fn test_unknown_note_in_raag() {
    let guitar = Instrument::from_yaml(GUITAR).unwrap();
    let result = guitar.raag(Some(&NoteSequence::from(vec!["H"])), false);
    assert_eq!(
        result,
        Err(FretboardError::InvalidNote {
            token: "H".to_string()
        })
    );
}

#[test]
fn test_render_fretboard_text() {
    let text = render_fretboard(GUITAR, Some(&NoteSequence::from(vec![4])), false).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[1], "string 1  E  .  .  .  .  .");
    assert_eq!(lines[6], "string 6  E  .  .  .  .  .");
}

#[test]
fn test_excluded_cells_have_no_pitch() {
    let guitar = Instrument::from_yaml(GUITAR).unwrap();
    let grid = guitar.raag(Some(&NoteSequence::from(vec![0])), false).unwrap();
    assert_eq!(grid.get(2, 3), Some(Cell::InScale(PitchClass::new(0))));
    assert_eq!(grid.get(2, 2).and_then(Cell::pitch_class), None);
}
