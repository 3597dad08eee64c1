//! # Board View
//!
//! Renders a [`Board`] as a plain-text grid: one column per fret, one row
//! per string, and a final row of inlay labels.
//!
//! Primary markers print the string name as is, dimmed markers print it in
//! parentheses, and strings without a marker print a fret-wire dash.

use fretboard_core::{Board, FretRecord, Marker};
use std::fmt::Write;

const CELL_WIDTH: usize = 5;

fn cell(fret: &FretRecord, string: usize) -> String {
    let name = &fret.string_names[string];
    match fret.markers[string] {
        Marker::Primary => name.clone(),
        Marker::Dimmed => format!("({name})"),
        Marker::Hidden => "-".to_string(),
    }
}

/// Builds the full text grid for a board.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    let Some(first) = board.get(0) else {
        return out;
    };
    let string_count = first.string_names.len();

    // Header: fret numbers
    out.push_str("   ");
    for fret in board {
        let _ = write!(out, "{:^CELL_WIDTH$}", fret.fret_index);
    }
    out.push('\n');

    for string in 0..string_count {
        let _ = write!(out, "{:>2} ", string + 1);
        for fret in board {
            let _ = write!(out, "{:^CELL_WIDTH$}", cell(fret, string));
        }
        out.push('\n');
    }

    out.push_str("   ");
    for fret in board {
        let _ = write!(out, "{:^CELL_WIDTH$}", fret.inlay_label);
    }
    out.push('\n');
    out
}
