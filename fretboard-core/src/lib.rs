// fretboard-core/src/lib.rs

//! The core logic for the fretboard diagram.
//! This crate computes which pitch class sounds on every string at every
//! fret, how each one is named, which strings get a marker and which frets
//! carry an inlay label. It is completely headless and contains no
//! rendering code.

pub mod board;
pub mod config;
pub mod error;
pub mod naming;
pub mod pitch;
pub mod policy;

pub use board::{generate_board, Board, FretRecord, StringTuning, REFERENCE_TUNING};
pub use config::{BoardSettings, EXTENDED_FRET_COUNT, MAX_FRET_COUNT, STANDARD_FRET_COUNT};
pub use error::{FretboardError, Result};
pub use naming::{Letter, NamingConfig, Notation, Spelling};
pub use pitch::{name_of, transpose, transpose_fret, FretNotation, NoteNumber};
pub use policy::{Marker, MarkerPolicy};
