//! # UI Module
//!
//! Terminal views of a generated board.

pub mod board_view;
