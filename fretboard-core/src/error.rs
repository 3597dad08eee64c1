//! # Error Module
//!
//! Both failure kinds here are caller contract violations: a pitch number
//! outside the 12-tone range or a base letter that is not one of the seven
//! natural notes. Neither can arise from a well-formed tuning.

use thiserror::Error;

/// Errors raised by the pitch engine and the board generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    /// A pitch class outside 1..=12 reached a naming operation, or a tuning
    /// was built from an out-of-range value.
    #[error("invalid pitch class {value}: expected a value in 1..=12")]
    InvalidPitchClass { value: u8 },

    /// A base note name that is not one of C, D, E, F, G, A, B.
    #[error("invalid base note {name:?}: expected one of C, D, E, F, G, A, B")]
    InvalidBaseNote { name: String },
}

pub type Result<T> = std::result::Result<T, FretboardError>;
