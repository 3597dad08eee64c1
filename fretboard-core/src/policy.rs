//! # Marker Policy Module
//!
//! Decides which strings show a marker at a fret. The decision is made on
//! the numeric degree name ("1", "5", "2#" ...) so that it does not change
//! when the board is rendered with letter names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a string is marked at one fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// No marker is drawn.
    #[default]
    Hidden,
    /// Drawn at full opacity (triad tones by default).
    Primary,
    /// Drawn at reduced opacity.
    Dimmed,
}

impl Marker {
    pub fn is_visible(self) -> bool {
        self != Marker::Hidden
    }

    /// True for a visible marker that is de-emphasized.
    pub fn is_transparent(self) -> bool {
        self == Marker::Dimmed
    }
}

/// Which numeric degree names get a marker, and which of those are drawn
/// at full opacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerPolicy {
    pub visible_degrees: BTreeSet<String>,
    pub emphasized_degrees: BTreeSet<String>,
}

fn degree_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Degrees of the major triad, drawn at full opacity.
pub const TRIAD_DEGREES: [&str; 3] = ["1", "3", "5"];

impl MarkerPolicy {
    pub fn new(visible_degrees: BTreeSet<String>, emphasized_degrees: BTreeSet<String>) -> Self {
        MarkerPolicy {
            visible_degrees,
            emphasized_degrees,
        }
    }

    /// Policy with the given visible set and the triad emphasized.
    pub fn with_visible<I, S>(visible: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MarkerPolicy {
            visible_degrees: visible.into_iter().map(Into::into).collect(),
            emphasized_degrees: degree_set(&TRIAD_DEGREES),
        }
    }

    /// Markers on degrees 1, 2, 3, 5 and 6; 2 and 6 are dimmed.
    pub fn triad_and_neighbors() -> Self {
        Self::with_visible(["1", "2", "3", "5", "6"])
    }

    /// Markers on the root only.
    pub fn root_only() -> Self {
        Self::with_visible(["1"])
    }

    pub fn is_visible(&self, numeric_name: &str) -> bool {
        self.visible_degrees.contains(numeric_name)
    }

    pub fn classify(&self, numeric_name: &str) -> Marker {
        if !self.is_visible(numeric_name) {
            Marker::Hidden
        } else if self.emphasized_degrees.contains(numeric_name) {
            Marker::Primary
        } else {
            Marker::Dimmed
        }
    }
}

impl Default for MarkerPolicy {
    fn default() -> Self {
        Self::triad_and_neighbors()
    }
}
