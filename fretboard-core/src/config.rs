//! # Board Settings Module
//!
//! A serializable bundle of everything `generate_board` takes, so a host
//! can keep board presets in a JSON file. Every field has a default:
//!
//! ```json
//! {
//!   "tuning": [5, 12, 8, 3, 10, 5, 0],
//!   "fret_count": 16,
//!   "naming": { "notation": "numeric", "spelling": "sharp", "base": "C" },
//!   "visible_degrees": ["1", "2", "3", "5", "6"],
//!   "emphasized_degrees": ["1", "3", "5"]
//! }
//! ```

use crate::board::{self, Board, StringTuning};
use crate::error::Result;
use crate::naming::NamingConfig;
use crate::policy::MarkerPolicy;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Fret count of the short board layout.
pub const STANDARD_FRET_COUNT: usize = 16;

/// Fret count of the long board layout.
pub const EXTENDED_FRET_COUNT: usize = 23;

/// Largest fret count accepted from a settings file or the command line.
pub const MAX_FRET_COUNT: usize = 48;

/// Fails unless `count` is at most [`MAX_FRET_COUNT`].
pub fn check_fret_count(count: usize) -> std::result::Result<usize, String> {
    if count <= MAX_FRET_COUNT {
        Ok(count)
    } else {
        Err(format!("fret count {count} exceeds the maximum of {MAX_FRET_COUNT}"))
    }
}

fn bounded_fret_count<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let count = usize::deserialize(deserializer)?;
    check_fret_count(count).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub tuning: StringTuning,
    #[serde(deserialize_with = "bounded_fret_count")]
    pub fret_count: usize,
    pub naming: NamingConfig,
    pub visible_degrees: BTreeSet<String>,
    pub emphasized_degrees: BTreeSet<String>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        let policy = MarkerPolicy::default();
        BoardSettings {
            tuning: StringTuning::reference(),
            fret_count: STANDARD_FRET_COUNT,
            naming: NamingConfig::default(),
            visible_degrees: policy.visible_degrees,
            emphasized_degrees: policy.emphasized_degrees,
        }
    }
}

impl BoardSettings {
    /// Parses settings from a JSON document. Missing fields take their
    /// defaults; an out-of-range tuning or unknown base letter is rejected.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn policy(&self) -> MarkerPolicy {
        MarkerPolicy::new(
            self.visible_degrees.clone(),
            self.emphasized_degrees.clone(),
        )
    }

    pub fn generate(&self) -> Result<Board> {
        board::generate_board(&self.tuning, self.fret_count, &self.naming, &self.policy())
    }
}
