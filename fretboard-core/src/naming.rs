//! # Naming Configuration Module
//!
//! Controls how a pitch class is turned into a display name: as a numeric
//! scale degree ("4#") or as a letter ("F#"), with sharp or flat spelling,
//! and relative to a chosen tonal base.
//!
//! ## Defaults
//! - Notation: numeric
//! - Spelling: sharp
//! - Base: C

use crate::error::{FretboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven natural note letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Letter {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// The natural letters in ascending order starting from C.
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position of this letter in [`Letter::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = FretboardError;

    /// Parses a bare uppercase letter. Surrounding whitespace is ignored,
    /// anything else (lowercase, accidentals, other letters) is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Letter::ALL
            .iter()
            .copied()
            .find(|letter| letter.as_str() == trimmed)
            .ok_or_else(|| FretboardError::InvalidBaseNote {
                name: s.to_string(),
            })
    }
}

/// Whether names are rendered as scale degrees or as letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Numeric,
    Alphabet,
}

/// Which way a chromatic note between two degrees is spelled.
///
/// Sharp spelling names it after the degree below, flat spelling after the
/// degree above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

/// Per-call naming options. Not persisted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub notation: Notation,
    pub spelling: Spelling,
    /// Letter that scale degree 1 is named after in alphabetic notation.
    pub base: Letter,
}

impl NamingConfig {
    /// Numeric degrees, sharp spelling, base C.
    pub fn numeric() -> Self {
        Self::default()
    }

    /// Letter names, sharp spelling, base C.
    pub fn alphabet() -> Self {
        NamingConfig {
            notation: Notation::Alphabet,
            ..Self::default()
        }
    }

    pub fn with_spelling(mut self, spelling: Spelling) -> Self {
        self.spelling = spelling;
        self
    }

    pub fn with_base(mut self, base: Letter) -> Self {
        self.base = base;
        self
    }

    /// The same options with numeric notation. Marker decisions are always
    /// taken on the numeric form of a name.
    pub fn as_numeric(self) -> Self {
        NamingConfig {
            notation: Notation::Numeric,
            ..self
        }
    }

    pub fn is_alphabet(&self) -> bool {
        self.notation == Notation::Alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_parsing() {
        assert_eq!("C".parse::<Letter>(), Ok(Letter::C));
        assert_eq!(" G ".parse::<Letter>(), Ok(Letter::G));
        assert_eq!("B".parse::<Letter>(), Ok(Letter::B));
    }

    #[test]
    fn test_letter_parsing_rejects_unknown_names() {
        for bad in ["H", "c", "C#", "", "Do"] {
            assert_eq!(
                bad.parse::<Letter>(),
                Err(FretboardError::InvalidBaseNote {
                    name: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn test_letter_index_matches_order() {
        for (i, letter) in Letter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn test_default_config() {
        let config = NamingConfig::default();
        assert!(!config.is_alphabet());
        assert_eq!(config.spelling, Spelling::Sharp);
        assert_eq!(config.base, Letter::C);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: NamingConfig =
            serde_json::from_str(r#"{ "notation": "alphabet", "base": "D" }"#).unwrap();
        assert_eq!(config, NamingConfig::alphabet().with_base(Letter::D));
        assert_eq!(config.spelling, Spelling::Sharp);
    }

    #[test]
    fn test_json_rejects_unknown_base() {
        let result = serde_json::from_str::<NamingConfig>(r#"{ "base": "H" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_as_numeric_keeps_spelling_and_base() {
        let config = NamingConfig::alphabet()
            .with_spelling(Spelling::Flat)
            .with_base(Letter::E)
            .as_numeric();
        assert_eq!(config.notation, Notation::Numeric);
        assert_eq!(config.spelling, Spelling::Flat);
        assert_eq!(config.base, Letter::E);
    }
}
