//! # Pitch Engine Module
//!
//! Pure functions over pitch classes numbered 1 to 12, where 1 is the
//! tuning's own reference tone rather than concert C.
//!
//! ## Features
//! - Semitone transposition with wrap-around (12 -> 1)
//! - Element-wise transposition of a whole fret vector
//! - Scale-degree spelling with sharp or flat accidentals
//! - Numeric ("4#") and alphabetic ("F#") naming relative to a base letter

use crate::error::{FretboardError, Result};
use crate::naming::{Letter, NamingConfig, Notation, Spelling};
use once_cell::sync::Lazy;
use std::fmt;

/// Number of pitch classes in one octave.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// Length of a fret vector: six playable strings plus the remark channel.
pub const FRET_WIDTH: usize = 7;

/// Number of playable strings in a fret vector.
pub const STRING_COUNT: usize = 6;

/// Index of the synthetic remark channel inside a fret vector.
pub const REMARK_CHANNEL: usize = 6;

/// A pitch class number. Values in 1..=12 are nameable.
pub type NoteNumber = u8;

/// The pitch classes sounding at one fret, one per string plus the remark
/// channel.
pub type FretNotation = [NoteNumber; FRET_WIDTH];

/// Diatonic position of each pitch class 1..=12, in half-degree units.
///
/// Even entries land on a major-scale degree (entry / 2), odd entries sit
/// between two degrees. The step pattern is W-W-H-W-W-W-H from degree 1,
/// i.e. positions 1, 1.5, 2, 2.5, 3, 4, 4.5, 5, 5.5, 6, 6.5, 7.
const DIATONIC_POSITIONS: [u8; PITCH_CLASS_COUNT as usize] =
    [2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14];

/// The seven letter sequences, each rotated to start at its base letter.
/// Indexed by [`Letter::index`].
static ROTATIONS: Lazy<[[Letter; 7]; 7]> = Lazy::new(|| {
    let mut rotations = [[Letter::C; 7]; 7];
    for (base, rotation) in rotations.iter_mut().enumerate() {
        let letters = Letter::ALL;
        let (head, tail) = letters.split_at(base);
        for (slot, letter) in rotation.iter_mut().zip(tail.iter().chain(head)) {
            *slot = *letter;
        }
    }
    rotations
});

/// Chromatic modifier attached to a scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn as_str(self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A pitch class resolved to a scale degree (1..=7) and an optional
/// accidental. Displays in numeric form, e.g. `5#` or `3`.
///
/// Only [`spell`] builds one, so `degree` is always in 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpelledDegree {
    degree: u8,
    accidental: Option<Accidental>,
}

impl SpelledDegree {
    pub fn degree(&self) -> u8 {
        self.degree
    }

    pub fn accidental(&self) -> Option<Accidental> {
        self.accidental
    }

    /// Letter for this degree when degree 1 is named `base`.
    pub fn letter(&self, base: Letter) -> Letter {
        ROTATIONS[base.index()][(self.degree - 1) as usize]
    }

    pub fn is_diatonic(&self) -> bool {
        self.accidental.is_none()
    }

    fn accidental_str(&self) -> &'static str {
        self.accidental.map_or("", Accidental::as_str)
    }
}

impl fmt::Display for SpelledDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degree, self.accidental_str())
    }
}

/// Advances a pitch class by one semitone.
///
/// Total over every input: the result is always `(pitch mod 12) + 1`, which
/// lies in 1..=12. Applying it twelve times to a value in 1..=12 returns the
/// original value.
pub fn transpose(pitch: NoteNumber) -> NoteNumber {
    (pitch % PITCH_CLASS_COUNT) + 1
}

/// Applies [`transpose`] to every entry of a fret vector, giving the next
/// fret along the neck.
pub fn transpose_fret(fret: FretNotation) -> FretNotation {
    fret.map(transpose)
}

/// Fails with `InvalidPitchClass` unless `pitch` is in 1..=12.
pub fn check_pitch(pitch: NoteNumber) -> Result<NoteNumber> {
    if (1..=PITCH_CLASS_COUNT).contains(&pitch) {
        Ok(pitch)
    } else {
        Err(FretboardError::InvalidPitchClass { value: pitch })
    }
}

/// Resolves a pitch class to its scale degree and accidental.
///
/// Sharp spelling rounds a chromatic pitch down to the degree below, flat
/// spelling rounds it up to the degree above. Diatonic pitches carry no
/// accidental under either spelling.
///
/// # Arguments
/// * `pitch` - Pitch class in 1..=12
/// * `spelling` - Sharp or flat spelling for chromatic pitches
///
/// # Returns
/// * `Ok(SpelledDegree)` - The degree (1..=7) and accidental
/// * `Err(InvalidPitchClass)` - `pitch` is outside 1..=12
pub fn spell(pitch: NoteNumber, spelling: Spelling) -> Result<SpelledDegree> {
    let position = DIATONIC_POSITIONS[(check_pitch(pitch)? - 1) as usize];
    let chromatic = position % 2 == 1;

    let (degree, accidental) = match spelling {
        Spelling::Sharp => (position / 2, Accidental::Sharp),
        Spelling::Flat => ((position + 1) / 2, Accidental::Flat),
    };

    Ok(SpelledDegree {
        degree,
        accidental: chromatic.then_some(accidental),
    })
}

/// Converts a pitch class to its display name.
///
/// # Arguments
/// * `pitch` - Pitch class in 1..=12
/// * `config` - Notation, spelling and base letter
///
/// # Returns
/// * `Ok(name)` - e.g. `"4#"` in numeric notation or `"F#"` in alphabetic
///   notation with base C
/// * `Err(InvalidPitchClass)` - `pitch` is outside 1..=12
pub fn name_of(pitch: NoteNumber, config: &NamingConfig) -> Result<String> {
    let spelled = spell(pitch, config.spelling)?;
    let name = match config.notation {
        Notation::Numeric => spelled.to_string(),
        Notation::Alphabet => format!(
            "{}{}",
            spelled.letter(config.base),
            spelled.accidental_str()
        ),
    };
    Ok(name)
}
