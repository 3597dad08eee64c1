//! # Board Generator Module
//!
//! Builds the full fretboard one fret at a time. Fret 0 is the tuning
//! itself; every following fret is the previous one transposed up a
//! semitone. Each fret record carries the string names, the marker for each
//! string and the inlay label derived from the remark channel.
//!
//! ## Features
//! - Validated string tunings with a reference six-string tuning
//! - Per-string names in numeric or alphabetic notation
//! - Marker selection through a configurable [`MarkerPolicy`]
//! - Single-letter inlay labels for reference positions along the neck

use crate::config::MAX_FRET_COUNT;
use crate::error::{FretboardError, Result};
use crate::naming::NamingConfig;
use crate::pitch::{
    self, FretNotation, NoteNumber, PITCH_CLASS_COUNT, REMARK_CHANNEL, STRING_COUNT,
};
use crate::policy::{Marker, MarkerPolicy};
use serde::{Deserialize, Serialize};

/// Open pitch classes of the reference instrument, remark channel last.
pub const REFERENCE_TUNING: FretNotation = [5, 12, 8, 3, 10, 5, 0];

/// Open pitch classes for six strings plus the remark channel.
///
/// Playable strings must hold a pitch class in 1..=12. The remark channel
/// also accepts 0, which is how the reference tuning marks the nut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FretNotation", into = "FretNotation")]
pub struct StringTuning {
    notes: FretNotation,
}

impl StringTuning {
    pub fn new(notes: FretNotation) -> Result<Self> {
        for &note in &notes[..STRING_COUNT] {
            pitch::check_pitch(note)?;
        }
        let remark = notes[REMARK_CHANNEL];
        if remark > PITCH_CLASS_COUNT {
            return Err(FretboardError::InvalidPitchClass { value: remark });
        }
        Ok(StringTuning { notes })
    }

    /// The `[5, 12, 8, 3, 10, 5, 0]` tuning.
    pub fn reference() -> Self {
        StringTuning {
            notes: REFERENCE_TUNING,
        }
    }

    pub fn notes(&self) -> FretNotation {
        self.notes
    }
}

impl Default for StringTuning {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<FretNotation> for StringTuning {
    type Error = FretboardError;

    fn try_from(notes: FretNotation) -> Result<Self> {
        StringTuning::new(notes)
    }
}

impl From<StringTuning> for FretNotation {
    fn from(tuning: StringTuning) -> Self {
        tuning.notes
    }
}

/// Everything the renderer needs for one fret column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FretRecord {
    /// 0 is the nut.
    pub fret_index: usize,
    /// Pitch classes for the six strings and the remark channel.
    pub notes: FretNotation,
    /// Display names of the six playable strings.
    pub string_names: [String; STRING_COUNT],
    pub markers: [Marker; STRING_COUNT],
    /// A single letter, or empty when this fret has no inlay mark.
    pub inlay_label: String,
}

impl FretRecord {
    /// Whether each string shows a marker at this fret.
    pub fn marker_flags(&self) -> [bool; STRING_COUNT] {
        self.markers.map(Marker::is_visible)
    }

    pub fn has_inlay(&self) -> bool {
        !self.inlay_label.is_empty()
    }

    pub fn remark(&self) -> NoteNumber {
        self.notes[REMARK_CHANNEL]
    }
}

/// The ordered fret records for one render request. Built once, never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    frets: Vec<FretRecord>,
}

impl Board {
    pub fn frets(&self) -> &[FretRecord] {
        &self.frets
    }

    pub fn len(&self) -> usize {
        self.frets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frets.is_empty()
    }

    pub fn get(&self, fret_index: usize) -> Option<&FretRecord> {
        self.frets.get(fret_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FretRecord> {
        self.frets.iter()
    }

    /// The inlay label of every fret, in order.
    pub fn inlay_labels(&self) -> Vec<&str> {
        self.frets.iter().map(|fret| fret.inlay_label.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a FretRecord;
    type IntoIter = std::slice::Iter<'a, FretRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.frets.iter()
    }
}

/// Maps the remark channel into the mirrored pitch space used for inlay
/// labels: `((13 - r) mod 12) + 1`. The labels advance in the opposite
/// direction to the playable strings.
pub fn remark_pitch(remark: NoteNumber) -> NoteNumber {
    ((PITCH_CLASS_COUNT + 1 - remark % PITCH_CLASS_COUNT) % PITCH_CLASS_COUNT) + 1
}

/// Inlay label for a remark channel value.
///
/// Always named in alphabetic notation with the default sharp spelling and
/// base C. Only a bare letter counts as a label; a name with an accidental
/// gives an empty label.
pub fn inlay_label(remark: NoteNumber) -> Result<String> {
    let name = pitch::name_of(remark_pitch(remark), &NamingConfig::alphabet())?;
    if name.chars().count() == 1 {
        Ok(name)
    } else {
        Ok(String::new())
    }
}

fn build_record(
    fret_index: usize,
    notes: FretNotation,
    config: &NamingConfig,
    policy: &MarkerPolicy,
) -> Result<FretRecord> {
    let numeric = config.as_numeric();
    let mut string_names: [String; STRING_COUNT] = Default::default();
    let mut markers = [Marker::Hidden; STRING_COUNT];

    for (string, &note) in notes[..STRING_COUNT].iter().enumerate() {
        let degree_name = pitch::name_of(note, &numeric)?;
        markers[string] = policy.classify(&degree_name);
        string_names[string] = if config.is_alphabet() {
            pitch::name_of(note, config)?
        } else {
            degree_name
        };
    }

    Ok(FretRecord {
        fret_index,
        notes,
        string_names,
        markers,
        inlay_label: inlay_label(notes[REMARK_CHANNEL])?,
    })
}

/// Generates the board for a tuning.
///
/// # Arguments
/// * `tuning` - Open pitch classes, used verbatim as fret 0
/// * `fret_count` - Number of fret records to produce, nut included
/// * `config` - How string names are rendered
/// * `policy` - Which numeric degrees get a marker
///
/// # Returns
/// * `Ok(Board)` - Exactly `fret_count` records
/// * `Err(e)` - A naming failure; no partial board is returned
pub fn generate_board(
    tuning: &StringTuning,
    fret_count: usize,
    config: &NamingConfig,
    policy: &MarkerPolicy,
) -> Result<Board> {
    let mut frets = Vec::with_capacity(fret_count.min(MAX_FRET_COUNT));
    let mut notes = tuning.notes();

    for fret_index in 0..fret_count {
        frets.push(build_record(fret_index, notes, config, policy)?);
        notes = pitch::transpose_fret(notes);
    }

    tracing::debug!(
        fret_count,
        notation = ?config.notation,
        spelling = ?config.spelling,
        base = %config.base,
        "generated fretboard"
    );

    Ok(Board { frets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{Letter, Spelling};

    fn reference_board(fret_count: usize, config: &NamingConfig) -> Board {
        generate_board(
            &StringTuning::reference(),
            fret_count,
            config,
            &MarkerPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_tuning_validation() {
        assert!(StringTuning::new([1, 2, 3, 4, 5, 6, 0]).is_ok());
        assert!(StringTuning::new([1, 2, 3, 4, 5, 6, 12]).is_ok());
        assert_eq!(
            StringTuning::new([0, 2, 3, 4, 5, 6, 0]),
            Err(FretboardError::InvalidPitchClass { value: 0 })
        );
        assert_eq!(
            StringTuning::new([1, 2, 3, 4, 5, 13, 0]),
            Err(FretboardError::InvalidPitchClass { value: 13 })
        );
        assert_eq!(
            StringTuning::new([1, 2, 3, 4, 5, 6, 13]),
            Err(FretboardError::InvalidPitchClass { value: 13 })
        );
    }

    #[test]
    fn test_board_length() {
        for count in [0, 1, 12, 16, 23] {
            assert_eq!(reference_board(count, &NamingConfig::default()).len(), count);
        }
    }

    #[test]
    fn test_first_fret_is_the_tuning() {
        let board = reference_board(16, &NamingConfig::default());
        let nut = board.get(0).unwrap();
        assert_eq!(nut.fret_index, 0);
        assert_eq!(nut.notes, REFERENCE_TUNING);
        assert_eq!(nut.string_names, ["3", "7", "5", "2", "6", "3"]);
    }

    #[test]
    fn test_reference_nut_inlay_label() {
        // Remark 0 mirrors to pitch 2, which names as "C#": not a bare
        // letter, so the nut has no inlay label.
        assert_eq!(remark_pitch(0), 2);
        assert_eq!(pitch::name_of(2, &NamingConfig::alphabet()).unwrap(), "C#");
        let board = reference_board(16, &NamingConfig::default());
        assert_eq!(board.get(0).unwrap().inlay_label, "");
    }

    #[test]
    fn test_remark_pitch_mirrors_rotation() {
        assert_eq!(remark_pitch(1), 1);
        assert_eq!(remark_pitch(2), 12);
        assert_eq!(remark_pitch(7), 7);
        assert_eq!(remark_pitch(12), 2);
    }

    #[test]
    fn test_inlay_labels_along_the_neck() {
        let board = reference_board(16, &NamingConfig::default());
        assert_eq!(
            board.inlay_labels(),
            ["", "C", "B", "", "A", "", "G", "", "F", "E", "", "D", "", "C", "B", ""]
        );
    }

    #[test]
    fn test_inlay_labels_ignore_naming_config() {
        let numeric = reference_board(16, &NamingConfig::default());
        let custom = reference_board(
            16,
            &NamingConfig::alphabet()
                .with_spelling(Spelling::Flat)
                .with_base(Letter::E),
        );
        assert_eq!(numeric.inlay_labels(), custom.inlay_labels());
    }

    #[test]
    fn test_markers_follow_numeric_names() {
        let board = reference_board(23, &NamingConfig::default());
        let policy = MarkerPolicy::default();
        for fret in &board {
            for (name, flag) in fret.string_names.iter().zip(fret.marker_flags()) {
                assert_eq!(flag, policy.is_visible(name));
            }
        }
    }

    #[test]
    fn test_nut_markers() {
        let board = reference_board(1, &NamingConfig::default());
        let nut = board.get(0).unwrap();
        assert_eq!(
            nut.markers,
            [
                Marker::Primary,
                Marker::Hidden,
                Marker::Primary,
                Marker::Dimmed,
                Marker::Dimmed,
                Marker::Primary,
            ]
        );
        assert_eq!(nut.marker_flags(), [true, false, true, true, true, true]);
    }

    #[test]
    fn test_alphabet_board_keeps_numeric_markers() {
        let numeric = reference_board(16, &NamingConfig::default());
        let alphabet = reference_board(16, &NamingConfig::alphabet());
        assert_eq!(
            alphabet.get(0).unwrap().string_names,
            ["E", "B", "G", "D", "A", "E"]
        );
        for (a, n) in alphabet.iter().zip(numeric.iter()) {
            assert_eq!(a.markers, n.markers);
        }
    }

    #[test]
    fn test_twelfth_fret_repeats_the_nut() {
        let board = reference_board(13, &NamingConfig::default());
        let nut = board.get(0).unwrap();
        let octave = board.get(12).unwrap();
        assert_eq!(nut.string_names, octave.string_names);
        assert_eq!(nut.markers, octave.markers);
        assert_eq!(octave.remark(), 12);
    }

    #[test]
    fn test_regeneration_is_identical() {
        let config = NamingConfig::alphabet().with_spelling(Spelling::Flat);
        assert_eq!(reference_board(23, &config), reference_board(23, &config));
    }

    #[test]
    fn test_tuning_json_is_validated() {
        let tuning: StringTuning = serde_json::from_str("[5, 12, 8, 3, 10, 5, 0]").unwrap();
        assert_eq!(tuning, StringTuning::reference());
        assert!(serde_json::from_str::<StringTuning>("[5, 12, 8, 3, 10, 0, 0]").is_err());
    }
}
