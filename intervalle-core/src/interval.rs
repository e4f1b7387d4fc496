//! # Interval Module
//!
//! Computes the interval between two pitches and renders it the way it is
//! taught on the fretboard: ascending intervals are counted up in tones,
//! descending intervals are read through the rule of the octave
//! (`6 - distance down = interval`).
//!
//! All arithmetic is done on semitone counts. Tone values are only produced
//! when formatting, so a half tone is never rounded away.

use serde::{Deserialize, Serialize};

/// Interval class names, indexed by semitone count within one octave.
pub const INTERVAL_NAMES: [&str; 13] = [
    "Unisson",          // 0
    "Seconde mineure",  // 1
    "Seconde majeure",  // 2
    "Tierce mineure",   // 3
    "Tierce majeure",   // 4
    "Quarte juste",     // 5
    "Triton",           // 6
    "Quinte juste",     // 7
    "Sixte mineure",    // 8
    "Sixte majeure",    // 9
    "Septième mineure", // 10
    "Septième majeure", // 11
    "Octave",           // 12
];

/// Whole tones in one octave.
pub const OCTAVE_TONES: u32 = 6;

/// Separator between whole tones and the half tone in formatted output.
pub const DECIMAL_SEPARATOR: char = ',';

/// Formula shown when both notes are the same pitch.
pub const UNISON_FORMULA: &str = "same note";

/// Formula shown for a descent by a whole number of octaves.
pub const OCTAVE_FORMULA: &str = "Octave";

const OCTAVE_SEMITONES: u64 = OCTAVE_TONES as u64 * 2;

/// Direction of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalMode {
    Ascending,
    Descending,
    Unison,
}

/// The structured outcome of an interval calculation.
///
/// `tone_distance` is always the raw absolute distance, also for descending
/// intervals. The octave complement only shows up in `interval_name` and
/// `formula`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalResult {
    /// Signed distance in semitones, negative when descending
    pub semitone_distance: i64,
    /// Absolute distance in tones (may end in .5)
    pub tone_distance: f64,
    pub mode: IntervalMode,
    pub interval_name: &'static str,
    /// Pedagogical formula, e.g. "+ 3,5" or "6 - 2,5 = 3,5"
    pub formula: String,
}

impl IntervalResult {
    pub fn is_descending(&self) -> bool {
        self.mode == IntervalMode::Descending
    }

    /// The tone count subtracted from the octave in a descending formula.
    ///
    /// `None` for ascending and unison results, and for descents by whole
    /// octaves where nothing is subtracted.
    pub fn descending_operand(&self) -> Option<String> {
        if !self.is_descending() {
            return None;
        }
        match self.semitone_distance.unsigned_abs() % OCTAVE_SEMITONES {
            0 => None,
            effective => Some(format_tones(effective)),
        }
    }
}

/// Calculates the interval spanning `diff` semitones from the root.
///
/// The calculation is total: any signed distance produces a result.
///
/// # Arguments
/// * `diff` - Target pitch minus root pitch, negative when descending
///
/// # Returns
/// * `IntervalResult` - Distance, direction, interval name and formula
pub fn interval_for_distance(diff: i64) -> IntervalResult {
    if diff == 0 {
        return IntervalResult {
            semitone_distance: 0,
            tone_distance: 0.0,
            mode: IntervalMode::Unison,
            interval_name: INTERVAL_NAMES[0],
            formula: UNISON_FORMULA.to_string(),
        };
    }

    let abs_diff = diff.unsigned_abs();
    let tone_distance = abs_diff as f64 / 2.0;

    if diff > 0 {
        // A whole number of octaves up is an octave, never a unison.
        let name_index = match abs_diff % OCTAVE_SEMITONES {
            0 => OCTAVE_SEMITONES,
            index => index,
        };
        IntervalResult {
            semitone_distance: diff,
            tone_distance,
            mode: IntervalMode::Ascending,
            interval_name: INTERVAL_NAMES[name_index as usize],
            formula: format!("+ {}", format_tones(abs_diff)),
        }
    } else {
        // Rule of the octave: the interval is what the descent leaves of 6 tones.
        let effective_down = abs_diff % OCTAVE_SEMITONES;
        let result_semitones = OCTAVE_SEMITONES - effective_down;
        let formula = if effective_down == 0 {
            OCTAVE_FORMULA.to_string()
        } else {
            format!(
                "{} - {} = {}",
                OCTAVE_TONES,
                format_tones(effective_down),
                format_tones(result_semitones)
            )
        };
        IntervalResult {
            semitone_distance: diff,
            tone_distance,
            mode: IntervalMode::Descending,
            interval_name: INTERVAL_NAMES[result_semitones as usize],
            formula,
        }
    }
}

/// Formats a semitone count as tones: `"3"` for 6, `"3,5"` for 7.
pub fn format_tones(semitones: u64) -> String {
    let whole = semitones / 2;
    if semitones % 2 == 0 {
        whole.to_string()
    } else {
        format!("{}{}5", whole, DECIMAL_SEPARATOR)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fretboard::Pitch;
    use pretty_assertions::assert_eq;

    fn between(root: Pitch, target: Pitch) -> IntervalResult {
        interval_for_distance(target - root)
    }

    #[test]
    fn test_format_tones() {
        let examples = [(0, "0"), (1, "0,5"), (2, "1"), (7, "3,5"), (12, "6"), (25, "12,5")];
        for (semitones, expected) in examples {
            assert_eq!(format_tones(semitones), expected);
        }
    }

    #[test]
    fn test_unison() {
        assert_eq!(
            between(17, 17),
            IntervalResult {
                semitone_distance: 0,
                tone_distance: 0.0,
                mode: IntervalMode::Unison,
                interval_name: "Unisson",
                formula: "same note".to_string(),
            }
        );
    }

    #[test]
    fn test_ascending_fifth() {
        assert_eq!(
            between(0, 7),
            IntervalResult {
                semitone_distance: 7,
                tone_distance: 3.5,
                mode: IntervalMode::Ascending,
                interval_name: "Quinte juste",
                formula: "+ 3,5".to_string(),
            }
        );
    }

    #[test]
    fn test_ascending_octaves_are_never_unisons() {
        for octaves in 1..=3 {
            let result = between(5, 5 + 12 * octaves);
            assert_eq!(result.interval_name, "Octave");
            assert_eq!(result.mode, IntervalMode::Ascending);
        }
        assert_eq!(between(0, 12).formula, "+ 6");
        assert_eq!(between(0, 24).formula, "+ 12");
    }

    #[test]
    fn test_ascending_compound_intervals_reduce_to_octave() {
        let result = between(0, 16);
        assert_eq!(result.interval_name, "Tierce majeure");
        assert_eq!(result.formula, "+ 8");
        assert_eq!(result.tone_distance, 8.0);
    }

    #[test]
    fn test_descending_fourth_reads_as_fifth() {
        assert_eq!(
            between(12, 7),
            IntervalResult {
                semitone_distance: -5,
                tone_distance: 2.5,
                mode: IntervalMode::Descending,
                interval_name: "Quinte juste",
                formula: "6 - 2,5 = 3,5".to_string(),
            }
        );
    }

    #[test]
    fn test_descending_half_step() {
        let result = between(1, 0);
        assert_eq!(result.interval_name, "Septième majeure");
        assert_eq!(result.formula, "6 - 0,5 = 5,5");
    }

    #[test]
    fn test_descending_octaves() {
        for octaves in 1..=3 {
            let result = between(36, 36 - 12 * octaves);
            assert_eq!(result.formula, "Octave");
            assert_eq!(result.interval_name, "Octave");
            assert_eq!(result.tone_distance, 6.0 * octaves as f64);
            assert_eq!(result.descending_operand(), None);
        }
    }

    #[test]
    fn test_descending_keeps_raw_tone_distance() {
        // 17 semitones down: the name comes from 5 semitones, the distance does not
        let result = between(29, 12);
        assert_eq!(result.semitone_distance, -17);
        assert_eq!(result.tone_distance, 8.5);
        assert_eq!(result.formula, "6 - 2,5 = 3,5");
        assert_eq!(result.interval_name, "Quinte juste");
    }

    #[test]
    fn test_descending_operand() {
        assert_eq!(between(12, 7).descending_operand(), Some("2,5".to_string()));
        assert_eq!(between(12, 8).descending_operand(), Some("2".to_string()));
        assert_eq!(between(7, 12).descending_operand(), None);
        assert_eq!(between(7, 7).descending_operand(), None);
    }

    #[test]
    fn test_every_name_is_reachable() {
        for semitones in 1..=12 {
            assert_eq!(
                between(0, semitones).interval_name,
                INTERVAL_NAMES[semitones as usize]
            );
            assert_eq!(
                between(12, 12 - semitones).interval_name,
                INTERVAL_NAMES[12 - (semitones as usize % 12)]
            );
        }
    }

    #[test]
    fn test_extreme_distances_are_total() {
        // 2^63 - 1 leaves 7 semitones above whole octaves, 2^63 leaves 8
        let up = interval_for_distance(i64::MAX);
        assert_eq!(up.interval_name, "Quinte juste");
        assert_eq!(up.formula, "+ 4611686018427387903,5");

        let down = interval_for_distance(i64::MIN);
        assert_eq!(down.semitone_distance, i64::MIN);
        assert_eq!(down.interval_name, "Tierce majeure");
        assert_eq!(down.formula, "6 - 4 = 2");
        assert_eq!(down.descending_operand(), Some("4".to_string()));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(between(12, 7)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "semitone_distance": -5,
                "tone_distance": 2.5,
                "mode": "DESCENDING",
                "interval_name": "Quinte juste",
                "formula": "6 - 2,5 = 3,5",
            })
        );
    }
}
