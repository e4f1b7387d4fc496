//! # Fretboard Module
//!
//! This module maps fretboard coordinates to absolute pitches and back.
//! A pitch is a plain semitone count above the open lowest course, so the
//! whole instrument is described by one offset per course and a fret count.
//!
//! ## Features
//! - Standard 6-course layout (E A D G B e) over frets 0 to 12
//! - Coordinate to pitch conversion
//! - Every coordinate sounding a given pitch
//! - Every coordinate sharing a pitch class (octave echoes)

use anyhow::bail;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::interval::{self, IntervalResult};

/// Absolute semitone value relative to the open lowest course.
///
/// Wider than a fret so any fret on any course maps to a pitch, and the
/// distance between any two such pitches, without overflow.
pub type Pitch = i64;

/// Number of courses on the instrument.
pub const COURSE_COUNT: usize = 6;

/// Open-course offsets for standard tuning (E2, A2, D3, G3, B3, E4), relative to low E.
pub const STANDARD_OFFSETS: [i32; COURSE_COUNT] = [0, 5, 10, 15, 19, 24];

/// Number of playable frets, the open string included (0 to 12 inclusive).
pub const FRET_COUNT: i32 = 13;

/// Display names of the courses, lowest first.
pub const COURSE_NAMES: [&str; COURSE_COUNT] = ["E", "A", "D", "G", "B", "e"];

const OCTAVE: Pitch = 12;

/// The reference layout, built once and shared read-only by the free functions below.
static STANDARD: Lazy<Fretboard> = Lazy::new(Fretboard::standard);

/// A single playable position: one course, one fret.
///
/// `fret` is signed on purpose. Out-of-range values are not rejected
/// anywhere in the engine, they simply produce out-of-range pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Course index, 0 is the lowest-pitched course
    pub course: usize,
    /// Fret number, 0 is the open course
    pub fret: i32,
}

impl Coordinate {
    pub fn new(course: usize, fret: i32) -> Self {
        Self { course, fret }
    }
}

/// Static configuration of the instrument: per-course tuning and fret count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fretboard {
    offsets: [i32; COURSE_COUNT],
    fret_count: i32,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::standard()
    }
}

impl Fretboard {
    /// Builds a layout from per-course offsets and a fret count.
    ///
    /// # Arguments
    /// * `offsets` - Semitones above the lowest open course, one per course
    /// * `fret_count` - Number of playable frets including the open string
    ///
    /// # Returns
    /// * `Ok(Fretboard)` - The validated layout
    /// * `Err` - `fret_count` is below 1 or the offsets decrease somewhere
    pub fn new(offsets: [i32; COURSE_COUNT], fret_count: i32) -> anyhow::Result<Self> {
        if fret_count < 1 {
            eprintln!("[FRETBOARD] Rejected fret count {}", fret_count);
            bail!("fret count must be at least 1, got {}", fret_count);
        }
        if let Some(course) = offsets.windows(2).position(|pair| pair[1] < pair[0]) {
            eprintln!("[FRETBOARD] Rejected tuning {:?}", offsets);
            bail!(
                "course {} is tuned below course {} ({} < {})",
                course + 1,
                course,
                offsets[course + 1],
                offsets[course]
            );
        }
        Ok(Self {
            offsets,
            fret_count,
        })
    }

    /// The reference layout: standard tuning over frets 0 to 12.
    pub fn standard() -> Self {
        Self {
            offsets: STANDARD_OFFSETS,
            fret_count: FRET_COUNT,
        }
    }

    pub fn offsets(&self) -> &[i32; COURSE_COUNT] {
        &self.offsets
    }

    pub fn fret_count(&self) -> i32 {
        self.fret_count
    }

    /// Last playable fret.
    pub fn max_fret(&self) -> i32 {
        self.fret_count - 1
    }

    /// Display name of a course.
    ///
    /// # Panics
    /// If `course >= COURSE_COUNT`.
    pub fn course_name(&self, course: usize) -> &'static str {
        COURSE_NAMES[course]
    }

    /// Every valid coordinate, ordered by course and then by fret.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..COURSE_COUNT).flat_map(move |course| {
            (0..self.fret_count).map(move |fret| Coordinate::new(course, fret))
        })
    }

    /// Absolute pitch of a coordinate.
    ///
    /// The fret is trusted as given; a negative or too-high fret yields a
    /// pitch outside the playable range without complaint. Every `i32` fret
    /// is representable, so this never overflows.
    ///
    /// # Panics
    /// If `coord.course >= COURSE_COUNT`. The course index is a caller precondition.
    pub fn pitch_of(&self, coord: Coordinate) -> Pitch {
        Pitch::from(self.offsets[coord.course]) + Pitch::from(coord.fret)
    }

    /// All coordinates sounding exactly `pitch`, ordered by course.
    ///
    /// Empty when the pitch is out of reach on every course.
    pub fn positions_for_pitch(&self, pitch: Pitch) -> Vec<Coordinate> {
        let frets = 0..Pitch::from(self.fret_count);
        self.offsets
            .iter()
            .enumerate()
            .filter_map(|(course, &offset)| {
                // Saturates only far outside the neck
                let fret = pitch.saturating_sub(Pitch::from(offset));
                frets
                    .contains(&fret)
                    .then(|| Coordinate::new(course, fret as i32))
            })
            .collect()
    }

    /// All coordinates whose pitch shares the pitch class of `pitch`.
    ///
    /// Ordered by course, then by ascending fret within a course. This is
    /// what surfaces every octave echo of a note across the neck.
    pub fn positions_for_pitch_class(&self, pitch: Pitch) -> Vec<Coordinate> {
        let target_class = pitch.rem_euclid(OCTAVE);
        let mut positions = Vec::new();

        for (course, &offset) in self.offsets.iter().enumerate() {
            let first_fret = (target_class - Pitch::from(offset)).rem_euclid(OCTAVE) as i32;
            positions.extend(
                (first_fret..self.fret_count)
                    .step_by(OCTAVE as usize)
                    .map(|fret| Coordinate::new(course, fret)),
            );
        }
        positions
    }

    /// Interval from `root` to `target` on this layout.
    pub fn compute_interval(&self, root: Coordinate, target: Coordinate) -> IntervalResult {
        interval::interval_for_distance(self.pitch_of(target) - self.pitch_of(root))
    }
}

/// The process-wide reference layout.
pub fn standard() -> &'static Fretboard {
    &STANDARD
}

/// Pitch of a coordinate on the reference layout.
pub fn pitch_of(coord: Coordinate) -> Pitch {
    STANDARD.pitch_of(coord)
}

/// Coordinates sounding `pitch` on the reference layout.
pub fn positions_for_pitch(pitch: Pitch) -> Vec<Coordinate> {
    STANDARD.positions_for_pitch(pitch)
}

/// Coordinates sharing the pitch class of `pitch` on the reference layout.
pub fn positions_for_pitch_class(pitch: Pitch) -> Vec<Coordinate> {
    STANDARD.positions_for_pitch_class(pitch)
}

/// Interval between two coordinates on the reference layout.
pub fn compute_interval(root: Coordinate, target: Coordinate) -> IntervalResult {
    STANDARD.compute_interval(root, target)
}
