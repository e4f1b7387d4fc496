// intervalle-core/src/lib.rs

//! The core logic for the Intervalle fretboard interval calculator.
//! This crate maps fretboard positions to pitches, computes intervals
//! between two positions and locates octave echoes of a note. It is
//! completely headless and contains no GUI code.

pub mod fretboard;
pub mod interval;
pub mod selection;

pub use fretboard::{
    compute_interval, pitch_of, positions_for_pitch, positions_for_pitch_class, Coordinate,
    Fretboard, Pitch,
};
pub use interval::{IntervalMode, IntervalResult};
pub use selection::{Selection, SelectionPhase};
