//! # Selection Module
//!
//! Tracks the root and target picked on the fretboard and derives what the
//! presentation layer needs from them: the interval and, for descending
//! intervals, the octave echoes of the root.

use crate::{
    fretboard::{Coordinate, Fretboard},
    interval::IntervalResult,
};

/// What the user is expected to pick next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected yet
    AwaitingRoot,
    /// Root selected, no target yet
    AwaitingTarget,
    /// Both notes selected, an interval is available
    Complete,
}

/// The root/target pair currently picked on the fretboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    root: Option<Coordinate>,
    target: Option<Coordinate>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<Coordinate> {
        self.root
    }

    pub fn target(&self) -> Option<Coordinate> {
        self.target
    }

    /// Applies a click on `coord`.
    ///
    /// - With no root, `coord` becomes the root.
    /// - Clicking the root again clears the whole selection.
    /// - Otherwise `coord` becomes the target, replacing any previous one.
    pub fn select(&mut self, coord: Coordinate) {
        match self.root {
            None => {
                eprintln!("[SELECTION] Root set to {:?}", coord);
                self.root = Some(coord);
            }
            Some(root) if root == coord => {
                eprintln!("[SELECTION] Root clicked again - clearing selection");
                self.reset();
            }
            Some(_) => {
                eprintln!("[SELECTION] Target set to {:?}", coord);
                self.target = Some(coord);
            }
        }
    }

    pub fn reset(&mut self) {
        self.root = None;
        self.target = None;
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.root, self.target) {
            (None, _) => SelectionPhase::AwaitingRoot,
            (Some(_), None) => SelectionPhase::AwaitingTarget,
            (Some(_), Some(_)) => SelectionPhase::Complete,
        }
    }

    /// The interval from root to target, once both are picked.
    pub fn interval(&self, fretboard: &Fretboard) -> Option<IntervalResult> {
        match (self.root, self.target) {
            (Some(root), Some(target)) => Some(fretboard.compute_interval(root, target)),
            _ => None,
        }
    }

    /// Every position sharing the root's pitch class, shown only while the
    /// interval is descending. Empty otherwise.
    pub fn ghost_notes(&self, fretboard: &Fretboard) -> Vec<Coordinate> {
        match (self.root, self.interval(fretboard)) {
            (Some(root), Some(result)) if result.is_descending() => {
                fretboard.positions_for_pitch_class(fretboard.pitch_of(root))
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval::IntervalMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_click_sets_root() {
        let mut selection = Selection::new();
        assert_eq!(selection.phase(), SelectionPhase::AwaitingRoot);

        selection.select(Coordinate::new(2, 3));
        assert_eq!(selection.root(), Some(Coordinate::new(2, 3)));
        assert_eq!(selection.target(), None);
        assert_eq!(selection.phase(), SelectionPhase::AwaitingTarget);
        assert_eq!(selection.interval(&Fretboard::standard()), None);
    }

    #[test]
    fn test_later_clicks_replace_target() {
        let mut selection = Selection::new();
        selection.select(Coordinate::new(0, 0));
        selection.select(Coordinate::new(0, 7));
        selection.select(Coordinate::new(1, 2));

        assert_eq!(selection.root(), Some(Coordinate::new(0, 0)));
        assert_eq!(selection.target(), Some(Coordinate::new(1, 2)));
        assert_eq!(selection.phase(), SelectionPhase::Complete);
    }

    #[test]
    fn test_clicking_root_clears_everything() {
        let mut selection = Selection::new();
        selection.select(Coordinate::new(3, 5));
        selection.select(Coordinate::new(4, 5));
        selection.select(Coordinate::new(3, 5));

        assert_eq!(selection, Selection::new());
    }

    #[test]
    fn test_same_pitch_elsewhere_is_a_unison_target() {
        let board = Fretboard::standard();
        let mut selection = Selection::new();
        selection.select(Coordinate::new(0, 5));
        selection.select(Coordinate::new(1, 0));

        let result = selection.interval(&board).unwrap();
        assert_eq!(result.mode, IntervalMode::Unison);
        assert!(selection.ghost_notes(&board).is_empty());
    }

    #[test]
    fn test_reset() {
        let mut selection = Selection::new();
        selection.select(Coordinate::new(0, 0));
        selection.select(Coordinate::new(5, 0));
        selection.reset();

        assert_eq!(selection.phase(), SelectionPhase::AwaitingRoot);
    }

    #[test]
    fn test_ghost_notes_only_when_descending() {
        let board = Fretboard::standard();
        let mut selection = Selection::new();
        selection.select(Coordinate::new(0, 12));

        selection.select(Coordinate::new(1, 2));
        assert_eq!(selection.interval(&board).unwrap().mode, IntervalMode::Descending);
        let ghosts = selection.ghost_notes(&board);
        assert_eq!(ghosts, board.positions_for_pitch_class(12));
        assert!(ghosts.contains(&Coordinate::new(0, 0)));

        selection.select(Coordinate::new(5, 0));
        assert_eq!(selection.interval(&board).unwrap().mode, IntervalMode::Ascending);
        assert!(selection.ghost_notes(&board).is_empty());
    }
}
