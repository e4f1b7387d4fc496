//! # Intervalle - Fretboard Interval Calculator GUI
//!
//! This module contains the main GUI application for Intervalle.
//! The user picks a root and a target note on the fretboard and the
//! application shows the interval between them in tones, with the
//! rule of the octave spelled out for descending intervals.
//!
//! ## Architecture
//! - **Core**: `intervalle-core` does every calculation
//! - **Main Thread**: Iced GUI application with dark theme
//! - **Updates**: Recomputed from the selection on every click

mod ui;

use iced::{self, Element, Theme};
use intervalle_core::{Coordinate, Fretboard, IntervalResult, Selection, SelectionPhase};
use ui::main_display::create_main_view;

/// Main entry point for the Intervalle application.
pub fn main() -> iced::Result {
    eprintln!("[MAIN] Starting Intervalle application...");
    let result = iced::application("Intervalle", IntervalApp::update, IntervalApp::view)
        .theme(IntervalApp::theme)
        .run();
    eprintln!("[MAIN] Application finished with result: {:?}", result);
    result
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    NoteSelected(Coordinate), // User clicked a fretboard cell
    Reset,                    // Clear root and target
}

/// UI-specific data needed for rendering the interface.
///
/// Rebuilt after every update so the view never calls into the engine.
#[derive(Debug, Clone)]
pub struct AppDisplayData {
    pub fretboard: Fretboard,
    pub phase: SelectionPhase,
    pub root: Option<Coordinate>,
    pub target: Option<Coordinate>,
    pub interval: Option<IntervalResult>,
    /// Octave echoes of the root, only filled while descending
    pub ghosts: Vec<Coordinate>,
}

/// Main application state.
#[derive(Debug)]
struct IntervalApp {
    fretboard: Fretboard,
    selection: Selection,

    // Single source of truth for all display data
    display_data: AppDisplayData,
}

impl Default for IntervalApp {
    fn default() -> Self {
        eprintln!("[MAIN] Creating IntervalApp...");
        let fretboard = Fretboard::standard();
        let selection = Selection::new();
        let display_data = build_display_data(&fretboard, &selection);
        Self {
            fretboard,
            selection,
            display_data,
        }
    }
}

impl IntervalApp {
    /// Handles application state updates based on incoming messages.
    fn update(&mut self, message: Message) {
        eprintln!("[UPDATE] Received message: {:?}", message);

        match message {
            Message::NoteSelected(coord) => self.selection.select(coord),
            Message::Reset => self.selection.reset(),
        }

        self.display_data = build_display_data(&self.fretboard, &self.selection);
        if let Some(result) = &self.display_data.interval {
            eprintln!(
                "[UPDATE] {:?}: {} ({})",
                result.mode, result.interval_name, result.formula
            );
        }
    }

    /// Renders the main application interface.
    ///
    /// Delegates all UI rendering to the main_display module.
    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.display_data)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Derives everything the view shows from the current selection.
fn build_display_data(fretboard: &Fretboard, selection: &Selection) -> AppDisplayData {
    AppDisplayData {
        fretboard: fretboard.clone(),
        phase: selection.phase(),
        root: selection.root(),
        target: selection.target(),
        interval: selection.interval(fretboard),
        ghosts: selection.ghost_notes(fretboard),
    }
}
