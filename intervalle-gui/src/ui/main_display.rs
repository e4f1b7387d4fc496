//! # Main Display Module
//!
//! This module contains the main display components and layout logic
//! for the Intervalle application: header, result panel, fretboard and legend.

use iced::widget::{Space, button, column, container, horizontal_space, row, text};
use iced::{Alignment, Color, Element, Length};
use intervalle_core::{IntervalMode, IntervalResult, SelectionPhase};

use super::fretboard_view::FretboardView;

const ROOT_COLOR: Color = Color { r: 0.13, g: 0.83, b: 0.93, a: 1.0 };
const TARGET_COLOR: Color = Color { r: 0.98, g: 0.44, b: 0.52, a: 1.0 };
const MUTED_COLOR: Color = Color { r: 0.55, g: 0.55, b: 0.55, a: 1.0 };

const ROOT_PROMPT: &str = "Sélectionnez une note fondamentale (Tonique)";
const TARGET_PROMPT: &str = "Sélectionnez une note cible";

/// Creates the complete main application view
pub fn create_main_view(data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    eprintln!("[VIEW] Rendering GUI...");

    let header = create_header();
    let info_panel = create_info_panel(data.phase, data.interval.as_ref());
    let fretboard = FretboardView::new(
        data.fretboard.clone(),
        data.root,
        data.target,
        data.ghosts.clone(),
    )
    .view();
    let legend = create_legend(!data.ghosts.is_empty());

    let main_content = column![
        header,
        Space::with_height(20),
        info_panel,
        Space::with_height(20),
        fretboard,
        Space::with_height(10),
        legend,
    ]
    .width(Length::Fill)
    .spacing(10)
    .padding(20);

    container(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Title, subtitle and the reset button.
fn create_header() -> Element<'static, crate::Message> {
    let title = column![
        text("Intervalle").size(28),
        text("Calculateur de tons et d'intervalles")
            .size(12)
            .color(MUTED_COLOR),
    ]
    .spacing(4);

    let reset = button(text("RÉINITIALISER").size(12))
        .padding([6, 10])
        .on_press(crate::Message::Reset);

    row![title, horizontal_space(), reset]
        .align_y(Alignment::Center)
        .into()
}

/// Creates the result panel.
///
/// Shows a prompt until both notes are picked, then the interval. Descending
/// intervals get the rule of the octave laid out; ascending and unison
/// results show the formula and the name.
fn create_info_panel(
    phase: SelectionPhase,
    interval: Option<&IntervalResult>,
) -> Element<'static, crate::Message> {
    let content: Element<'static, crate::Message> = match (prompt_for(phase, interval), interval) {
        (Some(prompt), _) if phase == SelectionPhase::AwaitingRoot => {
            text(prompt).size(18).color(MUTED_COLOR).into()
        }
        (Some(prompt), _) => text(prompt).size(18).into(),
        (None, Some(result)) if result.is_descending() => create_descending_result(result),
        (None, Some(result)) => create_ascending_result(result),
        (None, None) => Space::with_height(0).into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(180.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(180.0))
        .into()
}

/// The prompt to show while a note is still missing, `None` once there is a result.
fn prompt_for(phase: SelectionPhase, interval: Option<&IntervalResult>) -> Option<&'static str> {
    match (phase, interval) {
        (SelectionPhase::AwaitingRoot, _) => Some(ROOT_PROMPT),
        (_, None) => Some(TARGET_PROMPT),
        (_, Some(_)) => None,
    }
}

fn create_descending_result(result: &IntervalResult) -> Element<'static, crate::Message> {
    let heading = match result.descending_operand() {
        Some(operand) => format!("↓ Descendant  (- {} tons)", operand),
        None => "↓ Descendant".to_string(),
    };

    column![
        text(heading).size(14).color(TARGET_COLOR),
        row![
            text("Règle de l'Octave").size(12).color(MUTED_COLOR),
            Space::with_width(10),
            text(result.formula.clone()).size(24),
            Space::with_width(8),
            text("tons").size(16).color(MUTED_COLOR),
        ]
        .align_y(Alignment::Center),
        text(result.interval_name).size(30).color(TARGET_COLOR),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}

fn create_ascending_result(result: &IntervalResult) -> Element<'static, crate::Message> {
    let is_unison = result.mode == IntervalMode::Unison;

    let mut formula = row![text(result.formula.clone()).size(40)].align_y(Alignment::Center);
    if !is_unison {
        formula = formula.push(Space::with_width(10));
        formula = formula.push(text("tons").size(22).color(MUTED_COLOR));
    }

    let mut content = column![].spacing(12).align_x(Alignment::Center);
    if result.mode == IntervalMode::Ascending {
        content = content.push(text("Ascendant").size(14).color(ROOT_COLOR));
    }

    let name_color = if is_unison { Color::WHITE } else { ROOT_COLOR };
    content
        .push(formula)
        .push(text(result.interval_name).size(24).color(name_color))
        .into()
}

/// Marker legend below the fretboard; the octave entry only shows with ghosts.
fn create_legend(show_ghosts: bool) -> Element<'static, crate::Message> {
    let mut legend = row![
        text("T").size(14).color(ROOT_COLOR),
        text("Tonique").size(14),
        Space::with_width(20),
        text("C").size(14).color(TARGET_COLOR),
        text("Cible").size(14),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    if show_ghosts {
        legend = legend
            .push(Space::with_width(20))
            .push(text("◌").size(14).color(MUTED_COLOR))
            .push(text("Octaves Tonique").size(14));
    }

    container(legend).center_x(Length::Fill).into()
}

#[cfg(test)]
mod test {
    use super::*;
    use intervalle_core::{Coordinate, compute_interval};

    #[test]
    fn test_prompts_follow_selection_phase() {
        assert_eq!(
            prompt_for(SelectionPhase::AwaitingRoot, None),
            Some("Sélectionnez une note fondamentale (Tonique)")
        );
        assert_eq!(
            prompt_for(SelectionPhase::AwaitingTarget, None),
            Some("Sélectionnez une note cible")
        );

        let result = compute_interval(Coordinate::new(0, 0), Coordinate::new(0, 7));
        assert_eq!(prompt_for(SelectionPhase::Complete, Some(&result)), None);
    }
}
