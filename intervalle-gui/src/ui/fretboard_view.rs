//! # Fretboard Widget
//!
//! This module provides an interactive fretboard widget. It draws the
//! courses high-to-low from top to bottom, marks the selected root and
//! target, echoes the root's octaves while an interval is descending,
//! and turns left clicks into coordinate selections.

use iced::widget::canvas::{self, Event, Geometry, LineDash, Path, Stroke, event};
use iced::widget::container;
use iced::{Color, Element, Pixels, Point, Rectangle, Renderer, Size, Theme, alignment, mouse};
use intervalle_core::Coordinate;
use intervalle_core::fretboard::{COURSE_COUNT, Fretboard};

/// Height of one course row.
const ROW_HEIGHT: f32 = 48.0;
/// Space reserved at the bottom for fret numbers.
const FOOTER_HEIGHT: f32 = 24.0;
/// Width of the course name column.
const LABEL_WIDTH: f32 = 24.0;
/// The open-string cell is narrower than the fretted cells.
const NUT_CELL_WIDTH: f32 = 50.0;
const MARKER_RADIUS: f32 = 17.0;

/// Frets carrying a single inlay dot; fret 12 gets two.
const SINGLE_DOTS: [i32; 4] = [3, 5, 7, 9];
const DOUBLE_DOT: i32 = 12;

const BACKGROUND: Color = Color { r: 0.07, g: 0.07, b: 0.07, a: 1.0 };
const FRET_LINE: Color = Color { r: 0.25, g: 0.25, b: 0.25, a: 1.0 };
const INLAY: Color = Color { r: 0.15, g: 0.15, b: 0.15, a: 1.0 };
const STRING_COLOR: Color = Color { r: 0.45, g: 0.45, b: 0.45, a: 1.0 };
const LABEL_COLOR: Color = Color { r: 0.6, g: 0.6, b: 0.6, a: 1.0 };
const ROOT_COLOR: Color = Color { r: 0.02, g: 0.71, b: 0.83, a: 1.0 }; // Cyan
const TARGET_COLOR: Color = Color { r: 0.96, g: 0.25, b: 0.37, a: 1.0 }; // Rose
const GHOST_COLOR: Color = Color { r: 0.45, g: 0.45, b: 0.45, a: 0.6 };

/// Interactive fretboard for picking the root and target notes.
#[derive(Debug, Clone)]
pub struct FretboardView {
    fretboard: Fretboard,
    root: Option<Coordinate>,
    target: Option<Coordinate>,
    ghosts: Vec<Coordinate>,
}

/// Cell geometry derived from the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Grid {
    fret_count: i32,
    fret_width: f32,
}

impl Grid {
    fn new(size: Size, fret_count: i32) -> Self {
        let fretted = (fret_count - 1).max(1) as f32;
        let fret_width = ((size.width - LABEL_WIDTH - NUT_CELL_WIDTH) / fretted).max(1.0);
        Self {
            fret_count,
            fret_width,
        }
    }

    /// Left edge of a fret cell.
    fn cell_x(&self, fret: i32) -> f32 {
        if fret == 0 {
            LABEL_WIDTH
        } else {
            LABEL_WIDTH + NUT_CELL_WIDTH + (fret - 1) as f32 * self.fret_width
        }
    }

    fn cell_width(&self, fret: i32) -> f32 {
        if fret == 0 {
            NUT_CELL_WIDTH
        } else {
            self.fret_width
        }
    }

    fn cell_center(&self, coord: Coordinate) -> Point {
        Point::new(
            self.cell_x(coord.fret) + self.cell_width(coord.fret) / 2.0,
            row_of(coord.course) as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
        )
    }

    /// The coordinate under `pos`, if any.
    fn coordinate_at(&self, pos: Point) -> Option<Coordinate> {
        if pos.x < LABEL_WIDTH || pos.y < 0.0 {
            return None;
        }
        let row = (pos.y / ROW_HEIGHT).floor() as usize;
        if row >= COURSE_COUNT {
            return None;
        }
        let x = pos.x - LABEL_WIDTH;
        let fret = if x < NUT_CELL_WIDTH {
            0
        } else {
            1 + ((x - NUT_CELL_WIDTH) / self.fret_width).floor() as i32
        };
        (fret < self.fret_count).then(|| Coordinate::new(row_of(row), fret))
    }
}

/// Visual row of a course: the highest course is drawn on top.
/// The mapping is its own inverse.
fn row_of(course: usize) -> usize {
    COURSE_COUNT - 1 - course
}

impl FretboardView {
    pub fn new(
        fretboard: Fretboard,
        root: Option<Coordinate>,
        target: Option<Coordinate>,
        ghosts: Vec<Coordinate>,
    ) -> Self {
        Self {
            fretboard,
            root,
            target,
            ghosts,
        }
    }

    pub fn view(self) -> Element<'static, crate::Message> {
        container(
            canvas::Canvas::new(self)
                .width(iced::Length::Fill)
                .height(iced::Length::Fixed(
                    COURSE_COUNT as f32 * ROW_HEIGHT + FOOTER_HEIGHT,
                )),
        )
        .into()
    }

    fn grid(&self, size: Size) -> Grid {
        Grid::new(size, self.fretboard.fret_count())
    }

    fn draw_neck(&self, frame: &mut canvas::Frame, grid: &Grid) {
        let neck_height = COURSE_COUNT as f32 * ROW_HEIGHT;

        // Inlay dots
        let dot = |frame: &mut canvas::Frame, fret: i32, y: f32| {
            let x = grid.cell_x(fret) + grid.cell_width(fret) / 2.0;
            frame.fill(&Path::circle(Point::new(x, y), 8.0), INLAY);
        };
        for fret in SINGLE_DOTS.into_iter().filter(|&f| f < grid.fret_count) {
            dot(frame, fret, neck_height / 2.0);
        }
        if DOUBLE_DOT < grid.fret_count {
            dot(frame, DOUBLE_DOT, neck_height / 3.0);
            dot(frame, DOUBLE_DOT, neck_height * 2.0 / 3.0);
        }

        // Fret wires, the nut drawn thicker
        for fret in 0..grid.fret_count {
            let x = grid.cell_x(fret) + grid.cell_width(fret);
            let width = if fret == 0 { 8.0 } else { 1.0 };
            frame.stroke(
                &Path::line(Point::new(x, 0.0), Point::new(x, neck_height)),
                Stroke::default().with_width(width).with_color(FRET_LINE),
            );
        }

        // Strings, thicker for lower courses
        for course in 0..COURSE_COUNT {
            let y = row_of(course) as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0;
            frame.stroke(
                &Path::line(
                    Point::new(LABEL_WIDTH, y),
                    Point::new(grid.cell_x(grid.fret_count), y),
                ),
                Stroke::default()
                    .with_width(1.0 + (COURSE_COUNT - course) as f32 * 0.4)
                    .with_color(STRING_COLOR),
            );
            frame.fill_text(label(
                self.fretboard.course_name(course),
                Point::new(LABEL_WIDTH / 2.0, y),
                LABEL_COLOR,
            ));
        }

        // Fret numbers under the fretted cells
        for fret in 1..grid.fret_count {
            frame.fill_text(label(
                &fret.to_string(),
                Point::new(
                    grid.cell_x(fret) + grid.fret_width / 2.0,
                    neck_height + FOOTER_HEIGHT / 2.0,
                ),
                LABEL_COLOR,
            ));
        }
    }

    fn draw_markers(&self, frame: &mut canvas::Frame, grid: &Grid) {
        let is_selected = |coord: Coordinate| Some(coord) == self.root || Some(coord) == self.target;

        for ghost in self.ghosts.iter().filter(|coord| !is_selected(**coord)) {
            frame.stroke(
                &Path::circle(grid.cell_center(*ghost), MARKER_RADIUS - 1.0),
                Stroke {
                    line_dash: LineDash {
                        segments: &[4.0, 4.0],
                        offset: 0,
                    },
                    ..Stroke::default().with_width(2.0).with_color(GHOST_COLOR)
                },
            );
        }

        let selected = [
            (self.target, TARGET_COLOR, "C", Color::WHITE),
            (self.root, ROOT_COLOR, "T", Color::BLACK),
        ];
        for (coord, fill, letter, text_color) in selected {
            if let Some(coord) = coord {
                let center = grid.cell_center(coord);
                frame.fill(&Path::circle(center, MARKER_RADIUS), fill);
                frame.fill_text(label(letter, center, text_color));
            }
        }
    }
}

/// A small text label centered on `position`.
fn label(content: &str, position: Point, color: Color) -> canvas::Text {
    canvas::Text {
        content: content.to_string(),
        position,
        color,
        size: Pixels(14.0),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        ..canvas::Text::default()
    }
}

impl<Message> canvas::Program<Message> for FretboardView
where
    Message: From<crate::Message>,
{
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let Some(position) = cursor.position_in(bounds) {
            if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
                if let Some(coord) = self.grid(bounds.size()).coordinate_at(position) {
                    return (
                        event::Status::Captured,
                        Some(crate::Message::NoteSelected(coord).into()),
                    );
                }
            }
        }
        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill(&Path::rectangle(Point::ORIGIN, bounds.size()), BACKGROUND);

        let grid = self.grid(bounds.size());
        self.draw_neck(&mut frame, &grid);
        self.draw_markers(&mut frame, &grid);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.grid(bounds.size()).coordinate_at(position).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}
