//! Screen regions and mouse hitboxes.
//!
//! The layout is recomputed on every draw and kept by the app so that a click
//! is resolved against exactly what was on screen.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use super::view_model::ScreenViewModel;

const COLUMN_WIDTH: u16 = 76;
const CHARACTER_HEIGHT: u16 = 6;
const MESSAGE_HEIGHT: u16 = 4;
const PANEL_HEIGHT: u16 = 8;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 4;
const THEME_TOGGLE_WIDTH: u16 = 4;

pub const YES_BUTTON_WIDTH: u16 = 12;
pub const NO_BUTTON_WIDTH: u16 = 12;
pub const FIELD_WIDTH: u16 = 20;
pub const CONFIRM_BUTTON_WIDTH: u16 = 20;

/// Rows above the panel where decline reactions float
pub const REACTION_ROWS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ThemeToggle,
    Character,
    Yes,
    No,
    DateField,
    TimeField,
    Confirm,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub full: Rect,
    pub header: Rect,
    pub theme_toggle: Rect,
    pub character: Rect,
    pub message: Rect,
    pub indicator: Rect,
    pub reactions: Rect,
    pub panel: Rect,
    pub status: Rect,
    pub yes: Option<Rect>,
    pub no: Option<Rect>,
    pub date_field: Option<Rect>,
    pub time_field: Option<Rect>,
    pub form_error: Option<Rect>,
    pub confirm: Option<Rect>,
    pub confirmation_text: Option<Rect>,
    pub reset: Option<Rect>,
}

impl ScreenLayout {
    pub fn compute(area: Rect, screen: &ScreenViewModel) -> Self {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let column = centered_columns(body, COLUMN_WIDTH.min(body.width));
        let [character, message, indicator, reactions, panel] = Layout::vertical([
            Constraint::Length(CHARACTER_HEIGHT),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(REACTION_ROWS),
            Constraint::Length(PANEL_HEIGHT),
        ])
        .areas(column);

        let theme_toggle = Rect {
            x: header.right().saturating_sub(THEME_TOGGLE_WIDTH),
            width: THEME_TOGGLE_WIDTH.min(header.width),
            ..header
        };

        let mut layout = Self {
            full: area,
            header,
            theme_toggle,
            character,
            message,
            indicator,
            reactions,
            panel,
            status,
            ..Self::default()
        };

        if let Some(decision) = &screen.decision {
            let no_width = scaled_width(NO_BUTTON_WIDTH, decision.no_scale);
            let row = Rect {
                height: BUTTON_HEIGHT.min(panel.height),
                ..panel
            };
            let [yes, no] = button_row(row, [YES_BUTTON_WIDTH, no_width]);
            layout.yes = Some(yes);
            layout.no = Some(no);
        }

        if screen.form.is_some() {
            let [fields, error, confirm_row] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(BUTTON_HEIGHT),
            ])
            .areas(panel);
            let [date, time] = button_row(fields, [FIELD_WIDTH, FIELD_WIDTH]);
            layout.date_field = Some(date);
            layout.time_field = Some(time);
            layout.form_error = Some(error);
            layout.confirm = Some(centered_columns(confirm_row, CONFIRM_BUTTON_WIDTH));
        }

        if screen.confirmation.is_some() {
            let [text, reset_row] = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(BUTTON_HEIGHT),
            ])
            .areas(panel);
            layout.confirmation_text = Some(text);
            layout.reset = Some(centered_columns(reset_row, YES_BUTTON_WIDTH + 2));
        }

        layout
    }

    /// What sits under the terminal cell at (`column`, `row`)
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        let inside = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));

        if self.theme_toggle.contains(position) {
            Some(Hit::ThemeToggle)
        } else if inside(self.yes) {
            Some(Hit::Yes)
        } else if inside(self.no) {
            Some(Hit::No)
        } else if inside(self.date_field) {
            Some(Hit::DateField)
        } else if inside(self.time_field) {
            Some(Hit::TimeField)
        } else if inside(self.confirm) {
            Some(Hit::Confirm)
        } else if inside(self.reset) {
            Some(Hit::Reset)
        } else if self.character.contains(position) {
            Some(Hit::Character)
        } else {
            None
        }
    }
}

/// Width of a button drawn at `scale` of its full size
pub fn scaled_width(full: u16, scale: f32) -> u16 {
    ((full as f32 * scale).round() as u16).clamp(4, full)
}

fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Lay out fixed-width boxes side by side, centered, with a gap between
fn button_row<const N: usize>(row: Rect, widths: [u16; N]) -> [Rect; N] {
    let gaps = BUTTON_GAP * (N.saturating_sub(1)) as u16;
    let total: u16 = widths.iter().sum::<u16>() + gaps;
    let mut x = row.x + row.width.saturating_sub(total) / 2;

    widths.map(|width| {
        let width = width.min(row.right().saturating_sub(x));
        let rect = Rect { x, width, ..row };
        x = x.saturating_add(width + BUTTON_GAP);
        rect
    })
}
