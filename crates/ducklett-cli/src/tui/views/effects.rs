use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::palette::Palette;
use crate::tui::view_model::{BubbleSprite, Reaction};
use ratatui::widgets::Widget;

const SAD_DUCKLETT: &str = "(;_;)>";

fn glyph(size: u16) -> &'static str {
    match size {
        0..=12 => "∘",
        13..=24 => "o",
        _ => "O",
    }
}

/// Rising bubbles behind everything else
pub struct BubbleLayer<'a> {
    bubbles: &'a [BubbleSprite],
    palette: Palette,
}

impl<'a> BubbleLayer<'a> {
    pub fn new(bubbles: &'a [BubbleSprite], palette: Palette) -> Self {
        Self { bubbles, palette }
    }
}

impl Widget for BubbleLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let max_x = (area.width - 1) as f32;
        let max_y = (area.height - 1) as f32;

        for bubble in self.bubbles {
            let x = area.x + (bubble.x.clamp(0.0, 1.0) * max_x).round() as u16;
            let y = area.bottom() - 1 - (bubble.y.clamp(0.0, 1.0) * max_y).round() as u16;
            buf.set_string(
                x,
                y,
                glyph(bubble.size),
                Style::default().fg(self.palette.bubble(bubble.tint)),
            );
        }
    }
}

/// Sad messages and crying ducks floating above the buttons
pub struct ReactionLayer<'a> {
    reactions: &'a [Reaction],
    palette: Palette,
}

impl<'a> ReactionLayer<'a> {
    pub fn new(reactions: &'a [Reaction], palette: Palette) -> Self {
        Self { reactions, palette }
    }
}

impl Widget for ReactionLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for reaction in self.reactions {
            let (text, x, row, style) = match reaction {
                Reaction::Message { text, x, row } => (
                    *text,
                    *x,
                    *row,
                    Style::default()
                        .fg(self.palette.no)
                        .add_modifier(Modifier::ITALIC),
                ),
                Reaction::SadDucklett { x, row } => (
                    SAD_DUCKLETT,
                    *x,
                    *row,
                    Style::default().fg(self.palette.sad_duck),
                ),
            };

            let width = text.chars().count() as u16;
            let span = area.width.saturating_sub(width);
            let column = area.x + (x.clamp(0.0, 1.0) * span as f32).round() as u16;
            let line = area.y + row.min(area.height - 1);
            buf.set_stringn(
                column,
                line,
                text,
                area.right().saturating_sub(column) as usize,
                style,
            );
        }
    }
}
