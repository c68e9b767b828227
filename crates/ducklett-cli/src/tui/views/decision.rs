use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::tui::palette::Palette;
use crate::tui::view_model::DecisionViewModel;
use ducklett_types::copy;

/// A bordered, centered label
pub struct ButtonView<'a> {
    label: &'a str,
    color: Color,
    highlight: bool,
}

impl<'a> ButtonView<'a> {
    pub fn new(label: &'a str, color: Color) -> Self {
        Self {
            label,
            color,
            highlight: false,
        }
    }

    pub fn highlighted(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

impl Widget for ButtonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = Style::default().fg(self.color).add_modifier(Modifier::BOLD);
        if self.highlight {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.color));

        Paragraph::new(self.label)
            .style(style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// The Yes / No pair; greyed out while declined
pub struct DecisionView<'a> {
    model: &'a DecisionViewModel,
    yes: Rect,
    no: Rect,
    palette: Palette,
}

impl<'a> DecisionView<'a> {
    pub fn new(model: &'a DecisionViewModel, yes: Rect, no: Rect, palette: Palette) -> Self {
        Self {
            model,
            yes,
            no,
            palette,
        }
    }
}

impl Widget for DecisionView<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let (yes_color, no_color) = if self.model.enabled {
            (self.palette.yes, self.palette.no)
        } else {
            (self.palette.disabled, self.palette.disabled)
        };

        ButtonView::new(copy::YES_LABEL, yes_color)
            .highlighted(self.model.yes_highlight)
            .render(self.yes, buf);
        ButtonView::new(self.model.no_label, no_color).render(self.no, buf);
    }
}
