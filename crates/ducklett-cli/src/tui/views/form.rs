use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::tui::layout::ScreenLayout;
use crate::tui::palette::Palette;
use crate::tui::view_model::FormViewModel;
use ducklett_runtime::Field;
use ducklett_types::copy;

use super::ButtonView;

const DATE_HINT: &str = "AAAA-MM-DD";
const TIME_HINT: &str = "HH:MM";

/// Date and time inputs, the inline error and the confirm button
pub struct FormView<'a> {
    model: &'a FormViewModel,
    layout: &'a ScreenLayout,
    palette: Palette,
}

impl<'a> FormView<'a> {
    pub fn new(model: &'a FormViewModel, layout: &'a ScreenLayout, palette: Palette) -> Self {
        Self {
            model,
            layout,
            palette,
        }
    }

    fn field(&self, title: &str, value: &str, hint: &str, focused: bool) -> Paragraph<'static> {
        let border = if focused {
            self.palette.accent
        } else {
            self.palette.muted
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(title.to_string());

        let mut spans = Vec::new();
        if value.is_empty() {
            spans.push(Span::styled(
                hint.to_string(),
                Style::default().fg(self.palette.muted),
            ));
        } else {
            spans.push(Span::styled(
                value.to_string(),
                Style::default().fg(self.palette.text),
            ));
        }
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        Paragraph::new(Line::from(spans)).block(block)
    }
}

impl Widget for FormView<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        if let Some(area) = self.layout.date_field {
            self.field(
                copy::DATE_LABEL,
                &self.model.date,
                DATE_HINT,
                self.model.focus == Field::Date,
            )
            .render(area, buf);
        }
        if let Some(area) = self.layout.time_field {
            self.field(
                copy::TIME_LABEL,
                &self.model.time,
                TIME_HINT,
                self.model.focus == Field::Time,
            )
            .render(area, buf);
        }
        if let (Some(area), Some(error)) = (self.layout.form_error, self.model.error) {
            Paragraph::new(Span::styled(error, Style::default().fg(self.palette.error)))
                .centered()
                .render(area, buf);
        }
        if let Some(area) = self.layout.confirm {
            ButtonView::new(copy::CONFIRM_LABEL, self.palette.yes).render(area, buf);
        }
    }
}
