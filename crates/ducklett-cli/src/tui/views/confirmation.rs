use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::tui::layout::ScreenLayout;
use crate::tui::palette::Palette;
use ducklett_types::copy;

use super::ButtonView;

pub struct ConfirmationView<'a> {
    text: &'a str,
    notice: Option<&'a str>,
    layout: &'a ScreenLayout,
    palette: Palette,
}

impl<'a> ConfirmationView<'a> {
    pub fn new(
        text: &'a str,
        notice: Option<&'a str>,
        layout: &'a ScreenLayout,
        palette: Palette,
    ) -> Self {
        Self {
            text,
            notice,
            layout,
            palette,
        }
    }
}

impl Widget for ConfirmationView<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        if let Some(area) = self.layout.confirmation_text {
            let mut lines = vec![Line::from(Span::styled(
                self.text,
                Style::default()
                    .fg(self.palette.gold)
                    .add_modifier(Modifier::BOLD),
            ))];
            if let Some(notice) = self.notice {
                lines.push(Line::from(Span::styled(
                    notice,
                    Style::default().fg(self.palette.error),
                )));
            }
            Paragraph::new(lines)
                .centered()
                .wrap(Wrap { trim: true })
                .render(area, buf);
        }
        if let Some(area) = self.layout.reset {
            ButtonView::new(copy::RESET_LABEL, self.palette.accent).render(area, buf);
        }
    }
}
