use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::palette::Palette;
use ducklett_runtime::Mode;
use ducklett_types::ThemePreference;

/// Title on the left, theme toggle on the right
pub struct HeaderView {
    theme: ThemePreference,
    palette: Palette,
}

impl HeaderView {
    pub fn new(theme: ThemePreference, palette: Palette) -> Self {
        Self { theme, palette }
    }
}

impl Widget for HeaderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            " Ducklett",
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .render(area, buf);

        Paragraph::new(format!("{} ", self.theme.toggle_icon()))
            .right_aligned()
            .render(area, buf);
    }
}

pub struct StatusBarView {
    mode: Mode,
    palette: Palette,
}

impl StatusBarView {
    pub fn new(mode: Mode, palette: Palette) -> Self {
        Self { mode, palette }
    }
}

impl Widget for StatusBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys: &[(&str, &str)] = match self.mode {
            Mode::Idle | Mode::Declined => &[
                ("[s]", "í "),
                ("[n]", "o "),
                ("[d]", "uck "),
                ("[t]", "ema "),
                ("[q]", "uit"),
            ],
            Mode::Scheduling => &[
                ("[Tab]", " campo "),
                ("[Enter]", " confirmar "),
                ("[F2]", " tema "),
                ("[Esc]", " quit"),
            ],
            Mode::Confirmed => &[("[r]", "einiciar "), ("[t]", "ema "), ("[q]", "uit")],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, rest) in keys {
            spans.push(Span::styled(*key, Style::default().fg(self.palette.gold)));
            spans.push(Span::styled(*rest, Style::default().fg(self.palette.muted)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
