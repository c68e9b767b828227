use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::tui::palette::Palette;

const DUCKLETT: [&str; 5] = [
    r"     __     ",
    r"  __( o)>   ",
    r"  \ <_. )   ",
    r"   `---'    ",
    r" ~~~~~~~~~~ ",
];

const DUCKLETT_SAD: [&str; 5] = [
    r"     __     ",
    r"  __( ;)>   ",
    r"  \ <_. )   ",
    r"   `---'    ",
    r" ~~~~~~~~~~ ",
];

/// The duck, tinted when sad
pub struct CharacterView {
    sad: bool,
    palette: Palette,
}

impl CharacterView {
    pub fn new(sad: bool, palette: Palette) -> Self {
        Self { sad, palette }
    }
}

impl Widget for CharacterView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (art, color) = if self.sad {
            (DUCKLETT_SAD, self.palette.sad_duck)
        } else {
            (DUCKLETT, self.palette.duck)
        };

        let lines: Vec<Line> = art
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(color))))
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Speech bubble with the main message
pub struct MessageView<'a> {
    text: &'a str,
    palette: Palette,
}

impl<'a> MessageView<'a> {
    pub fn new(text: &'a str, palette: Palette) -> Self {
        Self { text, palette }
    }
}

impl Widget for MessageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.accent));

        Paragraph::new(Span::styled(
            self.text,
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
    }
}
