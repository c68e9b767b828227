use ducklett_engine::BubbleTint;
use ducklett_types::ThemePreference;
use ratatui::style::Color;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub duck: Color,
    pub sad_duck: Color,
    pub water: Color,
    pub gold: Color,
    pub yes: Color,
    pub no: Color,
    pub disabled: Color,
    pub error: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(225, 245, 254),
    text: Color::Rgb(1, 87, 155),
    muted: Color::Rgb(84, 110, 122),
    accent: Color::Rgb(2, 136, 209),
    duck: Color::Rgb(41, 182, 246),
    sad_duck: Color::Rgb(141, 123, 104),
    water: Color::Rgb(129, 212, 250),
    gold: Color::Rgb(255, 193, 7),
    yes: Color::Rgb(67, 160, 71),
    no: Color::Rgb(229, 57, 53),
    disabled: Color::Rgb(176, 190, 197),
    error: Color::Rgb(198, 40, 40),
};

const DARK: Palette = Palette {
    background: Color::Rgb(16, 29, 43),
    text: Color::Rgb(187, 222, 251),
    muted: Color::Rgb(120, 144, 156),
    accent: Color::Rgb(79, 195, 247),
    duck: Color::Rgb(79, 195, 247),
    sad_duck: Color::Rgb(161, 136, 127),
    water: Color::Rgb(38, 84, 124),
    gold: Color::Rgb(255, 213, 79),
    yes: Color::Rgb(102, 187, 106),
    no: Color::Rgb(239, 83, 80),
    disabled: Color::Rgb(69, 90, 100),
    error: Color::Rgb(255, 138, 128),
};

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => LIGHT,
            ThemePreference::Dark => DARK,
        }
    }

    pub fn bubble(&self, tint: BubbleTint) -> Color {
        match tint {
            BubbleTint::Water => self.water,
            BubbleTint::Gold => self.gold,
        }
    }
}
