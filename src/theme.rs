//! Dark and light palettes. Purely cosmetic.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Resolved colours used by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub correct: Color,
    pub incorrect: Color,
    pub warning: Color,
    pub timer: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Reset,
        text: Color::White,
        muted: Color::DarkGray,
        accent: Color::Cyan,
        highlight: Color::Yellow,
        correct: Color::Green,
        incorrect: Color::Red,
        warning: Color::Yellow,
        timer: Color::Blue,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::White,
        text: Color::Black,
        muted: Color::Gray,
        accent: Color::Blue,
        highlight: Color::Magenta,
        correct: Color::Green,
        incorrect: Color::Red,
        warning: Color::LightRed,
        timer: Color::Blue,
    };

    /// Colour for a score ratio, from green (great) to red.
    pub fn grade(&self, percentage: f64) -> Color {
        match percentage as u32 {
            90..=100 => self.correct,
            70..=89 => self.accent,
            50..=69 => self.warning,
            _ => self.incorrect,
        }
    }
}
