use log::info;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(15, 23, 42),
                surface: Color::Rgb(17, 24, 39),
                border: Color::Rgb(31, 41, 55),
                text: Color::Rgb(249, 250, 251),
                muted: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(34, 197, 94),
                on_accent: Color::White,
                danger: Color::Rgb(239, 68, 68),
                warning: Color::Rgb(234, 179, 8),
            },
            Theme::Light => Palette {
                background: Color::Rgb(249, 250, 251),
                surface: Color::White,
                border: Color::Rgb(229, 231, 235),
                text: Color::Rgb(17, 24, 39),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(22, 163, 74),
                on_accent: Color::White,
                danger: Color::Rgb(239, 68, 68),
                warning: Color::Rgb(202, 138, 4),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Colours every view draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub danger: Color,
    pub warning: Color,
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn subtle(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_text(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

/// Theme state for one application session, handed to each view by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
        info!("Theme switched to {}", self.theme);
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_theme() {
        for start in [Theme::Light, Theme::Dark] {
            let mut ctx = ThemeContext::new(start);
            ctx.toggle();
            assert_ne!(ctx.theme(), start);
            ctx.toggle();
            assert_eq!(ctx.theme(), start);
        }
    }

    #[test]
    fn test_palette_follows_theme() {
        let mut ctx = ThemeContext::new(Theme::Light);
        assert_eq!(ctx.palette().accent, Color::Rgb(22, 163, 74));
        ctx.toggle();
        assert!(ctx.is_dark());
        assert_eq!(ctx.palette().accent, Color::Rgb(34, 197, 94));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
