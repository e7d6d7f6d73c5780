//! Color theme built once from configuration

use crate::config::ColorConfig;
use colored::{Color, ColoredString, Colorize};
use tracing::warn;

/// One themed color, optionally bold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
}

impl Style {
    const fn new(color: Color, bold: bool) -> Self {
        Self { color, bold }
    }

    /// Parse names like `yellow` or `BoldRed`
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let (bold, base) = match lower.strip_prefix("bold") {
            Some(rest) => (true, rest),
            None => (false, lower.as_str()),
        };

        let color = match base {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "purple" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            _ => return None,
        };
        Some(Self::new(color, bold))
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        let colored = text.color(self.color);
        if self.bold {
            colored.bold()
        } else {
            colored
        }
    }
}

/// Colors for the four kinds of terminal output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub header: Style,
    pub instruction: Style,
    pub error: Style,
    pub default: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::new(Color::Green, true),
            instruction: Style::new(Color::Yellow, false),
            error: Style::new(Color::Red, true),
            default: Style::new(Color::Blue, false),
        }
    }
}

impl Theme {
    /// Build from configured names; unknown names keep the default color
    pub fn from_config(colors: &ColorConfig) -> Self {
        let fallback = Self::default();
        let pick = |slot: &str, name: &str, default: Style| {
            Style::parse(name).unwrap_or_else(|| {
                warn!(slot, color = name, "unknown color, using default");
                default
            })
        };

        Self {
            header: pick("header", &colors.header, fallback.header),
            instruction: pick("instruction", &colors.instruction, fallback.instruction),
            error: pick("error", &colors.error, fallback.error),
            default: pick("default", &colors.default, fallback.default),
        }
    }

    pub fn header(&self, text: &str) -> ColoredString {
        self.header.paint(text)
    }

    pub fn instruction(&self, text: &str) -> ColoredString {
        self.instruction.paint(text)
    }

    pub fn error(&self, text: &str) -> ColoredString {
        self.error.paint(text)
    }

    pub fn default_value(&self, text: &str) -> ColoredString {
        self.default.paint(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_bold_names() {
        assert_eq!(Style::parse("yellow"), Some(Style::new(Color::Yellow, false)));
        assert_eq!(Style::parse("BoldRed"), Some(Style::new(Color::Red, true)));
        assert_eq!(Style::parse("purple"), Some(Style::new(Color::Magenta, false)));
        assert_eq!(Style::parse("mauve"), None);
        assert_eq!(Style::parse("bold"), None);
    }

    #[test]
    fn test_default_config_matches_default_theme() {
        assert_eq!(Theme::from_config(&ColorConfig::default()), Theme::default());
    }

    #[test]
    fn test_unknown_color_falls_back_per_slot() {
        let colors = ColorConfig {
            header: "boldcyan".into(),
            error: "not-a-color".into(),
            ..ColorConfig::default()
        };
        let theme = Theme::from_config(&colors);
        assert_eq!(theme.header, Style::new(Color::Cyan, true));
        assert_eq!(theme.error, Theme::default().error);
    }
}
