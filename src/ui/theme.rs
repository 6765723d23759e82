//! Theme configuration for the dashboard.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::config::ThemeChoice;
use crate::data::SeverityColor;

/// Color and style theme for the dashboard.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Colors for each severity, calm to severe.
    pub excellent: Color,
    pub good: Color,
    pub fair: Color,
    pub poor: Color,
    pub critical: Color,
    pub unknown: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for panel titles and headings.
    pub header: Style,
    /// Style for the fetch button.
    pub button: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            excellent: Color::LightBlue,
            good: Color::Green,
            fair: Color::Yellow,
            poor: Color::Rgb(255, 165, 0),
            critical: Color::Red,
            unknown: Color::Gray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            excellent: Color::Blue,
            good: Color::Green,
            fair: Color::Rgb(184, 134, 11),
            poor: Color::Rgb(230, 115, 0),
            critical: Color::Red,
            unknown: Color::DarkGray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Palette color for a severity color.
    pub fn severity_color(&self, color: SeverityColor) -> Color {
        match color {
            SeverityColor::Blue => self.excellent,
            SeverityColor::Green => self.good,
            SeverityColor::Yellow => self.fair,
            SeverityColor::Orange => self.poor,
            SeverityColor::Red => self.critical,
            SeverityColor::Gray => self.unknown,
        }
    }

    /// Get style for a severity color
    pub fn severity_style(&self, color: SeverityColor) -> Style {
        let style = Style::default().fg(self.severity_color(color));
        match color {
            SeverityColor::Red => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_palette() {
        let theme = Theme::dark();
        assert_eq!(theme.severity_color(SeverityColor::Red), Color::Red);
        assert_eq!(theme.severity_color(SeverityColor::Orange), Color::Rgb(255, 165, 0));
        assert!(theme
            .severity_style(SeverityColor::Red)
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_explicit_choice() {
        let theme = Theme::from_choice(ThemeChoice::Light);
        assert_eq!(theme.highlight, Color::Blue);
    }
}
