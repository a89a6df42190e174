//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the widgets and the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Highlight color for the focused element.
    pub highlight: Color,
    /// Color for secondary text, borders and placeholders.
    pub muted: Color,
    /// Color for errors and invalid fields.
    pub error: Color,
    /// Color for selected rows and checked boxes.
    pub selected: Color,
    /// Background of filled inputs and the cursor row.
    pub fill: Color,
}

impl Theme {
    /// The dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            highlight: Color::Cyan,
            muted: Color::DarkGray,
            error: Color::Red,
            selected: Color::Green,
            fill: Color::Rgb(39, 39, 42),
        }
    }

    /// The light theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            highlight: Color::Blue,
            muted: Color::Gray,
            error: Color::Red,
            selected: Color::Green,
            fill: Color::Rgb(243, 244, 246),
        }
    }

    /// Look up a theme by name.
    ///
    /// Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Border style for a focusable element.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for header labels.
    pub fn header(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Style for secondary text.
    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark"), Some(Theme::dark()));
        assert_eq!(Theme::from_name("light"), Some(Theme::light()));
        assert_eq!(Theme::from_name("neon"), None);
    }

    #[test]
    fn test_border_focus() {
        let theme = Theme::dark();
        assert_eq!(theme.border(true).fg, Some(Color::Cyan));
        assert_eq!(theme.border(false).fg, Some(Color::DarkGray));
    }
}
