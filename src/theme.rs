//! Theme module for boredom-buster
//!
//! Colour palette for the menu and result headings, plus a helper that
//! falls back to plain text when colour is off.

use crossterm::style::{Color, Stylize};

/// Menu banner (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb { r: 0, g: 212, b: 170 };

/// Result section headings (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb { r: 74, g: 222, b: 128 };

/// "Nothing found" and invalid input notices (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb { r: 251, g: 191, b: 36 };

/// Text styling for the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint(text, CYAN_PRIMARY, true)
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, GREEN_SUCCESS, true)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, AMBER_WARNING, false)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_is_unchanged() {
        let theme = Theme::new(false);
        assert_eq!(theme.heading("=== ALL ACTIVITIES ==="), "=== ALL ACTIVITIES ===");
        assert_eq!(theme.warning("Invalid option."), "Invalid option.");
    }

    #[test]
    fn test_color_theme_adds_escape_codes() {
        let theme = Theme::new(true);
        let text = theme.banner("=== BOREDOM BUSTER ===");
        assert!(text.contains("=== BOREDOM BUSTER ==="));
        assert!(text.contains('\u{1b}'));
    }
}
