//! Color themes for the UI.

use ratatui::style::Color;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Sheet and card background color.
    pub surface: Color,
    /// Primary text color.
    pub text: Color,
    /// Secondary text color.
    pub dim: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Filled rating star color.
    pub star: Color,
    /// Primary action (button) color.
    pub action: Color,
    /// Warning color.
    pub warning: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                surface: Color::Rgb(64, 66, 65),
                text: Color::Rgb(235, 219, 178),
                dim: Color::Rgb(168, 153, 132),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                star: Color::Rgb(250, 189, 47),
                action: Color::Rgb(152, 151, 26),
                warning: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(60, 56, 54),
                dim: Color::Rgb(124, 111, 100),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                star: Color::Rgb(181, 118, 20),
                action: Color::Rgb(121, 116, 14),
                warning: Color::Rgb(157, 0, 6),
            },
        }
    }
}
