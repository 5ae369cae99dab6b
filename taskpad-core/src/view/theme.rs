//! src/view/theme.rs
//! ============================================================================
//! # Theme Color Palettes
//!
//! Color constants for the built-in themes. The dark palette follows the
//! Catppuccin Mocha specification, the light one Catppuccin Latte:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::Color;

use crate::config::Theme;

/// Resolved color palette for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub accent: Color,
    pub comment: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
}

/// Catppuccin Mocha (dark, default).
const MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),    // Base
    foreground: Color::Rgb(205, 214, 244), // Text
    border: Color::Rgb(203, 166, 247),     // Mauve
    accent: Color::Rgb(137, 220, 235),     // Sky
    comment: Color::Rgb(127, 132, 156),    // Overlay1
    red: Color::Rgb(243, 139, 168),        // Red
    green: Color::Rgb(166, 227, 161),      // Green
    yellow: Color::Rgb(249, 226, 175),     // Yellow
};

/// Catppuccin Latte (light).
const LATTE: Palette = Palette {
    background: Color::Rgb(239, 241, 245), // Base
    foreground: Color::Rgb(76, 79, 105),   // Text
    border: Color::Rgb(136, 57, 239),      // Mauve
    accent: Color::Rgb(4, 165, 229),       // Sky
    comment: Color::Rgb(156, 160, 176),    // Overlay1
    red: Color::Rgb(210, 15, 57),          // Red
    green: Color::Rgb(64, 160, 43),        // Green
    yellow: Color::Rgb(223, 142, 29),      // Yellow
};

/// Resolve the palette for a configured theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Default | Theme::Dark => MOCHA,
        Theme::Light => LATTE,
    }
}
