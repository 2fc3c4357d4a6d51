//! Color type and the default palettes for the dropdown.
//!
//! Consumer styles are layered on top of the theme, so every field here is a
//! fallback, never an override.

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Default colors for every part of the dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Trigger button background
    pub button_bg: Color,
    /// Trigger button label
    pub button_text: Color,
    /// Full-screen backdrop behind the window
    pub overlay: Color,
    /// Window background
    pub window_bg: Color,
    /// Row background
    pub row_bg: Color,
    /// Divider under each row
    pub row_border: Color,
    /// Row label
    pub row_text: Color,
    /// Background of selected rows
    pub selected_row_bg: Color,
    /// Opacity applied to disabled rows
    pub disabled_opacity: f32,
    /// Search input background
    pub search_bg: Color,
    /// Search input text
    pub search_text: Color,
    /// Search placeholder text
    pub search_placeholder: Color,
    /// Select-all label
    pub select_all_label: Color,
    /// Row label font size
    pub font_size: f32,
}

impl Theme {
    /// Light palette, the default.
    pub fn light() -> Self {
        Self {
            button_bg: Color::rgb(0.937, 0.937, 0.937),
            button_text: Color::BLACK,
            overlay: Color::rgba(0.0, 0.0, 0.0, 0.4),
            window_bg: Color::rgb(0.937, 0.937, 0.937),
            row_bg: Color::rgb(0.937, 0.937, 0.937),
            row_border: Color::rgb(0.773, 0.773, 0.773),
            row_text: Color::BLACK,
            selected_row_bg: Color::rgb(0.85, 0.85, 0.85),
            disabled_opacity: 0.5,
            search_bg: Color::WHITE,
            search_text: Color::BLACK,
            search_placeholder: Color::rgb(0.55, 0.55, 0.55),
            select_all_label: Color::rgb(0.5, 0.5, 0.5),
            font_size: 18.0,
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            button_bg: Color::rgb(0.18, 0.18, 0.22),
            button_text: Color::rgb(0.95, 0.95, 0.97),
            overlay: Color::rgba(0.0, 0.0, 0.0, 0.5),
            window_bg: Color::rgba(0.11, 0.11, 0.14, 0.98),
            row_bg: Color::rgb(0.13, 0.13, 0.16),
            row_border: Color::rgba(1.0, 1.0, 1.0, 0.06),
            row_text: Color::rgb(0.95, 0.95, 0.97),
            selected_row_bg: Color::rgba(0.40, 0.58, 0.98, 0.25),
            disabled_opacity: 0.4,
            search_bg: Color::rgb(0.11, 0.11, 0.14),
            search_text: Color::rgb(0.95, 0.95, 0.97),
            search_placeholder: Color::rgb(0.42, 0.42, 0.50),
            select_all_label: Color::rgb(0.58, 0.58, 0.65),
            font_size: 18.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
