//! Layered style blocks.
//!
//! A style is a bag of optional properties. Layers are merged field by field
//! with later layers winning, so `row.merged(&selected).merged(&disabled)`
//! gives a selected, disabled row its final look. Unset properties fall back
//! to the [`Theme`](crate::Theme) when the view is built.

use serde::{Deserialize, Serialize};

use crate::theme::Color;

/// Box properties: background, border, size and opacity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub opacity: Option<f32>,
}

impl BoxStyle {
    /// Overlay `other` on top of `self`.
    pub fn merged(&self, other: &BoxStyle) -> BoxStyle {
        BoxStyle {
            background: other.background.or(self.background),
            border_color: other.border_color.or(self.border_color),
            border_width: other.border_width.or(self.border_width),
            border_radius: other.border_radius.or(self.border_radius),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            opacity: other.opacity.or(self.opacity),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Text properties.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub align: Option<TextAlign>,
    pub bold: Option<bool>,
    pub margin_top: Option<f32>,
}

impl TextStyle {
    /// Overlay `other` on top of `self`.
    pub fn merged(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            color: other.color.or(self.color),
            font_size: other.font_size.or(self.font_size),
            align: other.align.or(self.align),
            bold: other.bold.or(self.bold),
            margin_top: other.margin_top.or(self.margin_top),
        }
    }

    /// Builder: set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Sizing and placement overrides for the dropdown window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOverrides {
    /// Box look of the window; `width`/`height` here override the computed size
    #[serde(flatten)]
    pub style: BoxStyle,
    /// Horizontal offset overriding the trigger's edge
    pub left: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_layer_wins() {
        let row = BoxStyle {
            background: Some(Color::WHITE),
            height: Some(40.0),
            ..BoxStyle::default()
        };
        let selected = BoxStyle {
            background: Some(Color::BLACK),
            ..BoxStyle::default()
        };
        let disabled = BoxStyle {
            opacity: Some(0.3),
            ..BoxStyle::default()
        };
        let merged = row.merged(&selected).merged(&disabled);
        assert_eq!(merged.background, Some(Color::BLACK));
        assert_eq!(merged.height, Some(40.0));
        assert_eq!(merged.opacity, Some(0.3));
    }

    #[test]
    fn test_text_merge_keeps_unset() {
        let base = TextStyle::default().with_color(Color::BLACK);
        let over = TextStyle {
            font_size: Some(12.0),
            ..TextStyle::default()
        };
        let merged = base.merged(&over);
        assert_eq!(merged.color, Some(Color::BLACK));
        assert_eq!(merged.font_size, Some(12.0));
    }

    #[test]
    fn test_window_overrides_from_json() {
        let parsed: WindowOverrides =
            serde_json::from_str(r#"{ "width": 250.0, "height": 120.0, "left": 8.0 }"#).unwrap();
        assert_eq!(parsed.style.width, Some(250.0));
        assert_eq!(parsed.style.height, Some(120.0));
        assert_eq!(parsed.left, Some(8.0));
    }
}
