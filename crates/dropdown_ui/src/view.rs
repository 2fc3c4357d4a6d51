//! Toolkit-independent view descriptions handed to the platform.
//!
//! The dropdown never draws anything itself. It describes the trigger button,
//! the overlay and the row list with these plain structs, and the platform
//! turns them into native widgets.

use serde::{Deserialize, Serialize};

use crate::placement::WindowStyle;
use crate::style::{BoxStyle, TextStyle};
use crate::theme::Color;

/// A small content tree returned by custom renderers.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A text label
    Text {
        text: String,
        style: TextStyle,
        /// Maximum number of lines before truncation
        lines: u32,
    },
    /// A named icon from the host's icon set
    Icon {
        name: String,
        color: Option<Color>,
        size: Option<f32>,
    },
    /// Children laid out horizontally
    Row(Vec<Content>),
    /// Nothing
    Empty,
}

impl Content {
    /// Single-line text with the given style.
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Content::Text {
            text: text.into(),
            style,
            lines: 1,
        }
    }

    /// An icon with default color and size.
    pub fn icon(name: impl Into<String>) -> Self {
        Content::Icon {
            name: name.into(),
            color: None,
            size: None,
        }
    }

    /// Concatenated text of every text node, depth first.
    pub fn plain_text(&self) -> String {
        match self {
            Content::Text { text, .. } => text.clone(),
            Content::Row(children) => children
                .iter()
                .map(Content::plain_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            Content::Icon { .. } | Content::Empty => String::new(),
        }
    }
}

/// Which side of the label the dropdown icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

/// The trigger button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub style: BoxStyle,
    /// Label or custom content; `None` when only the icon is shown
    pub content: Option<Content>,
    pub icon: Option<Content>,
    pub icon_position: IconPosition,
    /// Presses are ignored
    pub disabled: bool,
    /// The overlay is currently open
    pub open: bool,
}

/// One row of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Index into the unfiltered data
    pub index: usize,
    /// Position in the rendered (filtered) list
    pub position: usize,
    pub selected: bool,
    /// Presses are ignored
    pub disabled: bool,
    pub style: BoxStyle,
    pub content: Content,
}

/// The scrollable row list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub rows: Vec<RowView>,
    /// Fixed row height, lets the list compute offsets without measuring
    pub row_height: f32,
    pub estimated_row_size: f32,
    /// Fraction of the visible length from the end at which scroll-end fires
    pub end_reached_threshold: f32,
    /// Placeholder shown instead of rows when the list is empty
    pub empty: Option<Content>,
}

/// Search input above the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFieldView {
    pub text: String,
    pub placeholder: String,
    pub placeholder_color: Color,
    pub style: BoxStyle,
    pub text_style: TextStyle,
    pub width: f32,
    pub left_icon: Option<Content>,
    pub right_icon: Option<Content>,
}

/// Select-all switch above the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectAllView {
    pub label: Content,
    pub on: bool,
}

/// The whole overlay: backdrop plus positioned window.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub visible: bool,
    pub status_bar_translucent: bool,
    pub backdrop: Color,
    pub window: WindowStyle,
    pub window_style: BoxStyle,
    pub select_all: Option<SelectAllView>,
    pub search: Option<SearchFieldView>,
    pub list: ListView,
}

// =============================================================================
// Consumer renderer signatures
// =============================================================================

/// Row label for an item: `(item, index) -> text`.
pub type RowTextFn<T> = dyn Fn(&T, usize) -> String;

/// Custom row content: `(item, index, selected, disabled) -> content`.
pub type RowContentFn<T> = dyn Fn(&T, usize, bool, bool) -> Content;

/// Button label after a single selection: `(item, index) -> text`.
pub type ButtonTextFn<T> = dyn Fn(&T, usize) -> String;

/// Custom button content from the current selection, in selection order.
pub type ButtonContentFn<T> = dyn Fn(&[(usize, &T)]) -> Content;

/// Dropdown icon, given whether the overlay is open.
pub type IconFn = dyn Fn(bool) -> Content;

/// Search field icon.
pub type SearchIconFn = dyn Fn() -> Content;
