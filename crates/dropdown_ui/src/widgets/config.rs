//! Declarative dropdown options.
//!
//! Everything that is not a callback, a renderer or an item value lives in
//! [`DropdownOptions`], so a host can keep it in a config file. Every field has
//! a default; an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROW_HEIGHT, DEFAULT_TEXT_LINES};
use crate::selection::SelectionMode;
use crate::style::{BoxStyle, TextStyle, WindowOverrides};
use crate::theme::Color;
use crate::view::IconPosition;

/// Non-callback configuration of a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownOptions {
    // ==========================================================================
    // Data & selection
    // ==========================================================================
    /// Button label while nothing is selected
    pub default_button_text: Option<String>,
    /// Fixed button label once something is selected
    pub button_text_after_selection: Option<String>,
    /// Row selected initially and on reset (wins over a by-value default)
    pub default_value_by_index: Option<usize>,
    /// Button presses are ignored
    pub disabled: bool,
    /// Do not scroll to the selected row on open
    pub disable_auto_scroll: bool,
    /// Rows that cannot be tapped (indices into the unfiltered data)
    pub disabled_indexes: Vec<usize>,

    // ==========================================================================
    // Button
    // ==========================================================================
    pub button_style: BoxStyle,
    pub button_text_style: TextStyle,
    pub icon_position: IconPosition,
    /// Show the dropdown icon without any label
    pub only_dropdown_icon: bool,
    /// Maximum lines of the button label
    pub text_number_of_lines: u32,

    // ==========================================================================
    // Overlay
    // ==========================================================================
    /// Let the overlay draw under a translucent status bar
    pub status_bar_translucent: bool,
    /// Window size and look overrides
    pub dropdown_style: WindowOverrides,
    /// Backdrop color
    pub dropdown_overlay_color: Option<Color>,

    // ==========================================================================
    // Rows
    // ==========================================================================
    /// Row look; `height` sets the fixed row height
    pub row_style: BoxStyle,
    pub row_text_style: TextStyle,
    pub selected_row_style: BoxStyle,
    pub selected_row_text_style: TextStyle,
    pub disabled_style: BoxStyle,

    // ==========================================================================
    // Search
    // ==========================================================================
    /// Show a search input above the rows
    pub search: bool,
    pub search_input_style: BoxStyle,
    pub search_input_text_color: Option<Color>,
    pub search_input_text_style: TextStyle,
    pub search_placeholder: Option<String>,
    pub search_placeholder_color: Option<Color>,
    /// Field of structured items to match against (all fields when unset)
    pub search_key: Option<String>,

    // ==========================================================================
    // Multiple selection
    // ==========================================================================
    pub multiple_select: bool,
    /// Show the select-all switch (multiple selection only)
    pub allow_select_all: bool,

    // ==========================================================================
    // Misc
    // ==========================================================================
    /// Text style of the empty-list placeholder
    pub empty_style: TextStyle,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            default_button_text: None,
            button_text_after_selection: None,
            default_value_by_index: None,
            disabled: false,
            disable_auto_scroll: false,
            disabled_indexes: Vec::new(),
            button_style: BoxStyle::default(),
            button_text_style: TextStyle::default(),
            icon_position: IconPosition::default(),
            only_dropdown_icon: false,
            text_number_of_lines: DEFAULT_TEXT_LINES,
            status_bar_translucent: false,
            dropdown_style: WindowOverrides::default(),
            dropdown_overlay_color: None,
            row_style: BoxStyle::default(),
            row_text_style: TextStyle::default(),
            selected_row_style: BoxStyle::default(),
            selected_row_text_style: TextStyle::default(),
            disabled_style: BoxStyle::default(),
            search: false,
            search_input_style: BoxStyle::default(),
            search_input_text_color: None,
            search_input_text_style: TextStyle::default(),
            search_placeholder: None,
            search_placeholder_color: None,
            search_key: None,
            multiple_select: false,
            allow_select_all: false,
            empty_style: TextStyle::default(),
        }
    }
}

impl DropdownOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection_mode(&self) -> SelectionMode {
        if self.multiple_select {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }

    /// Fixed row height: the row style's height or the default.
    pub fn row_height(&self) -> f32 {
        self.row_style
            .height
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Select-all only exists in multiple selection.
    pub fn select_all_enabled(&self) -> bool {
        self.multiple_select && self.allow_select_all
    }

    pub fn is_row_disabled(&self, index: usize) -> bool {
        self.disabled_indexes.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let parsed: DropdownOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, DropdownOptions::default());
        assert_eq!(parsed.text_number_of_lines, 1);
        assert_eq!(parsed.row_height(), DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_partial_json() {
        let parsed: DropdownOptions = serde_json::from_str(
            r#"{
                "search": true,
                "multiple_select": true,
                "allow_select_all": true,
                "row_style": { "height": 40.0 },
                "disabled_indexes": [1, 3],
                "icon_position": "left"
            }"#,
        )
        .unwrap();
        assert!(parsed.search);
        assert_eq!(parsed.selection_mode(), SelectionMode::Multiple);
        assert!(parsed.select_all_enabled());
        assert_eq!(parsed.row_height(), 40.0);
        assert!(parsed.is_row_disabled(3));
        assert!(!parsed.is_row_disabled(2));
        assert_eq!(parsed.icon_position, IconPosition::Left);
    }

    #[test]
    fn test_select_all_needs_multiple() {
        let options = DropdownOptions {
            allow_select_all: true,
            ..DropdownOptions::default()
        };
        assert!(!options.select_all_enabled());
    }

    #[test]
    fn test_invalid_row_height_falls_back() {
        let mut options = DropdownOptions::new();
        options.row_style.height = Some(0.0);
        assert_eq!(options.row_height(), DEFAULT_ROW_HEIGHT);
    }
}
