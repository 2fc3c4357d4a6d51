//! Centralized constants for dropdown_ui
//!
//! All magic numbers and default texts are defined here for consistency
//! and easy maintenance.

// =============================================================================
// Rows
// =============================================================================

/// Row height used when the row style does not set one
pub const DEFAULT_ROW_HEIGHT: f32 = 50.0;

/// Estimated row size handed to the list primitive
pub const ESTIMATED_ROW_SIZE: f32 = 50.0;

/// Rows render a single line of text by default
pub const ROW_TEXT_LINES: u32 = 1;

// =============================================================================
// Window
// =============================================================================

/// Maximum window height as a fraction of the viewport height
pub const MAX_HEIGHT_FRACTION: f32 = 0.4;

/// Window height when the data list is empty (room for the placeholder)
pub const EMPTY_WINDOW_HEIGHT: f32 = 150.0;

/// Extra content height taken by the search input
pub const SEARCH_BAR_HEIGHT: f32 = 50.0;

/// Extra content height taken by the select-all toggle
pub const SELECT_ALL_HEIGHT: f32 = 40.0;

/// Gap between the trigger and the window
pub const WINDOW_GAP: f32 = 2.0;

/// Bottom viewport margin that the window may not extend into before flipping
pub const VIEWPORT_BOTTOM_MARGIN: f32 = 18.0;

// =============================================================================
// Scrolling
// =============================================================================

/// Selected positions at or beyond this slot trigger auto-scroll on open
pub const AUTO_SCROLL_MIN_POSITION: usize = 3;

/// Distance from the end (in visible lengths) at which scroll-end fires
pub const END_REACHED_THRESHOLD: f32 = 0.5;

// =============================================================================
// Texts
// =============================================================================

/// Button label when nothing is selected and no default text is configured
pub const DEFAULT_BUTTON_TEXT: &str = "Select an option.";

/// Placeholder shown when the (filtered) list is empty
pub const EMPTY_LIST_TEXT: &str = "List Empty";

/// Label next to the select-all switch
pub const SELECT_ALL_LABEL: &str = "Select All";

/// Separator when summarising a multi-selection on the button
pub const MULTI_LABEL_SEPARATOR: &str = ", ";

/// Button text lines when not configured
pub const DEFAULT_TEXT_LINES: u32 = 1;

/// Margin above the empty-list placeholder
pub const EMPTY_TEXT_MARGIN_TOP: f32 = 20.0;

/// Label font size for the select-all toggle
pub const SELECT_ALL_FONT_SIZE: f32 = 10.0;
