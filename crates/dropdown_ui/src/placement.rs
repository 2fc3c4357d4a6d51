//! Layout engine: where the dropdown window goes and how big it is.
//!
//! The window opens directly below the trigger. If that would run past the
//! bottom of the viewport it flips above the trigger instead. Its height is the
//! content height capped at a fraction of the viewport, so long lists scroll
//! inside the window. The result is always clamped into the viewport.
//!
//! Placement depends on where the trigger is right now, so it is recomputed
//! on every open and never cached across opens.

use crate::constants::{
    DEFAULT_ROW_HEIGHT, EMPTY_WINDOW_HEIGHT, MAX_HEIGHT_FRACTION, SEARCH_BAR_HEIGHT,
    SELECT_ALL_HEIGHT, VIEWPORT_BOTTOM_MARGIN, WINDOW_GAP,
};
use crate::layout::{ButtonLayout, LayoutDirection, Rectangle, Viewport};

/// Which side of the trigger the window ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Below,
    Above,
}

/// Everything that feeds the window size apart from the trigger geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSizing {
    /// Number of rows in the data list
    pub row_count: usize,
    /// Height of each row
    pub row_height: f32,
    /// The search input is shown above the rows
    pub search_visible: bool,
    /// The select-all toggle is shown above the rows
    pub select_all_visible: bool,
    /// Explicit window width (defaults to the trigger width)
    pub width: Option<f32>,
    /// Explicit window height (still capped to the viewport)
    pub height: Option<f32>,
    /// Explicit horizontal offset (defaults to the trigger's edge)
    pub left: Option<f32>,
}

impl Default for WindowSizing {
    fn default() -> Self {
        Self {
            row_count: 0,
            row_height: DEFAULT_ROW_HEIGHT,
            search_visible: false,
            select_all_visible: false,
            width: None,
            height: None,
            left: None,
        }
    }
}

impl WindowSizing {
    /// Fixed height added above the rows by the search and select-all affordances.
    pub fn header_height(&self) -> f32 {
        let mut height = 0.0;
        if self.search_visible {
            height += SEARCH_BAR_HEIGHT;
        }
        if self.select_all_visible {
            height += SELECT_ALL_HEIGHT;
        }
        height
    }

    /// Natural height of the window before the viewport cap.
    pub fn content_height(&self) -> f32 {
        if let Some(height) = self.height {
            return height.max(0.0);
        }
        if self.row_count == 0 {
            return EMPTY_WINDOW_HEIGHT;
        }
        self.row_count as f32 * self.row_height + self.header_height()
    }
}

/// Derived bounding box of the dropdown window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowStyle {
    /// Absolute position and size of the window
    pub bounds: Rectangle,
    /// Side of the trigger the window is on
    pub placement: Placement,
    /// The window is shorter than its content and scrolls internally
    pub scrolls: bool,
}

/// Tallest window allowed for this viewport.
pub fn max_window_height(viewport: &Viewport) -> f32 {
    (viewport.height * MAX_HEIGHT_FRACTION).max(0.0)
}

/// Compute the window box for a trigger measured at `button`.
pub fn compute_window_style(
    button: &ButtonLayout,
    viewport: &Viewport,
    sizing: &WindowSizing,
) -> WindowStyle {
    let content_height = sizing.content_height();
    let height = content_height.min(max_window_height(viewport));
    let width = sizing
        .width
        .unwrap_or(button.width)
        .clamp(0.0, viewport.width.max(0.0));

    let below_y = button.bottom() + WINDOW_GAP;
    let overflows = below_y + height > viewport.height - VIEWPORT_BOTTOM_MARGIN;
    let (placement, y) = if overflows {
        (Placement::Above, button.y - WINDOW_GAP - height)
    } else {
        (Placement::Below, below_y)
    };
    let y = y.clamp(0.0, (viewport.height - height).max(0.0));

    let x = match (sizing.left, viewport.direction) {
        (Some(left), _) => left,
        (None, LayoutDirection::Ltr) => button.x,
        (None, LayoutDirection::Rtl) => button.right() - width,
    };
    let x = x.clamp(0.0, (viewport.width - width).max(0.0));

    let style = WindowStyle {
        bounds: Rectangle::new(x, y, width, height),
        placement,
        scrolls: height < content_height,
    };
    log::debug!(
        "placement: button={:?} viewport={}x{} -> {:?}",
        button,
        viewport.width,
        viewport.height,
        style
    );
    style
}
