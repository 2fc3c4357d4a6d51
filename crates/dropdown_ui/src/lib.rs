//! dropdown_ui - A toolkit-independent select dropdown
//!
//! This crate provides the selection state, window placement and overlay
//! composition of a dropdown, with a callback-based builder API. Drawing is
//! left to the host through the [`Platform`] trait.

#[macro_use]
mod macros;

mod callback;
pub mod constants;
mod event;
mod item;
mod layout;
mod placement;
mod platform;
mod selection;
mod state;
mod style;
mod theme;
mod view;
mod widgets;

pub use callback::{Callback, Callback0, Render};
pub use event::{Event, KeyCode};
pub use item::DropdownItem;
pub use layout::{ButtonLayout, LayoutDirection, Point, Rectangle, Size, Viewport};
pub use placement::{compute_window_style, max_window_height, Placement, WindowSizing, WindowStyle};
pub use platform::{ElementId, HeadlessPlatform, Platform, PlatformError, ScrollRequest};
pub use selection::{Selection, SelectionMode};
pub use state::SelectionStore;
pub use style::{BoxStyle, TextAlign, TextStyle, WindowOverrides};
pub use theme::{Color, Theme};
pub use view::{
    ButtonView, Content, IconPosition, ListView, OverlayView, RowView, SearchFieldView,
    SelectAllView,
};

// Re-export widgets
pub use widgets::{dropdown, Dropdown, DropdownOptions, OverlayCloseHelper};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{Event, KeyCode};
    pub use crate::item::DropdownItem;
    pub use crate::layout::{Point, Rectangle, Viewport};
    pub use crate::platform::{ElementId, HeadlessPlatform, Platform, PlatformError};
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::style::{BoxStyle, TextStyle};
    pub use crate::theme::{Color, Theme};
    pub use crate::view::Content;
    pub use crate::widgets::{dropdown, Dropdown, DropdownOptions};
}
