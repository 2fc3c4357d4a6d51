//! Platform capabilities the dropdown depends on.
//!
//! The dropdown core only needs three things from the host UI toolkit: a way
//! to measure its trigger, a modal overlay, and a scrollable list. Anything
//! implementing [`Platform`] can host it.

use std::collections::HashMap;

use crate::layout::{ButtonLayout, Rectangle, Viewport};
use crate::view::{ButtonView, ListView, OverlayView};

/// Handle of a mounted element, used to measure it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementId(pub u64);

/// Errors reported by platform capabilities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlatformError {
    /// The element has not been laid out yet or was unmounted
    #[error("Element {0:?} is not mounted")]
    NotMounted(ElementId),

    /// The viewport has no usable area
    #[error("Viewport has no usable area ({width}x{height})")]
    EmptyViewport {
        /// Reported viewport width
        width: f32,
        /// Reported viewport height
        height: f32,
    },
}

/// Capabilities of the host UI toolkit.
pub trait Platform {
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Measure a mounted element in absolute screen coordinates.
    fn measure_element(&mut self, id: ElementId) -> Result<ButtonLayout, PlatformError>;

    /// Draw the trigger button.
    fn render_button(&mut self, button: &ButtonView);

    /// Show or hide the modal overlay (backdrop plus positioned window).
    fn render_modal_overlay(&mut self, overlay: &OverlayView);

    /// Draw the row list inside the current overlay window.
    fn render_scrollable_list(&mut self, list: &ListView);

    /// Scroll the row list to an absolute offset.
    fn scroll_list_to_offset(&mut self, offset: f32, animated: bool);
}

/// A scroll request recorded by [`HeadlessPlatform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset: f32,
    pub animated: bool,
}

/// In-memory platform that records everything it is asked to show.
///
/// Used by the demo binary and by tests. Elements are "mounted" by giving
/// them a rectangle with [`HeadlessPlatform::mount`].
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    viewport: Viewport,
    elements: HashMap<ElementId, Rectangle>,
    /// Last button drawn
    pub button: Option<ButtonView>,
    /// Last overlay drawn (a hidden overlay is recorded too)
    pub overlay: Option<OverlayView>,
    /// Last list drawn
    pub list: Option<ListView>,
    /// Every scroll request, oldest first
    pub scrolls: Vec<ScrollRequest>,
    /// Number of measurements performed
    pub measurements: usize,
}

impl HeadlessPlatform {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: HashMap::new(),
            button: None,
            overlay: None,
            list: None,
            scrolls: Vec::new(),
            measurements: 0,
        }
    }

    /// Mount (or move) an element at the given absolute rectangle.
    pub fn mount(&mut self, id: ElementId, bounds: Rectangle) {
        self.elements.insert(id, bounds);
    }

    /// Remove an element; later measurements fail.
    pub fn unmount(&mut self, id: ElementId) {
        self.elements.remove(&id);
    }

    /// Change the viewport, e.g. after a rotation.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether the last overlay drawn was visible.
    pub fn overlay_visible(&self) -> bool {
        self.overlay.as_ref().is_some_and(|o| o.visible)
    }
}

impl Platform for HeadlessPlatform {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn measure_element(&mut self, id: ElementId) -> Result<ButtonLayout, PlatformError> {
        if self.viewport.size().is_degenerate() {
            return Err(PlatformError::EmptyViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.measurements += 1;
        self.elements
            .get(&id)
            .copied()
            .ok_or(PlatformError::NotMounted(id))
    }

    fn render_button(&mut self, button: &ButtonView) {
        log::trace!("headless: button {:?}", button.content);
        self.button = Some(button.clone());
    }

    fn render_modal_overlay(&mut self, overlay: &OverlayView) {
        log::trace!("headless: overlay visible={} at {:?}", overlay.visible, overlay.window.bounds);
        self.overlay = Some(overlay.clone());
        if !overlay.visible {
            self.list = None;
        }
    }

    fn render_scrollable_list(&mut self, list: &ListView) {
        log::trace!("headless: list with {} rows", list.rows.len());
        self.list = Some(list.clone());
    }

    fn scroll_list_to_offset(&mut self, offset: f32, animated: bool) {
        log::trace!("headless: scroll to {} (animated={})", offset, animated);
        self.scrolls.push(ScrollRequest { offset, animated });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_mounted_element() {
        let mut platform = HeadlessPlatform::new(Viewport::new(360.0, 640.0));
        let id = ElementId(7);
        platform.mount(id, Rectangle::new(10.0, 20.0, 200.0, 50.0));
        assert_eq!(platform.measure_element(id), Ok(Rectangle::new(10.0, 20.0, 200.0, 50.0)));
        assert_eq!(platform.measurements, 1);
    }

    #[test]
    fn test_measure_unmounted_fails() {
        let mut platform = HeadlessPlatform::new(Viewport::new(360.0, 640.0));
        assert_eq!(
            platform.measure_element(ElementId(1)),
            Err(PlatformError::NotMounted(ElementId(1)))
        );
    }

    #[test]
    fn test_measure_with_empty_viewport_fails() {
        let mut platform = HeadlessPlatform::new(Viewport::new(0.0, 640.0));
        platform.mount(ElementId(1), Rectangle::new(0.0, 0.0, 10.0, 10.0));
        assert!(matches!(
            platform.measure_element(ElementId(1)),
            Err(PlatformError::EmptyViewport { .. })
        ));
    }
}
