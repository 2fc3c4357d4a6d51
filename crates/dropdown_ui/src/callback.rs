//! Callback abstraction for consumer-supplied event handlers
//!
//! Every notification the dropdown emits (focus, blur, select, scroll-end,
//! search text changes) goes through a `Callback<T, M>`. An unset callback
//! simply produces no message, so the controller never has to null-check.
//!
//! # Examples
//!
//! ```
//! use dropdown_ui::Callback;
//!
//! let on_pick: Callback<usize, String> = Callback::new(|i| format!("picked {i}"));
//! assert_eq!(on_pick.call(2), Some("picked 2".to_string()));
//!
//! let unset: Callback<usize, String> = Callback::none();
//! assert_eq!(unset.call(2), None);
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional event handler.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (selected item, search text, ...)
/// - `M`: The message type returned to the host
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

// =============================================================================
// Unit-like Callback (Callback0)
// =============================================================================

/// A callback that takes no parameters (`on_focus`, `on_blur`, `on_scroll_end_reached`).
pub type Callback0<M> = Callback<(), M>;

impl<M> Callback0<M> {
    /// Call the callback without any parameters.
    ///
    /// This is a convenience method that's equivalent to `call(())`.
    pub fn emit(&self) -> Option<M> {
        self.call(())
    }
}

// =============================================================================
// Renderer hooks
// =============================================================================

/// A consumer-supplied function that produces something for the view, such as
/// a row label or a custom content tree.
///
/// Unlike [`Callback`] these never produce host messages. They are pure
/// presentation hooks and may borrow their arguments.
pub struct Render<F: ?Sized> {
    f: Option<Box<F>>,
}

impl<F: ?Sized> Render<F> {
    /// Create an unset hook.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Wrap an already boxed function.
    pub fn from_box(f: Box<F>) -> Self {
        Self { f: Some(f) }
    }

    /// Borrow the function, if set.
    pub fn get(&self) -> Option<&F> {
        self.f.as_deref()
    }

    /// Check if the hook is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<F: ?Sized> Default for Render<F> {
    fn default() -> Self {
        Self::none()
    }
}

impl<F: ?Sized> fmt::Debug for Render<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Render")
            .field("set", &self.is_some())
            .finish()
    }
}
