use crate::layout::Point;

/// Interactions the host routes to a dropdown.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The trigger button was tapped
    ButtonPressed,
    /// The backdrop around the window was tapped
    BackdropPressed,
    /// A raw tap anywhere on screen while the overlay is open
    PointerPressed { position: Point },
    /// A row was tapped; `position` is its place in the rendered list
    RowPressed { position: usize },
    /// The search input text changed
    SearchTextChanged(String),
    /// The select-all switch was flipped
    SelectAllToggled,
    /// The row list finished its first layout after opening
    ListLaidOut,
    /// The row list scrolled close to its end
    ScrollEndReached,
    /// Keyboard key pressed
    KeyPressed { key: KeyCode },
    /// The host window lost focus
    FocusLost,
}

/// Keyboard keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Enter,
}
