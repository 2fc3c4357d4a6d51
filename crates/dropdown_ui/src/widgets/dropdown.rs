//! Dropdown widget for selecting one or many items from a list.
//!
//! The widget is a trigger button plus an overlay. Tapping the button
//! measures it, places the window below it (or above it when there isn't
//! enough room) and opens the overlay. The overlay closes when:
//! - The backdrop is tapped (or Escape is pressed, or focus is lost)
//! - A row is tapped in single selection
//! - The host calls [`Dropdown::close_dropdown`]
//!
//! In single selection `on_select` fires on the row tap. In multiple
//! selection rows toggle and `on_select_many` fires once, on close, with the
//! whole selection.
//!
//! All notifications are returned as host messages from the method that
//! caused them, in the order they happened.

use crate::callback::{Callback, Callback0, Render};
use crate::constants::{
    AUTO_SCROLL_MIN_POSITION, DEFAULT_BUTTON_TEXT, END_REACHED_THRESHOLD, ESTIMATED_ROW_SIZE,
    MULTI_LABEL_SEPARATOR,
};
use crate::event::Event;
use crate::item::DropdownItem;
use crate::layout::{ButtonLayout, Viewport};
use crate::placement::{compute_window_style, WindowSizing, WindowStyle};
use crate::platform::{ElementId, Platform, PlatformError};
use crate::selection::Selection;
use crate::state::SelectionStore;
use crate::style::{BoxStyle, TextStyle};
use crate::theme::Theme;
use crate::view::{
    ButtonContentFn, ButtonTextFn, ButtonView, Content, IconFn, ListView, OverlayView,
    RowContentFn, RowTextFn, SearchIconFn,
};
use crate::widgets::config::DropdownOptions;
use crate::widgets::overlay::{OverlayCloseHelper, OverlayComposer};
use crate::{builder_field, builder_option, callback_setter};

/// A selectable dropdown: trigger button, overlay window and selection state.
pub struct Dropdown<T, M> {
    /// Handle used to measure the trigger
    id: ElementId,
    options: DropdownOptions,
    theme: Theme,
    store: SelectionStore<T>,
    is_open: bool,
    /// Trigger geometry measured on the last open
    button_layout: Option<ButtonLayout>,
    /// Viewport seen on the last open
    viewport: Option<Viewport>,
    /// Window placement computed on the last open
    window: Option<WindowStyle>,
    /// Auto-scroll still has to run for this open
    auto_scroll_pending: bool,

    on_select: Callback<(T, usize), M>,
    on_select_many: Callback<(Vec<T>, Vec<usize>), M>,
    on_focus: Callback0<M>,
    on_blur: Callback0<M>,
    on_scroll_end_reached: Callback0<M>,
    on_change_search_input_text: Callback<String, M>,

    button_text_after_selection: Render<ButtonTextFn<T>>,
    row_text_for_selection: Render<RowTextFn<T>>,
    custom_row: Render<RowContentFn<T>>,
    custom_button: Render<ButtonContentFn<T>>,
    dropdown_icon: Render<IconFn>,
    search_left_icon: Render<SearchIconFn>,
    search_right_icon: Render<SearchIconFn>,
}

impl<T: DropdownItem + Clone + PartialEq, M> Dropdown<T, M> {
    /// Create a closed, single-selection dropdown over `data`.
    pub fn new(id: ElementId, data: Vec<T>) -> Self {
        let options = DropdownOptions::default();
        Self {
            id,
            store: SelectionStore::new(data, options.selection_mode()),
            options,
            theme: Theme::default(),
            is_open: false,
            button_layout: None,
            viewport: None,
            window: None,
            auto_scroll_pending: false,
            on_select: Callback::none(),
            on_select_many: Callback::none(),
            on_focus: Callback::none(),
            on_blur: Callback::none(),
            on_scroll_end_reached: Callback::none(),
            on_change_search_input_text: Callback::none(),
            button_text_after_selection: Render::none(),
            row_text_for_selection: Render::none(),
            custom_row: Render::none(),
            custom_button: Render::none(),
            dropdown_icon: Render::none(),
            search_left_icon: Render::none(),
            search_right_icon: Render::none(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Apply a full set of declarative options.
    pub fn with_options(mut self, options: DropdownOptions) -> Self {
        self.options = options;
        self.sync_store();
        self
    }

    // Callback setters using macros
    callback_setter!(on_select, item: T, index: usize);
    callback_setter!(on_select_many, items: Vec<T>, indexes: Vec<usize>);
    callback_setter!(on_focus);
    callback_setter!(on_blur);
    callback_setter!(on_scroll_end_reached);

    // Builder methods using macros
    builder_field!(theme, Theme);
    builder_field!(disabled, options.disabled, bool);
    builder_field!(disable_auto_scroll, options.disable_auto_scroll, bool);
    builder_field!(disabled_indexes, options.disabled_indexes, Vec<usize>);
    builder_field!(button_style, options.button_style, BoxStyle);
    builder_field!(button_text_style, options.button_text_style, TextStyle);
    builder_field!(only_dropdown_icon, options.only_dropdown_icon, bool);
    builder_field!(text_number_of_lines, options.text_number_of_lines, u32);
    builder_field!(row_style, options.row_style, BoxStyle);
    builder_field!(row_text_style, options.row_text_style, TextStyle);
    builder_field!(selected_row_style, options.selected_row_style, BoxStyle);
    builder_field!(selected_row_text_style, options.selected_row_text_style, TextStyle);
    builder_field!(disabled_style, options.disabled_style, BoxStyle);
    builder_field!(search, options.search, bool);
    builder_field!(allow_select_all, options.allow_select_all, bool);
    builder_field!(status_bar_translucent, options.status_bar_translucent, bool);
    builder_field!(empty_style, options.empty_style, TextStyle);
    builder_option!(default_button_text, options.default_button_text, String);
    builder_option!(button_text, options.button_text_after_selection, String);
    builder_option!(search_placeholder, options.search_placeholder, String);
    builder_option!(dropdown_overlay_color, options.dropdown_overlay_color, crate::Color);

    /// Pick many rows instead of one.
    pub fn multiple_select(mut self, multiple: bool) -> Self {
        self.options.multiple_select = multiple;
        self.sync_store();
        self
    }

    /// Match structured items on this field only.
    pub fn search_key(mut self, key: impl Into<String>) -> Self {
        self.options.search_key = Some(key.into());
        self.sync_store();
        self
    }

    /// Row selected initially and on reset.
    pub fn default_value_by_index(mut self, index: usize) -> Self {
        self.options.default_value_by_index = Some(index);
        self.sync_store();
        self
    }

    /// Item selected initially and on reset (first equal item).
    pub fn default_value(mut self, value: T) -> Self {
        self.store.set_default_value(Some(value));
        self
    }

    /// Receive every search text change. Setting this hands filtering over to
    /// the host: the row list is no longer filtered internally.
    pub fn on_change_search_input_text<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> M + 'static,
    {
        self.on_change_search_input_text = Callback::new(f);
        self.store.set_external_filtering(true);
        self
    }

    /// Button label after a single selection.
    pub fn button_text_after_selection<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> String + 'static,
    {
        self.button_text_after_selection = Render::from_box(Box::new(f));
        self
    }

    /// Row label for each item.
    pub fn row_text_for_selection<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> String + 'static,
    {
        self.row_text_for_selection = Render::from_box(Box::new(f));
        self
    }

    /// Custom row content: `(item, index, selected, disabled)`.
    pub fn render_custom_row<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize, bool, bool) -> Content + 'static,
    {
        self.custom_row = Render::from_box(Box::new(f));
        self
    }

    /// Custom button content from the current selection.
    pub fn render_custom_button<F>(mut self, f: F) -> Self
    where
        F: Fn(&[(usize, &T)]) -> Content + 'static,
    {
        self.custom_button = Render::from_box(Box::new(f));
        self
    }

    /// Dropdown icon, given whether the overlay is open.
    pub fn render_dropdown_icon<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) -> Content + 'static,
    {
        self.dropdown_icon = Render::from_box(Box::new(f));
        self
    }

    pub fn render_search_left_icon<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Content + 'static,
    {
        self.search_left_icon = Render::from_box(Box::new(f));
        self
    }

    pub fn render_search_right_icon<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Content + 'static,
    {
        self.search_right_icon = Render::from_box(Box::new(f));
        self
    }

    fn sync_store(&mut self) {
        self.store.set_mode(self.options.selection_mode());
        self.store.set_search_key(self.options.search_key.clone());
        self.store.set_default_index(self.options.default_value_by_index);
    }

    // =========================================================================
    // Declarative inputs changing after construction
    // =========================================================================

    /// Replace the data list; the selection is rebuilt from the defaults.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.store.set_data(data);
        self.replace_window();
    }

    /// Replace both defaults; the selection is rebuilt from them.
    pub fn set_defaults(&mut self, by_index: Option<usize>, by_value: Option<T>) {
        self.options.default_value_by_index = by_index;
        self.store.set_defaults(by_index, by_value);
        self.replace_window();
    }

    /// Recompute the window of an open dropdown from its last measurement.
    /// Row count and header affordances depend on the data.
    fn replace_window(&mut self) {
        if !self.is_open {
            return;
        }
        if let (Some(button), Some(viewport)) = (self.button_layout, self.viewport) {
            let window = compute_window_style(&button, &viewport, &self.window_sizing());
            log::debug!("Dropdown {:?}: window re-placed at {:?}", self.id, window.bounds);
            self.window = Some(window);
        }
    }

    // =========================================================================
    // Imperative handle
    // =========================================================================

    /// Restore the default selection and clear the search text.
    pub fn reset(&mut self) {
        log::debug!("Dropdown {:?}: reset", self.id);
        self.store.reset();
    }

    /// Measure the trigger and open the overlay.
    ///
    /// Opening an already open dropdown re-measures and re-places the window
    /// without a second focus notification. A failed measurement leaves the
    /// dropdown as it was.
    pub fn open_dropdown(&mut self, platform: &mut impl Platform) -> Result<Vec<M>, PlatformError> {
        let button = match platform.measure_element(self.id) {
            Ok(button) => button,
            Err(err) => {
                log::warn!("Dropdown {:?}: cannot open, measurement failed: {}", self.id, err);
                return Err(err);
            }
        };
        let viewport = platform.viewport();
        let window = compute_window_style(&button, &viewport, &self.window_sizing());
        self.button_layout = Some(button);
        self.viewport = Some(viewport);
        self.window = Some(window);
        self.auto_scroll_pending = true;

        let mut messages = Vec::new();
        if !self.is_open {
            self.is_open = true;
            log::debug!("Dropdown {:?}: opened at {:?}", self.id, window.bounds);
            messages.extend(self.on_focus.emit());
        }
        Ok(messages)
    }

    /// Close the overlay. No-op when already closed.
    ///
    /// Multiple selection reports the whole selection here. The search text is
    /// cleared and the blur notification fires last.
    pub fn close_dropdown(&mut self) -> Vec<M> {
        if !self.is_open {
            return Vec::new();
        }
        let mut messages = Vec::new();
        if let Selection::Multiple(_) = self.store.selection() {
            let (indexes, items): (Vec<usize>, Vec<T>) = self
                .store
                .selected_items()
                .into_iter()
                .map(|(i, item)| (i, item.clone()))
                .unzip();
            messages.extend(self.on_select_many.call((items, indexes)));
        }
        self.is_open = false;
        self.button_layout = None;
        self.viewport = None;
        self.window = None;
        self.auto_scroll_pending = false;
        self.store.set_search_text("");
        log::debug!("Dropdown {:?}: closed", self.id);
        messages.extend(self.on_blur.emit());
        messages
    }

    /// Select a row by its index in the data, without any notification.
    pub fn select_index(&mut self, index: usize) -> bool {
        self.store.select_item(index)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route a host interaction and return the resulting messages.
    pub fn on_event(&mut self, event: &Event, platform: &mut impl Platform) -> Vec<M> {
        if self.is_open {
            if let Some(window) = self.window {
                if OverlayCloseHelper::should_close(event, window.bounds) {
                    return self.close_dropdown();
                }
            }
        }

        match event {
            Event::ButtonPressed => self.press_button(platform),
            Event::RowPressed { position } if self.is_open => self.press_row(*position),
            Event::SearchTextChanged(text) if self.is_open && self.options.search => {
                self.change_search_text(text)
            }
            Event::SelectAllToggled if self.is_open && self.options.select_all_enabled() => {
                self.store.toggle_select_all(None);
                Vec::new()
            }
            Event::ListLaidOut if self.is_open => {
                self.auto_scroll(platform);
                Vec::new()
            }
            Event::ScrollEndReached if self.is_open => {
                self.on_scroll_end_reached.emit().into_iter().collect()
            }
            _ => Vec::new(),
        }
    }

    fn press_button(&mut self, platform: &mut impl Platform) -> Vec<M> {
        if self.options.disabled {
            log::debug!("Dropdown {:?}: press ignored, disabled", self.id);
            return Vec::new();
        }
        if self.is_open {
            return self.close_dropdown();
        }
        self.open_dropdown(platform).unwrap_or_default()
    }

    fn press_row(&mut self, position: usize) -> Vec<M> {
        let Some(index) = self.store.original_index(position) else {
            return Vec::new();
        };
        if self.options.is_row_disabled(index) {
            log::debug!("Dropdown {:?}: row {} is disabled", self.id, index);
            return Vec::new();
        }
        if let Selection::Multiple(_) = self.store.selection() {
            self.store.select_item(index);
            return Vec::new();
        }

        let Some(item) = self.store.item(index).cloned() else {
            return Vec::new();
        };
        let mut messages = self.close_dropdown();
        messages.extend(self.on_select.call((item, index)));
        self.store.select_item(index);
        messages
    }

    fn change_search_text(&mut self, text: &str) -> Vec<M> {
        self.store.set_search_text(text);
        self.on_change_search_input_text
            .call(text.to_string())
            .into_iter()
            .collect()
    }

    fn auto_scroll(&mut self, platform: &mut impl Platform) {
        if !std::mem::take(&mut self.auto_scroll_pending) || self.options.disable_auto_scroll {
            return;
        }
        let Some(position) = self
            .store
            .selection()
            .first()
            .and_then(|index| self.store.visible_position(index))
        else {
            return;
        };
        if position >= AUTO_SCROLL_MIN_POSITION {
            let offset = self.options.row_height() * position as f32;
            log::debug!("Dropdown {:?}: auto-scroll to row {} ({}px)", self.id, position, offset);
            platform.scroll_list_to_offset(offset, true);
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    fn window_sizing(&self) -> WindowSizing {
        let has_data = !self.store.data().is_empty();
        let overrides = &self.options.dropdown_style;
        WindowSizing {
            row_count: self.store.data().len(),
            row_height: self.options.row_height(),
            search_visible: has_data && self.options.search,
            select_all_visible: has_data && self.options.select_all_enabled(),
            width: overrides.style.width,
            height: overrides.style.height,
            left: overrides.left,
        }
    }

    /// Text shown on the trigger button.
    pub fn button_label(&self) -> String {
        let default_text = || {
            self.options
                .default_button_text
                .clone()
                .unwrap_or_else(|| DEFAULT_BUTTON_TEXT.to_string())
        };
        let selected = self.store.selected_items();

        match self.store.selection() {
            Selection::Multiple(_) => {
                if selected.is_empty() {
                    return default_text();
                }
                if let Some(text) = &self.options.button_text_after_selection {
                    return text.clone();
                }
                selected
                    .iter()
                    .map(|&(i, item)| match self.button_text_after_selection.get() {
                        Some(format) => format(item, i),
                        None => item.label(),
                    })
                    .collect::<Vec<_>>()
                    .join(MULTI_LABEL_SEPARATOR)
            }
            Selection::Single(_) => match selected.first() {
                None => default_text(),
                Some(&(i, item)) => {
                    if let Some(format) = self.button_text_after_selection.get() {
                        format(item, i)
                    } else if let Some(text) = &self.options.button_text_after_selection {
                        text.clone()
                    } else {
                        item.label()
                    }
                }
            },
        }
    }

    /// Describe the trigger button.
    pub fn button_view(&self) -> ButtonView {
        let content = if self.options.only_dropdown_icon {
            None
        } else if let Some(render) = self.custom_button.get() {
            Some(render(&self.store.selected_items()))
        } else {
            let style = TextStyle {
                color: Some(self.theme.button_text),
                font_size: Some(self.theme.font_size),
                ..TextStyle::default()
            }
            .merged(&self.options.button_text_style);
            Some(Content::Text {
                text: self.button_label(),
                style,
                lines: self.options.text_number_of_lines.max(1),
            })
        };
        ButtonView {
            style: BoxStyle {
                background: Some(self.theme.button_bg),
                ..BoxStyle::default()
            }
            .merged(&self.options.button_style),
            content,
            icon: self.dropdown_icon.get().map(|f| f(self.is_open)),
            icon_position: self.options.icon_position,
            disabled: self.options.disabled,
            open: self.is_open,
        }
    }

    /// Describe the overlay, if open.
    pub fn overlay_view(&self) -> Option<OverlayView> {
        let window = self.window.filter(|_| self.is_open)?;
        let composer = OverlayComposer {
            store: &self.store,
            options: &self.options,
            theme: &self.theme,
            window,
            row_text: &self.row_text_for_selection,
            row_content: &self.custom_row,
            search_left_icon: &self.search_left_icon,
            search_right_icon: &self.search_right_icon,
        };
        Some(composer.compose())
    }

    /// Draw the button and, when open, the overlay and its list.
    pub fn render(&self, platform: &mut impl Platform) {
        platform.render_button(&self.button_view());
        match self.overlay_view() {
            Some(overlay) => {
                platform.render_modal_overlay(&overlay);
                platform.render_scrollable_list(&overlay.list);
            }
            None => platform.render_modal_overlay(&self.hidden_overlay()),
        }
    }

    fn hidden_overlay(&self) -> OverlayView {
        OverlayView {
            visible: false,
            status_bar_translucent: self.options.status_bar_translucent,
            backdrop: self.options.dropdown_overlay_color.unwrap_or(self.theme.overlay),
            window: WindowStyle::default(),
            window_style: BoxStyle::default(),
            select_all: None,
            search: None,
            list: ListView {
                rows: Vec::new(),
                row_height: self.options.row_height(),
                estimated_row_size: ESTIMATED_ROW_SIZE,
                end_reached_threshold: END_REACHED_THRESHOLD,
                empty: None,
            },
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    pub fn store(&self) -> &SelectionStore<T> {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        self.store.selection()
    }

    /// Trigger geometry from the current open.
    pub fn button_layout(&self) -> Option<ButtonLayout> {
        self.button_layout
    }

    /// Window placement from the current open.
    pub fn window_style(&self) -> Option<WindowStyle> {
        self.window
    }
}

/// Helper function to create a dropdown.
pub fn dropdown<T: DropdownItem + Clone + PartialEq, M>(id: ElementId, data: Vec<T>) -> Dropdown<T, M> {
    Dropdown::new(id, data)
}
