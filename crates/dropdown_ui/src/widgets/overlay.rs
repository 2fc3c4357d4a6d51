//! Overlay composition for the dropdown.
//!
//! Turns the window placement, the selection store and the options into an
//! [`OverlayView`]: backdrop, positioned window, optional select-all switch and
//! search input, then the row list. Composition is pure; it reads state and
//! never changes it.
//!
//! [`OverlayCloseHelper`] holds the shared "should this event dismiss the
//! overlay" rules.

use crate::callback::Render;
use crate::constants::{
    EMPTY_LIST_TEXT, EMPTY_TEXT_MARGIN_TOP, END_REACHED_THRESHOLD, ESTIMATED_ROW_SIZE,
    ROW_TEXT_LINES, SELECT_ALL_FONT_SIZE, SELECT_ALL_LABEL,
};
use crate::event::{Event, KeyCode};
use crate::item::DropdownItem;
use crate::layout::Rectangle;
use crate::placement::WindowStyle;
use crate::state::SelectionStore;
use crate::style::{BoxStyle, TextStyle};
use crate::theme::Theme;
use crate::view::{
    Content, ListView, OverlayView, RowContentFn, RowTextFn, RowView, SearchFieldView,
    SearchIconFn, SelectAllView,
};
use crate::widgets::config::DropdownOptions;

/// Inputs for one overlay composition pass.
pub(crate) struct OverlayComposer<'a, T> {
    pub store: &'a SelectionStore<T>,
    pub options: &'a DropdownOptions,
    pub theme: &'a Theme,
    pub window: WindowStyle,
    pub row_text: &'a Render<RowTextFn<T>>,
    pub row_content: &'a Render<RowContentFn<T>>,
    pub search_left_icon: &'a Render<SearchIconFn>,
    pub search_right_icon: &'a Render<SearchIconFn>,
}

impl<T: DropdownItem + PartialEq> OverlayComposer<'_, T> {
    pub fn compose(&self) -> OverlayView {
        let has_data = !self.store.data().is_empty();
        OverlayView {
            visible: true,
            status_bar_translucent: self.options.status_bar_translucent,
            backdrop: self.options.dropdown_overlay_color.unwrap_or(self.theme.overlay),
            window: self.window,
            window_style: BoxStyle {
                background: Some(self.theme.window_bg),
                ..BoxStyle::default()
            }
            .merged(&self.options.dropdown_style.style),
            select_all: (has_data && self.options.select_all_enabled()).then(|| self.select_all()),
            search: (has_data && self.options.search).then(|| self.search_field()),
            list: self.list(),
        }
    }

    fn list(&self) -> ListView {
        let rows: Vec<RowView> = self
            .store
            .visible_items()
            .enumerate()
            .map(|(position, (index, item))| self.row(position, index, item))
            .collect();
        let empty = rows.is_empty().then(|| self.empty_placeholder());
        ListView {
            rows,
            row_height: self.options.row_height(),
            estimated_row_size: ESTIMATED_ROW_SIZE,
            end_reached_threshold: END_REACHED_THRESHOLD,
            empty,
        }
    }

    fn row(&self, position: usize, index: usize, item: &T) -> RowView {
        let selected = self.store.selection().contains(index);
        let disabled = self.options.is_row_disabled(index);

        let mut style = BoxStyle {
            background: Some(self.theme.row_bg),
            border_color: Some(self.theme.row_border),
            border_width: Some(1.0),
            height: Some(self.options.row_height()),
            ..BoxStyle::default()
        }
        .merged(&self.options.row_style);
        if selected {
            style = style
                .merged(&BoxStyle {
                    background: Some(self.theme.selected_row_bg),
                    ..BoxStyle::default()
                })
                .merged(&self.options.selected_row_style);
        }
        if disabled {
            style = style
                .merged(&BoxStyle {
                    opacity: Some(self.theme.disabled_opacity),
                    ..BoxStyle::default()
                })
                .merged(&self.options.disabled_style);
        }

        let content = match self.row_content.get() {
            Some(render) => render(item, index, selected, disabled),
            None => {
                let mut text_style = self.row_text_style();
                if selected {
                    text_style = text_style.merged(&self.options.selected_row_text_style);
                }
                let text = match self.row_text.get() {
                    Some(format) => format(item, index),
                    None => item.label(),
                };
                Content::Text {
                    text,
                    style: text_style,
                    lines: ROW_TEXT_LINES,
                }
            }
        };

        RowView {
            index,
            position,
            selected,
            disabled,
            style,
            content,
        }
    }

    fn row_text_style(&self) -> TextStyle {
        TextStyle {
            color: Some(self.theme.row_text),
            font_size: Some(self.theme.font_size),
            ..TextStyle::default()
        }
        .merged(&self.options.row_text_style)
    }

    fn empty_placeholder(&self) -> Content {
        let style = self
            .row_text_style()
            .merged(&TextStyle {
                margin_top: Some(EMPTY_TEXT_MARGIN_TOP),
                ..TextStyle::default()
            })
            .merged(&self.options.empty_style);
        Content::text(EMPTY_LIST_TEXT, style)
    }

    fn search_field(&self) -> SearchFieldView {
        let mut text_style = TextStyle {
            color: Some(self.theme.search_text),
            ..TextStyle::default()
        }
        .merged(&self.options.search_input_text_style);
        if let Some(color) = self.options.search_input_text_color {
            text_style.color = Some(color);
        }
        SearchFieldView {
            text: self.store.search_text().to_string(),
            placeholder: self.options.search_placeholder.clone().unwrap_or_default(),
            placeholder_color: self
                .options
                .search_placeholder_color
                .unwrap_or(self.theme.search_placeholder),
            style: BoxStyle {
                background: Some(self.theme.search_bg),
                ..BoxStyle::default()
            }
            .merged(&self.options.search_input_style),
            text_style,
            width: self.window.bounds.width,
            left_icon: self.search_left_icon.get().map(|f| f()),
            right_icon: self.search_right_icon.get().map(|f| f()),
        }
    }

    fn select_all(&self) -> SelectAllView {
        SelectAllView {
            label: Content::text(
                SELECT_ALL_LABEL,
                TextStyle {
                    color: Some(self.theme.select_all_label),
                    font_size: Some(SELECT_ALL_FONT_SIZE),
                    ..TextStyle::default()
                },
            ),
            on: self.store.all_selected(),
        }
    }
}

/// Helper for checking if an event should dismiss the overlay.
pub struct OverlayCloseHelper;

impl OverlayCloseHelper {
    /// Returns `true` if a raw tap at `position` landed outside the window.
    #[inline]
    pub fn should_close_on_global_press(position: crate::layout::Point, window: Rectangle) -> bool {
        !window.contains(position)
    }

    /// Combined check for whether any event should close an open overlay.
    ///
    /// This handles:
    /// - Backdrop taps
    /// - Raw taps outside the window
    /// - Escape key press
    /// - Focus loss
    pub fn should_close(event: &Event, window: Rectangle) -> bool {
        match event {
            Event::BackdropPressed => true,
            Event::PointerPressed { position } => Self::should_close_on_global_press(*position, window),
            Event::KeyPressed { key: KeyCode::Escape } | Event::FocusLost => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crate::selection::SelectionMode;

    fn window() -> WindowStyle {
        WindowStyle {
            bounds: Rectangle::new(0.0, 50.0, 200.0, 150.0),
            ..WindowStyle::default()
        }
    }

    fn compose<T: DropdownItem + PartialEq>(
        store: &SelectionStore<T>,
        options: &DropdownOptions,
    ) -> OverlayView {
        let theme = Theme::light();
        OverlayComposer {
            store,
            options,
            theme: &theme,
            window: window(),
            row_text: &Render::none(),
            row_content: &Render::none(),
            search_left_icon: &Render::none(),
            search_right_icon: &Render::none(),
        }
        .compose()
    }

    fn labels(view: &OverlayView) -> Vec<String> {
        view.list.rows.iter().map(|r| r.content.plain_text()).collect()
    }

    #[test]
    fn test_rows_follow_filter_and_keep_indices() {
        let mut store = SelectionStore::new(vec!["Apple", "Banana", "Cherry"], SelectionMode::Single);
        store.select_item(1);
        store.set_search_text("an");
        let view = compose(&store, &DropdownOptions::default());
        assert_eq!(labels(&view), vec!["Banana"]);
        let row = &view.list.rows[0];
        assert_eq!((row.position, row.index), (0, 1));
        assert!(row.selected);
        assert!(view.list.empty.is_none());
    }

    #[test]
    fn test_empty_placeholder() {
        let mut store = SelectionStore::new(vec!["Apple"], SelectionMode::Single);
        store.set_search_text("zzz");
        let view = compose(&store, &DropdownOptions::default());
        assert!(view.list.rows.is_empty());
        assert_eq!(view.list.empty.as_ref().map(Content::plain_text).as_deref(), Some(EMPTY_LIST_TEXT));
    }

    #[test]
    fn test_header_only_with_data() {
        let options = DropdownOptions {
            search: true,
            multiple_select: true,
            allow_select_all: true,
            ..DropdownOptions::default()
        };
        let store: SelectionStore<&str> = SelectionStore::new(vec![], SelectionMode::Multiple);
        let view = compose(&store, &options);
        assert!(view.search.is_none());
        assert!(view.select_all.is_none());

        let store = SelectionStore::new(vec!["a"], SelectionMode::Multiple);
        let view = compose(&store, &options);
        assert!(view.search.is_some());
        assert_eq!(view.select_all.map(|s| s.on), Some(false));
    }

    #[test]
    fn test_disabled_and_selected_styles_layer() {
        let mut options = DropdownOptions {
            disabled_indexes: vec![0],
            ..DropdownOptions::default()
        };
        options.selected_row_style.background = Some(crate::Color::BLACK);
        options.disabled_style.opacity = Some(0.2);
        let mut store = SelectionStore::new(vec!["a", "b"], SelectionMode::Single);
        store.select_item(0);
        let view = compose(&store, &options);
        let row = &view.list.rows[0];
        assert!(row.disabled && row.selected);
        assert_eq!(row.style.background, Some(crate::Color::BLACK));
        assert_eq!(row.style.opacity, Some(0.2));
        assert!(!view.list.rows[1].disabled);
    }

    #[test]
    fn test_should_close_on_backdrop_and_escape() {
        let bounds = window().bounds;
        assert!(OverlayCloseHelper::should_close(&Event::BackdropPressed, bounds));
        assert!(OverlayCloseHelper::should_close(
            &Event::KeyPressed { key: KeyCode::Escape },
            bounds
        ));
        assert!(OverlayCloseHelper::should_close(&Event::FocusLost, bounds));
        assert!(!OverlayCloseHelper::should_close(
            &Event::KeyPressed { key: KeyCode::Enter },
            bounds
        ));
    }

    #[test]
    fn test_should_close_on_global_press() {
        let bounds = window().bounds;
        assert!(OverlayCloseHelper::should_close_on_global_press(Point::new(300.0, 10.0), bounds));
        assert!(!OverlayCloseHelper::should_close_on_global_press(Point::new(100.0, 100.0), bounds));
    }
}
