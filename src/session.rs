//! A headless host driving one dropdown.
//!
//! The session owns the dropdown, a recording platform and the host-side
//! state fed by the dropdown's messages, in the Elm style: events go in,
//! messages come out and `update` applies them.

use dropdown_ui::{
    Dropdown, ElementId, Event, HeadlessPlatform, Platform, PlatformError, Selection, Theme,
    dropdown,
};
use serde_json::Value;

use crate::config::DemoConfig;

/// Messages the dropdown sends to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoMessage {
    /// The overlay opened
    Focused,
    /// The overlay closed
    Blurred,
    /// A row was picked in single selection
    Selected { item: Value, index: usize },
    /// The overlay closed in multiple selection
    SelectedMany { items: Vec<Value>, indexes: Vec<usize> },
    /// The search input changed (host-side filtering)
    SearchChanged(String),
    /// The row list scrolled near its end
    EndReached,
}

const TRIGGER: ElementId = ElementId(1);

/// Host state plus the widget it drives.
pub struct DemoSession {
    dropdown: Dropdown<Value, DemoMessage>,
    platform: HeadlessPlatform,
    /// Last reported selection
    picked: Vec<Value>,
    /// Every message received, oldest first
    history: Vec<DemoMessage>,
}

impl DemoSession {
    pub fn new(config: &DemoConfig) -> Self {
        let mut platform = HeadlessPlatform::new(config.viewport);
        platform.mount(TRIGGER, config.trigger);

        let theme = if config.dark_theme {
            Theme::dark()
        } else {
            Theme::light()
        };
        let dropdown = dropdown(TRIGGER, config.data.clone())
            .with_options(config.options.clone())
            .theme(theme)
            .on_focus(|| DemoMessage::Focused)
            .on_blur(|| DemoMessage::Blurred)
            .on_select(|item, index| DemoMessage::Selected { item, index })
            .on_select_many(|items, indexes| DemoMessage::SelectedMany { items, indexes })
            .on_scroll_end_reached(|| DemoMessage::EndReached);
        let dropdown = if config.host_filtering {
            dropdown.on_change_search_input_text(DemoMessage::SearchChanged)
        } else {
            dropdown
        };

        let mut session = Self {
            dropdown,
            platform,
            picked: Vec::new(),
            history: Vec::new(),
        };
        session.dropdown.render(&mut session.platform);
        session
    }

    /// Route an event, apply the resulting messages and redraw.
    pub fn dispatch(&mut self, event: Event) -> Vec<DemoMessage> {
        log::debug!("Event: {:?}", event);
        let messages = self.dropdown.on_event(&event, &mut self.platform);
        self.apply(messages)
    }

    /// Open through the imperative handle.
    pub fn open(&mut self) -> Result<Vec<DemoMessage>, PlatformError> {
        let messages = self.dropdown.open_dropdown(&mut self.platform)?;
        Ok(self.apply(messages))
    }

    /// Close through the imperative handle.
    pub fn close(&mut self) -> Vec<DemoMessage> {
        let messages = self.dropdown.close_dropdown();
        self.apply(messages)
    }

    /// Reset through the imperative handle.
    pub fn reset(&mut self) {
        self.dropdown.reset();
        self.picked.clear();
        self.dropdown.render(&mut self.platform);
    }

    fn apply(&mut self, messages: Vec<DemoMessage>) -> Vec<DemoMessage> {
        for message in &messages {
            self.update(message.clone());
        }
        self.dropdown.render(&mut self.platform);
        messages
    }

    fn update(&mut self, message: DemoMessage) {
        match &message {
            DemoMessage::Focused => log::info!("Dropdown opened"),
            DemoMessage::Blurred => log::info!("Dropdown closed"),
            DemoMessage::Selected { item, index } => {
                log::info!("Selected {} at index {}", item, index);
                self.picked = vec![item.clone()];
            }
            DemoMessage::SelectedMany { items, indexes } => {
                log::info!("Selected {} items at {:?}", items.len(), indexes);
                self.picked = items.clone();
            }
            DemoMessage::SearchChanged(text) => log::info!("Search: {:?}", text),
            DemoMessage::EndReached => log::info!("Reached end of list"),
        }
        self.history.push(message);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn button_label(&self) -> String {
        self.dropdown.button_label()
    }

    pub fn selection(&self) -> &Selection {
        self.dropdown.selection()
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn picked(&self) -> &[Value] {
        &self.picked
    }

    pub fn history(&self) -> &[DemoMessage] {
        &self.history
    }

    pub fn platform(&self) -> &HeadlessPlatform {
        &self.platform
    }

    /// Number of rows currently rendered in the list.
    pub fn visible_rows(&self) -> usize {
        self.platform.list.as_ref().map_or(0, |list| list.rows.len())
    }

    /// Viewport the session was created with.
    pub fn viewport(&self) -> dropdown_ui::Viewport {
        self.platform.viewport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(options: serde_json::Value) -> DemoConfig {
        let mut config = DemoConfig::new();
        config.options = serde_json::from_value(options).unwrap();
        config
    }

    #[test]
    fn test_single_session() {
        let mut session = DemoSession::new(&config(json!({ "search": true })));
        assert_eq!(session.button_label(), "Select an option.");

        assert_eq!(session.dispatch(Event::ButtonPressed), vec![DemoMessage::Focused]);
        assert_eq!(session.visible_rows(), 7);
        session.dispatch(Event::SearchTextChanged("land".into()));
        assert_eq!(session.visible_rows(), 2);

        let messages = session.dispatch(Event::RowPressed { position: 1 });
        assert_eq!(
            messages,
            vec![
                DemoMessage::Blurred,
                DemoMessage::Selected {
                    item: json!("England"),
                    index: 5
                }
            ]
        );
        assert_eq!(session.picked(), &[json!("England")]);
        assert_eq!(session.button_label(), "England");
        assert!(!session.platform().overlay_visible());
    }

    #[test]
    fn test_host_filtering_session() {
        let mut config = config(json!({ "search": true }));
        config.host_filtering = true;
        let mut session = DemoSession::new(&config);
        session.dispatch(Event::ButtonPressed);

        let messages = session.dispatch(Event::SearchTextChanged("land".into()));
        assert_eq!(messages, vec![DemoMessage::SearchChanged("land".into())]);
        assert_eq!(session.visible_rows(), 7);
        assert_eq!(
            session.platform().overlay.as_ref().and_then(|o| o.search.as_ref()).map(|s| s.text.as_str()),
            Some("land")
        );
        assert_eq!(session.history().last(), Some(&DemoMessage::SearchChanged("land".into())));
    }

    #[test]
    fn test_multi_session() {
        let mut session = DemoSession::new(&config(json!({
            "multiple_select": true,
            "allow_select_all": true
        })));
        session.open().unwrap();
        session.dispatch(Event::RowPressed { position: 0 });
        session.dispatch(Event::RowPressed { position: 2 });
        assert!(session.is_open());

        session.close();
        assert_eq!(session.picked(), &[json!("Egypt"), json!("Australia")]);
        assert_eq!(session.button_label(), "Egypt, Australia");
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut session = DemoSession::new(&config(json!({ "default_value_by_index": 3 })));
        assert_eq!(session.button_label(), "Ireland");
        session.dispatch(Event::ButtonPressed);
        session.dispatch(Event::RowPressed { position: 0 });
        assert_eq!(session.button_label(), "Egypt");
        session.reset();
        assert_eq!(session.button_label(), "Ireland");
        assert!(session.picked().is_empty());
    }

    #[test]
    fn test_open_fails_without_viewport() {
        let mut config = DemoConfig::new();
        config.viewport = dropdown_ui::Viewport::new(0.0, 0.0);
        let mut session = DemoSession::new(&config);
        assert!(session.open().is_err());
        assert!(!session.is_open());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_dark_theme_reaches_button() {
        let mut config = DemoConfig::new();
        config.dark_theme = true;
        let session = DemoSession::new(&config);
        let button = session.platform().button.clone().unwrap();
        assert_eq!(button.style.background, Some(Theme::dark().button_bg));
    }
}
