//! Selection state store for the dropdown.
//!
//! Owns the working copy of the data list, the current selection, the search
//! text and the derived "all selected" flag. Filtering is recomputed
//! synchronously whenever the data or the search text changes.
//!
//! Selected indices always refer to the unfiltered list, so typing into the
//! search field never invalidates a selection.

use crate::item::DropdownItem;
use crate::selection::{Selection, SelectionMode};

/// Working state behind one dropdown instance.
#[derive(Debug, Clone)]
pub struct SelectionStore<T> {
    /// Unfiltered items, indexed by position
    data: Vec<T>,
    /// Current selection (indices into `data`)
    selection: Selection,
    /// Live filter string
    search_text: String,
    /// Set by select-all, cleared by any manual toggle
    all_selected: bool,
    /// Default selection by position (wins over `default_value`)
    default_index: Option<usize>,
    /// Default selection by value
    default_value: Option<T>,
    /// Field to match on for structured items
    search_key: Option<String>,
    /// The host filters the data itself; pass everything through
    external_filtering: bool,
    /// Cached positions of the items that pass the current filter
    visible: Vec<usize>,
}

impl<T: DropdownItem + PartialEq> SelectionStore<T> {
    /// Create a store over `data` with nothing selected.
    pub fn new(data: Vec<T>, mode: SelectionMode) -> Self {
        let mut store = Self {
            data,
            selection: Selection::empty(mode),
            search_text: String::new(),
            all_selected: false,
            default_index: None,
            default_value: None,
            search_key: None,
            external_filtering: false,
            visible: Vec::new(),
        };
        store.refilter();
        store
    }

    /// Builder: set the defaults and apply them.
    pub fn with_defaults(mut self, default_index: Option<usize>, default_value: Option<T>) -> Self {
        self.set_defaults(default_index, default_value);
        self
    }

    /// Builder: match structured items on this field only.
    pub fn with_search_key(mut self, key: Option<String>) -> Self {
        self.search_key = key;
        self.refilter();
        self
    }

    /// Builder: let the host own filtering.
    pub fn with_external_filtering(mut self, external: bool) -> Self {
        self.external_filtering = external;
        self.refilter();
        self
    }

    // =========================================================================
    // Declarative inputs
    // =========================================================================

    /// Replace the data list and re-initialise the selection from the defaults.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.refilter();
        self.restore_defaults();
    }

    /// Replace the defaults and re-initialise the selection from them.
    pub fn set_defaults(&mut self, default_index: Option<usize>, default_value: Option<T>) {
        self.default_index = default_index;
        self.default_value = default_value;
        self.restore_defaults();
    }

    /// Replace the by-index default, keeping the by-value one.
    pub fn set_default_index(&mut self, default_index: Option<usize>) {
        self.default_index = default_index;
        self.restore_defaults();
    }

    /// Replace the by-value default, keeping the by-index one.
    pub fn set_default_value(&mut self, default_value: Option<T>) {
        self.default_value = default_value;
        self.restore_defaults();
    }

    /// Switch between single and multiple selection. The selection is rebuilt
    /// from the defaults because the two shapes are not interchangeable.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.selection.mode() != mode {
            self.selection = Selection::empty(mode);
            self.restore_defaults();
        }
    }

    pub fn set_search_key(&mut self, key: Option<String>) {
        self.search_key = key;
        self.refilter();
    }

    pub fn set_external_filtering(&mut self, external: bool) {
        self.external_filtering = external;
        self.refilter();
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Select the item at `index` (a position in the unfiltered list).
    ///
    /// Single mode replaces the selection. Multiple mode toggles membership
    /// and clears the all-selected flag. Out-of-range or absent slots are
    /// ignored. Returns whether anything was applied.
    pub fn select_item(&mut self, index: usize) -> bool {
        if self.item(index).is_none() {
            log::debug!("SelectionStore: ignoring select of unavailable index {}", index);
            return false;
        }
        self.selection.apply(index);
        if self.mode() == SelectionMode::Multiple {
            self.all_selected = false;
        }
        log::debug!("SelectionStore: selection is now {:?}", self.selection.indices());
        true
    }

    /// Select by position in the filtered list.
    pub fn select_visible(&mut self, position: usize) -> bool {
        match self.original_index(position) {
            Some(index) => self.select_item(index),
            None => false,
        }
    }

    /// Turn select-all on or off; `None` flips the current flag.
    ///
    /// Only meaningful in multiple mode, where enabling selects every visible
    /// row and disabling clears the selection. Returns the resulting flag.
    pub fn toggle_select_all(&mut self, target: Option<bool>) -> bool {
        let Selection::Multiple(indices) = &mut self.selection else {
            log::debug!("SelectionStore: select-all ignored in single mode");
            return false;
        };
        let enable = target.unwrap_or(!self.all_selected);
        if enable {
            *indices = self.visible.clone();
        } else {
            indices.clear();
        }
        self.all_selected = enable;
        log::debug!("SelectionStore: select-all {}", if enable { "on" } else { "off" });
        enable
    }

    /// Restore the default selection and clear the search text.
    pub fn reset(&mut self) {
        self.search_text.clear();
        self.refilter();
        self.restore_defaults();
    }

    /// Update the filter string. The selection is left untouched.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.refilter();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The item at `index` unless it is out of range or absent.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.data.get(index).filter(|item| !item.is_absent())
    }

    /// Positions (in the unfiltered list) that pass the filter.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Visible items paired with their unfiltered index.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.visible.iter().map(move |&i| (i, &self.data[i]))
    }

    /// Map a filtered position back to the unfiltered index.
    pub fn original_index(&self, position: usize) -> Option<usize> {
        self.visible.get(position).copied()
    }

    /// Position of an unfiltered index in the filtered list, if it is visible.
    pub fn visible_position(&self, index: usize) -> Option<usize> {
        self.visible.iter().position(|&i| i == index)
    }

    /// Selected items with their indices, in selection order.
    pub fn selected_items(&self) -> Vec<(usize, &T)> {
        self.selection
            .indices()
            .into_iter()
            .filter_map(|i| self.item(i).map(|item| (i, item)))
            .collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn refilter(&mut self) {
        let needle = self.search_text.to_lowercase();
        let filter = !self.external_filtering && !needle.is_empty();
        let key = self.search_key.as_deref();
        self.visible = self
            .data
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_absent())
            .filter(|(_, item)| !filter || item.matches(&needle, key))
            .map(|(i, _)| i)
            .collect();
    }

    fn default_index(&self) -> Option<usize> {
        if let Some(index) = self.default_index {
            if self.item(index).is_some() {
                return Some(index);
            }
        }
        let value = self.default_value.as_ref()?;
        self.data
            .iter()
            .position(|item| !item.is_absent() && item == value)
    }

    fn restore_defaults(&mut self) {
        self.all_selected = false;
        self.selection.clear();
        if let Some(index) = self.default_index() {
            self.selection.apply(index);
        }
    }
}
