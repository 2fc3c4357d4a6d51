//! Selection model: a single optional index or an ordered set of indices.
//!
//! Indices always point into the unfiltered data list.

use serde::{Deserialize, Serialize};

/// Whether the dropdown picks one row or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

/// Current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// At most one selected index
    Single(Option<usize>),
    /// Selected indices in the order they were picked
    Multiple(Vec<usize>),
}

impl Selection {
    /// An empty selection for the given mode.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            Selection::Single(selected) => *selected == Some(index),
            Selection::Multiple(indices) => indices.contains(&index),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(selected) => selected.is_none(),
            Selection::Multiple(indices) => indices.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Single(selected) => usize::from(selected.is_some()),
            Selection::Multiple(indices) => indices.len(),
        }
    }

    /// Selected indices in selection order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Selection::Single(selected) => selected.iter().copied().collect(),
            Selection::Multiple(indices) => indices.clone(),
        }
    }

    /// The first selected index (the sole one in single mode).
    pub fn first(&self) -> Option<usize> {
        match self {
            Selection::Single(selected) => *selected,
            Selection::Multiple(indices) => indices.first().copied(),
        }
    }

    /// Single mode: replace the selection. Multiple mode: toggle membership,
    /// keeping the order of the remaining members.
    pub fn apply(&mut self, index: usize) {
        match self {
            Selection::Single(selected) => *selected = Some(index),
            Selection::Multiple(indices) => {
                if let Some(pos) = indices.iter().position(|&i| i == index) {
                    indices.remove(pos);
                } else {
                    indices.push(index);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        match self {
            Selection::Single(selected) => *selected = None,
            Selection::Multiple(indices) => indices.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_replaces() {
        let mut sel = Selection::empty(SelectionMode::Single);
        sel.apply(1);
        sel.apply(4);
        assert_eq!(sel, Selection::Single(Some(4)));
        assert_eq!(sel.len(), 1);
        assert!(!sel.contains(1));
    }

    #[test]
    fn test_multiple_toggle_keeps_order() {
        let mut sel = Selection::empty(SelectionMode::Multiple);
        sel.apply(2);
        sel.apply(0);
        sel.apply(5);
        sel.apply(0);
        assert_eq!(sel.indices(), vec![2, 5]);
        sel.apply(0);
        assert_eq!(sel.indices(), vec![2, 5, 0]);
        assert_eq!(sel.first(), Some(2));
    }

    #[test]
    fn test_double_toggle_restores() {
        let sorted = |s: &Selection| {
            let mut v = s.indices();
            v.sort_unstable();
            v
        };
        let mut sel = Selection::Multiple(vec![3, 1]);
        for i in 0..6 {
            sel.apply(i);
            sel.apply(i);
            assert_eq!(sorted(&sel), vec![1, 3]);
        }
        // Removing then re-adding a member moves it to the end
        assert_eq!(sel.indices(), vec![1, 3]);
    }
}
