//! Items held by the dropdown and how they are labelled and searched.
//!
//! Item identity is positional: the dropdown never compares items to find out
//! which one was tapped, so duplicate values are fine. Equality is only used
//! to resolve a by-value default selection.

use serde_json::Value;

/// A value that can be shown as a dropdown row.
pub trait DropdownItem {
    /// Default text form used for row labels and the button label.
    fn label(&self) -> String;

    /// Whether this slot holds no value. Absent items keep their index but
    /// are never rendered or selected.
    fn is_absent(&self) -> bool {
        false
    }

    /// Case-insensitive substring match against an already lowercased needle.
    ///
    /// `key` names the field to look at for structured items. Items without
    /// fields ignore it.
    fn matches(&self, needle: &str, key: Option<&str>) -> bool {
        let _ = key;
        self.label().to_lowercase().contains(needle)
    }
}

impl DropdownItem for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl DropdownItem for &str {
    fn label(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_display_item {
    ($($t:ty),*) => {
        $(
            impl DropdownItem for $t {
                fn label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_display_item!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool, char);

impl<T: DropdownItem> DropdownItem for Option<T> {
    fn label(&self) -> String {
        self.as_ref().map(DropdownItem::label).unwrap_or_default()
    }

    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, DropdownItem::is_absent)
    }

    fn matches(&self, needle: &str, key: Option<&str>) -> bool {
        self.as_ref().is_some_and(|item| item.matches(needle, key))
    }
}

/// JSON values cover the "primitive or object" items of a loosely typed host.
impl DropdownItem for Value {
    fn label(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn matches(&self, needle: &str, key: Option<&str>) -> bool {
        match self {
            Value::Null => false,
            Value::Object(map) => match key {
                Some(key) => map.get(key).is_some_and(|v| v.matches(needle, None)),
                None => map.values().any(|v| v.matches(needle, None)),
            },
            Value::Array(values) => values.iter().any(|v| v.matches(needle, key)),
            other => other.label().to_lowercase().contains(needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_match_is_case_insensitive() {
        let item = "Banana".to_string();
        assert!(item.matches("an", None));
        assert!(item.matches("ban", None));
        assert!(!item.matches("che", None));
    }

    #[test]
    fn test_numbers_label() {
        assert_eq!(3_i32.label(), "3");
        assert!(12_u32.matches("2", None));
    }

    #[test]
    fn test_option_absent() {
        let none: Option<String> = None;
        assert!(none.is_absent());
        assert!(!none.matches("", None));
        assert!(!Some("x".to_string()).is_absent());
    }

    #[test]
    fn test_json_object_with_search_key() {
        let item = json!({ "title": "Canada", "code": "CA" });
        assert!(item.matches("can", Some("title")));
        assert!(!item.matches("ca", Some("missing")));
        // Without a key any field may match
        assert!(item.matches("ca", None));
    }

    #[test]
    fn test_json_null_is_absent() {
        assert!(Value::Null.is_absent());
        assert_eq!(json!("Apple").label(), "Apple");
        assert_eq!(json!(2).label(), "2");
    }
}
