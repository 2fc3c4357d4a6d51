//! Macros for reducing boilerplate in the dropdown builder.

/// Generates a builder-style setter method for a field.
///
/// # Usage
///
/// ```ignore
/// // When method name matches field name:
/// builder_field!(search, bool);
/// // Generates: pub fn search(mut self, value: bool) -> Self { self.search = value; self }
///
/// // When method name differs from field name:
/// builder_field!(button_style, options.button_style, BoxStyle);
/// ```
#[macro_export]
macro_rules! builder_field {
    // Method name differs from field name (field may be a nested path)
    ($method:ident, $($field:ident).+, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$($field).+ = value;
            self
        }
    };
    // Method name matches field name
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
}

/// Generates a builder-style setter method for an Option field.
///
/// # Usage
///
/// ```ignore
/// builder_option!(search_key, options.search_key, String);
/// // Generates: pub fn search_key(mut self, value: String) -> Self { self.options.search_key = Some(value); self }
/// ```
#[macro_export]
macro_rules! builder_option {
    ($method:ident, $($field:ident).+, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$($field).+ = Some(value);
            self
        }
    };
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = Some(value);
            self
        }
    };
}

/// Generates a callback setter method that wraps the closure in a [`Callback`](crate::Callback).
///
/// # Usage
///
/// ```ignore
/// // For callbacks with no parameters:
/// callback_setter!(on_focus);
/// // Generates: pub fn on_focus<F>(mut self, f: F) -> Self where F: Fn() -> M + 'static
///
/// // For callbacks with a parameter:
/// callback_setter!(on_change_search_text, String);
/// // Generates: pub fn on_change_search_text<F>(mut self, f: F) -> Self where F: Fn(String) -> M + 'static
/// ```
#[macro_export]
macro_rules! callback_setter {
    // Callback with no parameters
    ($name:ident) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn() -> M + 'static,
        {
            self.$name = $crate::Callback::new(move |()| f());
            self
        }
    };
    // Callback with multiple parameters, passed to the closure unpacked
    ($name:ident, $($param:ident: $ty:ty),+) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($($ty),+) -> M + 'static,
        {
            self.$name = $crate::Callback::new(move |($($param),+): ($($ty),+)| f($($param),+));
            self
        }
    };
    // Callback with a single parameter
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> M + 'static,
        {
            self.$name = $crate::Callback::new(f);
            self
        }
    };
}
