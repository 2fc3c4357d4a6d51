//! select_dropdown - A select dropdown with single and multiple selection
//!
//! The widget itself lives in the `dropdown_ui` crate and is re-exported here,
//! together with the configuration file format used by the demo binary.

pub mod config;
pub mod session;

pub use config::{CONFIG_VERSION, ConfigError, DemoConfig, LogLevel};
pub use dropdown_ui::*;
pub use session::{DemoMessage, DemoSession};
