// Widget implementations

mod config;
mod dropdown;
mod overlay;

pub use config::DropdownOptions;
pub use dropdown::{dropdown, Dropdown};
pub use overlay::OverlayCloseHelper;
