//! UI components built with Leptos.
//!
//! - [`file_manager`] - the widget and its panes, dialogs and menus
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod file_manager;
pub mod icons;

pub use file_manager::FileManager;
