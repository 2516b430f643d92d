//! filedeck: a file manager widget for Leptos.
//!
//! - [`FileManager`] - the composition root, mounted by the host page
//! - [`state`] - the signal-wrapped state containers shared with child components
//! - [`hooks`] - pointer-driven column resizing
//! - [`utils`] - console logging and DOM helpers
//!
//! All behavior with a contract lives in [`filedeck_core`].

pub mod components;
pub mod config;
pub mod hooks;
pub mod state;
pub mod utils;

pub use components::FileManager;
pub use filedeck_core as core;
pub use state::FileManagerState;
