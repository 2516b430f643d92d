//! Independent state containers.
//!
//! Each container owns one concern and receives the callbacks it fires at
//! construction. None of them knows about the others; the widget passes
//! them around explicitly.

mod clipboard;
mod files;
mod layout;
mod navigation;
mod selection;

pub use clipboard::{Clipboard, ClipboardContents};
pub use files::{FilesState, FolderNode};
pub use layout::LayoutState;
pub use navigation::{Crumb, NavigationState, sort_files};
pub use selection::SelectionState;
