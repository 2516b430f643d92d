//! File manager UI components.
//!
//! Components:
//! - [`FileManager`] - Composition root: builds the state and lays out the panes
//! - [`Toolbar`] - Folder, clipboard and layout actions
//! - [`NavigationPane`] - Folder tree
//! - [`Breadcrumb`] - Path of the current folder
//! - [`FileList`] - Grid or list of the current folder's children
//! - [`Actions`] - Dialogs and panels opened by an action
//! - [`ContextMenu`] - Right-click menu

mod actions;
mod breadcrumb;
mod context_menu;
#[allow(clippy::module_inception)]
mod file_manager;
mod file_list;
mod loader;
mod navigation_pane;
mod toolbar;

pub use actions::Actions;
pub use breadcrumb::Breadcrumb;
pub use context_menu::ContextMenu;
pub use file_list::FileList;
pub use file_manager::FileManager;
pub use loader::Loader;
pub use navigation_pane::NavigationPane;
pub use toolbar::Toolbar;
