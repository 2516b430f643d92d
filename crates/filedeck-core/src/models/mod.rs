//! Data models for the file manager.
//!
//! - [`FileRecord`], [`FileKind`] - entries of the caller's dataset
//! - [`FileManagerConfig`], [`Layout`], [`CssLength`] - construction-time configuration

mod config;
mod record;

pub use config::{CssLength, FileManagerConfig, Layout};
pub use record::{
    FileKind, FileRecord, child_path, extension, is_same_or_descendant, parent_of,
};
