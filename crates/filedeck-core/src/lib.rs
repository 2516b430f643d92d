//! Core logic for the filedeck file manager widget.
//!
//! This crate has no UI framework dependency. It provides:
//! - [`ColumnResizeController`] - drag-to-resize split between two panes
//! - [`format_date`], [`format_data_size`] - display formatting
//! - [`state`] - independent file, navigation, selection, clipboard and layout containers
//! - [`Handler`], [`FileManagerCallbacks`] - optional caller callbacks
//! - [`naming`], [`upload`], [`shortcut`], [`action`] - supporting rules for the UI actions

pub mod action;
pub mod callback;
pub mod error;
pub mod format;
pub mod models;
pub mod naming;
pub mod resize;
pub mod shortcut;
pub mod state;
pub mod upload;

pub use action::{Action, ActionTrigger};
pub use callback::{
    CreateFolderEvent, FileManagerCallbacks, Handler, PasteEvent, PasteOperation, RenameEvent,
};
pub use error::{ClipboardError, ConfigError, ErrorKind, FileManagerError, NameError, UploadRejection};
pub use format::{format_data_size, format_date, format_date_time, parse_timestamp};
pub use models::{CssLength, FileKind, FileManagerConfig, FileRecord, Layout};
pub use resize::{ColumnResizeController, ColumnSplit, DragGesture, ResizeBounds};
pub use upload::{
    UploadCandidate, UploadConfig, UploadEntry, UploadMethod, UploadOutcome, UploadQueue,
    UploadRequest, UploadRules, UploadStatus, UploadTicket,
};
