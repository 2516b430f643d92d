//! Optional caller callbacks.
//!
//! A [`Handler`] is a nullable function reference: it is absent unless the
//! caller sets it, and every call site goes through [`Handler::emit`], which
//! checks presence before invoking.

use std::fmt;
use std::sync::Arc;

use crate::error::FileManagerError;
use crate::models::{FileRecord, Layout};
use crate::upload::UploadRequest;

/// A caller-supplied callback that may be absent.
///
/// Cloning is cheap; clones share the same function.
pub struct Handler<A>(Option<Arc<dyn Fn(A) + Send + Sync>>);

impl<A> Handler<A> {
    /// Wraps a callback.
    pub fn new(f: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(f)))
    }

    /// An unset callback.
    pub const fn none() -> Self {
        Self(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Invokes the callback if present. Returns whether it ran.
    pub fn emit(&self, arg: A) -> bool {
        match &self.0 {
            Some(f) => {
                f(arg);
                true
            }
            None => false,
        }
    }
}

impl<A> Clone for Handler<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> Default for Handler<A> {
    fn default() -> Self {
        Self::none()
    }
}

impl<A> fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_set() { "Handler(set)" } else { "Handler(none)" })
    }
}

/// Whether a paste moves or duplicates the clipboard contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasteOperation {
    Move,
    Copy,
}

impl PasteOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Copy => "copy",
        }
    }
}

/// Payload of `on_paste`.
#[derive(Clone, Debug, PartialEq)]
pub struct PasteEvent {
    pub files: Vec<FileRecord>,
    /// Target folder; `None` is the root.
    pub destination: Option<FileRecord>,
    pub operation: PasteOperation,
}

/// Payload of `on_rename`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenameEvent {
    pub file: FileRecord,
    pub new_name: String,
}

/// Payload of `on_create_folder`.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateFolderEvent {
    pub name: String,
    /// Folder the new folder goes into; `None` is the root.
    pub parent: Option<FileRecord>,
}

/// The fourteen callbacks the widget exposes. All default to unset.
#[derive(Clone, Debug, Default)]
pub struct FileManagerCallbacks {
    pub on_create_folder: Handler<CreateFolderEvent>,
    pub on_file_uploading: Handler<UploadRequest>,
    /// Receives the host's upload response body.
    pub on_file_uploaded: Handler<String>,
    pub on_cut: Handler<Vec<FileRecord>>,
    pub on_copy: Handler<Vec<FileRecord>>,
    pub on_paste: Handler<PasteEvent>,
    pub on_rename: Handler<RenameEvent>,
    pub on_download: Handler<Vec<FileRecord>>,
    pub on_delete: Handler<Vec<FileRecord>>,
    pub on_layout_change: Handler<Layout>,
    pub on_refresh: Handler<()>,
    pub on_file_open: Handler<FileRecord>,
    pub on_select: Handler<Vec<FileRecord>>,
    pub on_error: Handler<FileManagerError>,
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_unset_handler_is_noop() {
        let handler: Handler<u32> = Handler::default();
        assert!(!handler.is_set());
        assert!(!handler.emit(7));
    }

    #[test]
    fn test_clones_share_the_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler = Handler::new(move |n: u32| sink.lock().unwrap().push(n));
        let other = handler.clone();

        assert!(handler.emit(1));
        assert!(other.emit(2));
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_default_callbacks_are_unset() {
        let callbacks = FileManagerCallbacks::default();
        assert!(!callbacks.on_select.is_set());
        assert!(!callbacks.on_error.is_set());
        assert!(!callbacks.on_refresh.emit(()));
    }
}
