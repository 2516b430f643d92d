//! Clipboard scope.

use crate::callback::{Handler, PasteEvent, PasteOperation};
use crate::error::ClipboardError;
use crate::models::{FileRecord, is_same_or_descendant};

/// What was cut or copied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardContents {
    pub files: Vec<FileRecord>,
    pub is_moving: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Clipboard {
    contents: Option<ClipboardContents>,
    on_cut: Handler<Vec<FileRecord>>,
    on_copy: Handler<Vec<FileRecord>>,
    on_paste: Handler<PasteEvent>,
}

impl Clipboard {
    pub fn new(
        on_cut: Handler<Vec<FileRecord>>,
        on_copy: Handler<Vec<FileRecord>>,
        on_paste: Handler<PasteEvent>,
    ) -> Self {
        Self {
            contents: None,
            on_cut,
            on_copy,
            on_paste,
        }
    }

    pub fn contents(&self) -> Option<&ClipboardContents> {
        self.contents.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_none()
    }

    /// True if `path` is waiting to be moved (shown dimmed).
    pub fn is_cut(&self, path: &str) -> bool {
        self.contents
            .as_ref()
            .is_some_and(|c| c.is_moving && c.files.iter().any(|f| f.path == path))
    }

    pub fn cut(&mut self, files: Vec<FileRecord>) -> bool {
        self.store(files, true)
    }

    pub fn copy(&mut self, files: Vec<FileRecord>) -> bool {
        self.store(files, false)
    }

    fn store(&mut self, files: Vec<FileRecord>, is_moving: bool) -> bool {
        if files.is_empty() {
            return false;
        }
        if is_moving {
            self.on_cut.emit(files.clone());
        } else {
            self.on_copy.emit(files.clone());
        }
        self.contents = Some(ClipboardContents { files, is_moving });
        true
    }

    pub fn clear(&mut self) {
        self.contents = None;
    }

    /// Paste into `destination` (`None` is the root) and emit `on_paste`.
    ///
    /// A move empties the clipboard; a copy keeps it for further pastes.
    pub fn paste(&mut self, destination: Option<&FileRecord>) -> Result<PasteEvent, ClipboardError> {
        let contents = self.contents.as_ref().ok_or(ClipboardError::Empty)?;

        if destination.is_some_and(|d| !d.is_directory) {
            return Err(ClipboardError::DestinationNotFolder);
        }
        let destination_path = destination.map(|d| d.path.as_str()).unwrap_or("");
        let into_itself = contents
            .files
            .iter()
            .any(|f| f.is_directory && is_same_or_descendant(destination_path, &f.path));
        if into_itself {
            return Err(ClipboardError::DestinationInsideSource);
        }

        let event = PasteEvent {
            files: contents.files.clone(),
            destination: destination.cloned(),
            operation: if contents.is_moving {
                PasteOperation::Move
            } else {
                PasteOperation::Copy
            },
        };
        if contents.is_moving {
            self.contents = None;
        }
        log::debug!(
            "clipboard: {} {} item(s) into '{destination_path}'",
            event.operation.as_str(),
            event.files.len()
        );
        self.on_paste.emit(event.clone());
        Ok(event)
    }
}
