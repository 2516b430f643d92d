//! File data scope.

use crate::callback::Handler;
use crate::error::FileManagerError;
use crate::models::{FileRecord, child_path};

/// A folder in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderNode {
    pub name: String,
    pub path: String,
    pub children: Vec<FolderNode>,
}

/// The caller's dataset plus the error sink.
#[derive(Clone, Debug, Default)]
pub struct FilesState {
    records: Vec<FileRecord>,
    on_error: Handler<FileManagerError>,
}

impl FilesState {
    pub fn new(records: Vec<FileRecord>, on_error: Handler<FileManagerError>) -> Self {
        Self { records, on_error }
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Swap in a refreshed dataset.
    pub fn replace(&mut self, records: Vec<FileRecord>) {
        log::debug!("files: dataset replaced ({} records)", records.len());
        self.records = records;
    }

    pub fn find(&self, path: &str) -> Option<&FileRecord> {
        self.records.iter().find(|f| f.path == path)
    }

    /// Root or an existing folder.
    pub fn is_folder(&self, path: &str) -> bool {
        path.is_empty() || self.find(path).is_some_and(|f| f.is_directory)
    }

    /// Direct children of `path`, in dataset order.
    pub fn children_of(&self, path: &str) -> Vec<FileRecord> {
        self.records
            .iter()
            .filter(|f| f.path == child_path(path, &f.name))
            .cloned()
            .collect()
    }

    /// Nested folders for the navigation pane, sorted by name.
    pub fn folder_tree(&self) -> Vec<FolderNode> {
        self.subfolders("")
    }

    fn subfolders(&self, path: &str) -> Vec<FolderNode> {
        let mut nodes: Vec<FolderNode> = self
            .children_of(path)
            .into_iter()
            .filter(|f| f.is_directory)
            .map(|f| FolderNode {
                children: self.subfolders(&f.path),
                name: f.name,
                path: f.path,
            })
            .collect();
        nodes.sort_by_key(|n| n.name.to_lowercase());
        nodes
    }

    /// Forward an error to `on_error`.
    pub fn report(&self, error: impl Into<FileManagerError>) {
        let error = error.into();
        log::warn!("{error}");
        self.on_error.emit(error);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::ErrorKind;

    fn dataset() -> Vec<FileRecord> {
        vec![
            FileRecord::folder("", "Pictures"),
            FileRecord::folder("", "Documents"),
            FileRecord::file("/Pictures", "Pic.png", 2048),
            FileRecord::folder("/Pictures", "Trips"),
            FileRecord::folder("/Pictures/Trips", "Alps"),
            FileRecord::file("", "readme.md", 12),
        ]
    }

    #[test]
    fn test_children_of() {
        let files = FilesState::new(dataset(), Handler::none());
        let names: Vec<_> = files.children_of("").into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Pictures", "Documents", "readme.md"]);
        assert_eq!(files.children_of("/Pictures").len(), 2);
        assert!(files.children_of("/Documents").is_empty());
    }

    #[test]
    fn test_is_folder() {
        let files = FilesState::new(dataset(), Handler::none());
        assert!(files.is_folder(""));
        assert!(files.is_folder("/Pictures/Trips"));
        assert!(!files.is_folder("/readme.md"));
        assert!(!files.is_folder("/Missing"));
    }

    #[test]
    fn test_folder_tree() {
        let files = FilesState::new(dataset(), Handler::none());
        let tree = files.folder_tree();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "Documents");
        assert_eq!(tree[1].name, "Pictures");
        assert_eq!(tree[1].children[0].path, "/Pictures/Trips");
        assert_eq!(tree[1].children[0].children[0].name, "Alps");
    }

    #[test]
    fn test_report_reaches_on_error() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let files = FilesState::new(
            Vec::new(),
            Handler::new(move |e: FileManagerError| sink.lock().unwrap().push(e)),
        );
        files.report(FileManagerError::new(ErrorKind::Delete, "nope"));
        assert_eq!(seen.lock().unwrap()[0].kind, ErrorKind::Delete);
    }
}
