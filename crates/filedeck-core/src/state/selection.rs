//! Selection scope.

use crate::callback::Handler;
use crate::models::FileRecord;

/// The set of selected records, in selection order.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: Vec<FileRecord>,
    on_select: Handler<Vec<FileRecord>>,
    on_download: Handler<Vec<FileRecord>>,
}

impl SelectionState {
    pub fn new(on_select: Handler<Vec<FileRecord>>, on_download: Handler<Vec<FileRecord>>) -> Self {
        Self {
            selected: Vec::new(),
            on_select,
            on_download,
        }
    }

    pub fn selected(&self) -> &[FileRecord] {
        &self.selected
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.iter().any(|f| f.path == path)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Replace the selection, emitting `on_select` if it changed.
    pub fn set(&mut self, records: Vec<FileRecord>) {
        let same = records.len() == self.selected.len()
            && records.iter().zip(&self.selected).all(|(a, b)| a.path == b.path);
        if same {
            return;
        }
        self.selected = records;
        self.on_select.emit(self.selected.clone());
    }

    pub fn select_only(&mut self, record: FileRecord) {
        self.set(vec![record]);
    }

    /// Add or remove one record (ctrl/cmd-click).
    pub fn toggle(&mut self, record: FileRecord) {
        let mut next = self.selected.clone();
        if let Some(idx) = next.iter().position(|f| f.path == record.path) {
            next.remove(idx);
        } else {
            next.push(record);
        }
        self.set(next);
    }

    /// Select the visible records between `anchor` and `target` inclusive
    /// (shift-click). Falls back to selecting `target` alone when the anchor
    /// is not visible.
    pub fn select_range(&mut self, visible: &[FileRecord], anchor: &str, target: &str) {
        let Some(to) = visible.iter().position(|f| f.path == target) else {
            return;
        };
        let Some(from) = visible.iter().position(|f| f.path == anchor) else {
            self.set(vec![visible[to].clone()]);
            return;
        };
        let (start, end) = if from <= to { (from, to) } else { (to, from) };
        self.set(visible[start..=end].to_vec());
    }

    pub fn select_all(&mut self, visible: &[FileRecord]) {
        self.set(visible.to_vec());
    }

    pub fn clear(&mut self) {
        self.set(Vec::new());
    }

    /// Emit `on_download` with the selected files. Folders are skipped;
    /// returns `false` when nothing is downloadable.
    pub fn download(&self) -> bool {
        let files: Vec<FileRecord> = self
            .selected
            .iter()
            .filter(|f| !f.is_directory)
            .cloned()
            .collect();
        if files.is_empty() {
            return false;
        }
        self.on_download.emit(files);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Handler<Vec<FileRecord>>, Arc<Mutex<Vec<Vec<String>>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let handler = Handler::new(move |files: Vec<FileRecord>| {
            sink.lock()
                .unwrap()
                .push(files.into_iter().map(|f| f.name).collect())
        });
        (handler, log)
    }

    fn visible() -> Vec<FileRecord> {
        ["a", "b", "c", "d"]
            .iter()
            .map(|n| FileRecord::file("", n, 1))
            .collect()
    }

    #[test]
    fn test_select_only_and_toggle_emit() {
        let (on_select, log) = recorder();
        let mut selection = SelectionState::new(on_select, Handler::none());
        let files = visible();

        selection.select_only(files[0].clone());
        selection.select_only(files[0].clone());
        selection.toggle(files[2].clone());
        selection.toggle(files[0].clone());

        assert_eq!(
            *log.lock().unwrap(),
            vec![vec!["a"], vec!["a", "c"], vec!["c"]]
        );
        assert!(selection.is_selected("/c"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_select_range() {
        let mut selection = SelectionState::default();
        let files = visible();
        selection.select_range(&files, "/d", "/b");
        let names: Vec<_> = selection.selected().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "d"]);

        selection.select_range(&files, "/missing", "/a");
        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected("/a"));
    }

    #[test]
    fn test_select_all_and_clear() {
        let (on_select, log) = recorder();
        let mut selection = SelectionState::new(on_select, Handler::none());
        selection.select_all(&visible());
        assert_eq!(selection.len(), 4);
        selection.clear();
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_download_skips_folders() {
        let (on_download, log) = recorder();
        let mut selection = SelectionState::new(Handler::none(), on_download);
        assert!(!selection.download());

        selection.set(vec![FileRecord::folder("", "Docs")]);
        assert!(!selection.download());

        selection.toggle(FileRecord::file("", "a.txt", 3));
        assert!(selection.download());
        assert_eq!(*log.lock().unwrap(), vec![vec!["a.txt"]]);
    }
}
