//! Navigation path scope.

use std::cmp::Ordering;

use super::FilesState;
use crate::models::{FileRecord, parent_of};

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub path: String,
}

/// Folders first, then case-insensitive by name.
pub fn sort_files(files: &mut [FileRecord]) {
    files.sort_by(|a, b| match (a.is_directory, b.is_directory) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
}

/// The folder currently shown in the content pane.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
}

impl NavigationState {
    /// Starts at `initial_path` if it names an existing folder, otherwise at
    /// the root.
    pub fn new(initial_path: &str, files: &FilesState) -> Self {
        let current_path = if files.is_folder(initial_path) {
            initial_path.to_string()
        } else {
            log::debug!("navigation: initial path '{initial_path}' not found, using root");
            String::new()
        };
        Self { current_path }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn is_root(&self) -> bool {
        self.current_path.is_empty()
    }

    /// Moves to `path` if it is the root or an existing folder.
    pub fn navigate_to(&mut self, path: &str, files: &FilesState) -> bool {
        if !files.is_folder(path) || path == self.current_path {
            return false;
        }
        self.current_path = path.to_string();
        true
    }

    /// Moves to the parent folder. No-op at the root.
    pub fn go_up(&mut self) -> bool {
        if self.is_root() {
            return false;
        }
        self.current_path = parent_of(&self.current_path).to_string();
        true
    }

    /// Record of the current folder; `None` at the root.
    pub fn current_folder(&self, files: &FilesState) -> Option<FileRecord> {
        files.find(&self.current_path).cloned()
    }

    /// Sorted contents of the current folder.
    pub fn current_files(&self, files: &FilesState) -> Vec<FileRecord> {
        let mut entries = files.children_of(&self.current_path);
        sort_files(&mut entries);
        entries
    }

    /// `Home` followed by one crumb per path segment.
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        let mut crumbs = vec![Crumb {
            name: "Home".to_string(),
            path: String::new(),
        }];
        let mut path = String::new();
        for segment in self.current_path.split('/').filter(|s| !s.is_empty()) {
            path.push('/');
            path.push_str(segment);
            crumbs.push(Crumb {
                name: segment.to_string(),
                path: path.clone(),
            });
        }
        crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::Handler;

    fn files() -> FilesState {
        FilesState::new(
            vec![
                FileRecord::folder("", "Pictures"),
                FileRecord::file("/Pictures", "b.png", 1),
                FileRecord::file("/Pictures", "A.png", 1),
                FileRecord::folder("/Pictures", "zoo"),
                FileRecord::folder("/Pictures", "Alps"),
                FileRecord::file("", "top.txt", 1),
            ],
            Handler::none(),
        )
    }

    #[test]
    fn test_initial_path() {
        let files = files();
        assert_eq!(NavigationState::new("/Pictures", &files).current_path(), "/Pictures");
        assert_eq!(NavigationState::new("/Nope", &files).current_path(), "");
        assert_eq!(NavigationState::new("/top.txt", &files).current_path(), "");
    }

    #[test]
    fn test_current_files_sorted() {
        let files = files();
        let nav = NavigationState::new("/Pictures", &files);
        let names: Vec<_> = nav.current_files(&files).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Alps", "zoo", "A.png", "b.png"]);
        assert_eq!(nav.current_folder(&files).unwrap().name, "Pictures");
    }

    #[test]
    fn test_navigate_and_go_up() {
        let files = files();
        let mut nav = NavigationState::default();
        assert!(nav.navigate_to("/Pictures/Alps", &files));
        assert!(!nav.navigate_to("/Pictures/b.png", &files));
        assert!(!nav.navigate_to("/Pictures/Alps", &files));
        assert!(nav.go_up());
        assert_eq!(nav.current_path(), "/Pictures");
        assert!(nav.go_up());
        assert!(nav.is_root());
        assert!(!nav.go_up());
    }

    #[test]
    fn test_breadcrumb() {
        let files = files();
        let mut nav = NavigationState::default();
        assert_eq!(nav.breadcrumb().len(), 1);
        nav.navigate_to("/Pictures/Alps", &files);
        let crumbs = nav.breadcrumb();
        assert_eq!(
            crumbs.iter().map(|c| c.path.as_str()).collect::<Vec<_>>(),
            vec!["", "/Pictures", "/Pictures/Alps"]
        );
        assert_eq!(crumbs[0].name, "Home");
    }
}
