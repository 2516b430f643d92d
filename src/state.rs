//! Widget state.
//!
//! Each core container lives in its own [`RwSignal`]. [`FileManagerState`]
//! bundles the handles so the composition root can pass one `Copy` value to
//! every child component, and carries the operations that touch more than
//! one container.
//!
//! Callbacks are emitted inside signal updates. Host callbacks never see the
//! widget's signals, so this cannot re-enter a borrow. The one exception is
//! `on_file_uploading`, whose ticket may report back synchronously; it is
//! emitted after the queue update returns.

use leptos::prelude::*;

use filedeck_core::naming::{self, DEFAULT_FOLDER_NAME};
use filedeck_core::shortcut::Shortcut;
use filedeck_core::state::{Clipboard, FilesState, LayoutState, NavigationState, SelectionState};
use filedeck_core::{
    Action, ActionTrigger, ColumnResizeController, CreateFolderEvent, ErrorKind,
    FileManagerCallbacks, FileManagerConfig, FileManagerError, FileRecord, Handler, Layout,
    NameError, RenameEvent, UploadCandidate, UploadConfig, UploadOutcome, UploadQueue,
    UploadRules,
};

/// Settings fixed at construction.
#[derive(Clone, Debug)]
pub struct Settings {
    pub upload_config: UploadConfig,
    pub upload_rules: UploadRules,
    pub enable_file_preview: bool,
    pub file_preview_path: String,
    pub time_zone: String,
    pub callbacks: FileManagerCallbacks,
}

/// Where the context menu is open, in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuAnchor {
    pub x: i32,
    pub y: i32,
    /// Right-clicked record; `None` for the empty area.
    pub target: Option<FileRecord>,
}

/// Handles to every piece of widget state.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct FileManagerState {
    pub files: RwSignal<FilesState>,
    pub navigation: RwSignal<NavigationState>,
    pub selection: RwSignal<SelectionState>,
    pub clipboard: RwSignal<Clipboard>,
    pub layout: RwSignal<LayoutState>,
    pub action: RwSignal<ActionTrigger>,
    pub uploads: RwSignal<UploadQueue>,
    pub resize: RwSignal<ColumnResizeController>,
    pub context_menu: RwSignal<Option<MenuAnchor>>,
    /// Path of the last plain or ctrl click, for shift-click ranges.
    pub anchor: RwSignal<Option<String>>,
    pub settings: StoredValue<Settings>,
}

impl FileManagerState {
    /// Build every container from a validated configuration.
    pub fn new(
        config: &FileManagerConfig,
        records: Vec<FileRecord>,
        resize: ColumnResizeController,
        callbacks: FileManagerCallbacks,
    ) -> Self {
        let files = FilesState::new(records, callbacks.on_error.clone());
        let navigation = NavigationState::new(&config.initial_path, &files);
        Self {
            navigation: RwSignal::new(navigation),
            files: RwSignal::new(files),
            selection: RwSignal::new(SelectionState::new(
                callbacks.on_select.clone(),
                callbacks.on_download.clone(),
            )),
            clipboard: RwSignal::new(Clipboard::new(
                callbacks.on_cut.clone(),
                callbacks.on_copy.clone(),
                callbacks.on_paste.clone(),
            )),
            layout: RwSignal::new(LayoutState::new(
                config.layout,
                callbacks.on_layout_change.clone(),
            )),
            action: RwSignal::new(ActionTrigger::default()),
            uploads: RwSignal::new(UploadQueue::new(
                callbacks.on_file_uploaded.clone(),
                callbacks.on_error.clone(),
            )),
            resize: RwSignal::new(resize),
            context_menu: RwSignal::new(None),
            anchor: RwSignal::new(None),
            settings: StoredValue::new(Settings {
                upload_config: config.upload_config.clone(),
                upload_rules: config.upload_rules(),
                enable_file_preview: config.enable_file_preview,
                file_preview_path: config.file_preview_path.clone(),
                time_zone: config.time_zone.clone(),
                callbacks,
            }),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Children of the current folder, folders first.
    pub fn visible_files(&self) -> Vec<FileRecord> {
        self.navigation
            .with(|n| self.files.with(|f| n.current_files(f)))
    }

    /// The folder being shown; `None` at the root.
    pub fn current_folder(&self) -> Option<FileRecord> {
        let path = self.navigation.with_untracked(|n| n.current_path().to_string());
        self.files.with_untracked(|f| f.find(&path).cloned())
    }

    pub fn selected(&self) -> Vec<FileRecord> {
        self.selection.with_untracked(|s| s.selected().to_vec())
    }

    /// The selected record when exactly one is selected.
    pub fn single_selected(&self) -> Option<FileRecord> {
        self.selection.with_untracked(|s| match s.selected() {
            [one] => Some(one.clone()),
            _ => None,
        })
    }

    pub fn time_zone(&self) -> String {
        self.settings.with_value(|s| s.time_zone.clone())
    }

    fn callbacks(&self) -> FileManagerCallbacks {
        self.settings.with_value(|s| s.callbacks.clone())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show `path` if it is the root or a folder. Clears the selection.
    pub fn navigate(&self, path: &str) {
        let moved = self.files.with_untracked(|files| {
            self.navigation
                .try_update(|n| n.navigate_to(path, files))
                .unwrap_or(false)
        });
        if moved {
            self.selection.update(|s| s.clear());
            self.anchor.set(None);
        }
    }

    pub fn go_up(&self) {
        let parent = self
            .navigation
            .with_untracked(|n| filedeck_core::models::parent_of(n.current_path()).to_string());
        self.navigate(&parent);
    }

    /// Double-click or Enter on a record.
    ///
    /// Folders are entered. Files are reported through `on_file_open` and,
    /// when previews are enabled, shown in the preview panel.
    pub fn open(&self, record: &FileRecord) {
        if record.is_directory {
            self.navigate(&record.path);
            return;
        }
        self.callbacks().on_file_open.emit(record.clone());
        if self.settings.with_value(|s| s.enable_file_preview) {
            self.selection.update(|s| s.select_only(record.clone()));
            self.action.update(|a| a.show(Action::Preview));
        }
    }

    /// Replace the dataset, leaving the current folder if it vanished.
    pub fn replace_files(&self, records: Vec<FileRecord>) {
        self.files.update(|f| f.replace(records));
        let path = self.navigation.with_untracked(|n| n.current_path().to_string());
        if !self.files.with_untracked(|f| f.is_folder(&path)) {
            self.navigate("");
        }
        // Selected records may have been renamed or removed.
        self.selection.update(|s| s.clear());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Plain, ctrl and shift click on a record.
    pub fn click(&self, record: &FileRecord, toggle: bool, range: bool) {
        let anchor = self.anchor.get_untracked();
        match (range, anchor) {
            (true, Some(anchor)) => {
                let visible = self.visible_files();
                self.selection
                    .update(|s| s.select_range(&visible, &anchor, &record.path));
                return;
            }
            _ if toggle => self.selection.update(|s| s.toggle(record.clone())),
            _ => self.selection.update(|s| s.select_only(record.clone())),
        }
        self.anchor.set(Some(record.path.clone()));
    }

    pub fn select_all(&self) {
        let visible = self.visible_files();
        self.selection.update(|s| s.select_all(&visible));
    }

    pub fn clear_selection(&self) {
        self.selection.update(|s| s.clear());
        self.anchor.set(None);
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    pub fn cut(&self) {
        let selected = self.selected();
        self.clipboard.update(|c| {
            c.cut(selected);
        });
    }

    pub fn copy(&self) {
        let selected = self.selected();
        self.clipboard.update(|c| {
            c.copy(selected);
        });
    }

    /// Paste into `destination`, or the current folder when `None`.
    pub fn paste(&self, destination: Option<FileRecord>) {
        let destination = destination.or_else(|| self.current_folder());
        let result = self
            .clipboard
            .try_update(|c| c.paste(destination.as_ref()).map(|_| ()));
        if let Some(Err(err)) = result {
            self.report(err);
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Suggested name for the create-folder dialog.
    pub fn default_folder_name(&self) -> String {
        naming::unique_name(DEFAULT_FOLDER_NAME, &self.visible_files())
    }

    /// Validate `name` and ask the host to create the folder here.
    pub fn create_folder(&self, name: &str) -> Result<(), NameError> {
        let name = naming::validate_name(name, &self.visible_files())?;
        let parent = self.current_folder();
        self.callbacks()
            .on_create_folder
            .emit(CreateFolderEvent { name, parent });
        self.action.update(|a| a.close());
        Ok(())
    }

    /// Validate and report renaming the single selected record.
    pub fn rename(&self, new_name: &str) -> Result<(), NameError> {
        let Some(file) = self.single_selected() else {
            self.action.update(|a| a.close());
            return Ok(());
        };
        let siblings = self.visible_files();
        if let Some(new_name) = naming::validate_rename(&file, new_name, &siblings)? {
            self.callbacks()
                .on_rename
                .emit(RenameEvent { file, new_name });
        }
        self.action.update(|a| a.close());
        Ok(())
    }

    pub fn delete(&self) {
        let selected = self.selected();
        if !selected.is_empty() {
            self.callbacks().on_delete.emit(selected);
            self.clear_selection();
        }
        self.action.update(|a| a.close());
    }

    pub fn download(&self) {
        self.selection.with_untracked(|s| s.download());
    }

    pub fn refresh(&self) {
        self.clear_selection();
        self.callbacks().on_refresh.emit(());
    }

    /// Open an action dialog if it applies to the current selection.
    pub fn show(&self, action: Action) {
        let count = self.selection.with_untracked(|s| s.len());
        let applies = match action {
            Action::Rename | Action::Preview => count == 1,
            Action::Delete => count > 0,
            Action::CreateFolder | Action::Upload => true,
        };
        if applies {
            self.context_menu.set(None);
            self.action.update(|a| a.show(action));
        }
    }

    pub fn close_action(&self) {
        self.action.update(|a| a.close());
    }

    pub fn set_layout(&self, layout: Layout) {
        self.layout.update(|l| {
            l.set(layout);
        });
    }

    pub fn toggle_layout(&self) {
        self.layout.update(|l| l.toggle());
    }

    // =========================================================================
    // Uploads
    // =========================================================================

    /// Check each candidate and hand accepted ones to `on_file_uploading`.
    pub fn upload(&self, candidates: Vec<UploadCandidate>) {
        let siblings = self.visible_files();
        let parent = self.current_folder();
        let (config, rules, callbacks) = self.settings.with_value(|s| {
            (s.upload_config.clone(), s.upload_rules.clone(), s.callbacks.clone())
        });
        let uploads = self.uploads;
        let sink = Handler::new(move |outcome: UploadOutcome| {
            uploads.update(|q| {
                q.finish(outcome);
            });
        });

        for candidate in candidates {
            if let Err(rejection) = rules.check(&candidate, &siblings) {
                self.uploads.update(|q| q.reject(&candidate, rejection));
                continue;
            }
            let request = self
                .uploads
                .try_update(|q| q.enqueue(&config, &candidate, parent.as_ref(), sink.clone()));
            if let Some(request) = request {
                log::info!("upload: '{}' -> {}", request.file_name, request.url);
                callbacks.on_file_uploading.emit(request);
            }
        }
    }

    // =========================================================================
    // Shortcuts & Errors
    // =========================================================================

    pub fn run_shortcut(&self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::Cut => self.cut(),
            Shortcut::Copy => self.copy(),
            Shortcut::Paste => self.paste(None),
            Shortcut::SelectAll => self.select_all(),
            Shortcut::CreateFolder => self.show(Action::CreateFolder),
            Shortcut::Upload => self.show(Action::Upload),
            Shortcut::Download => self.download(),
            Shortcut::Delete => self.show(Action::Delete),
            Shortcut::Rename => self.show(Action::Rename),
            Shortcut::Refresh => self.refresh(),
            Shortcut::ClearSelection => {
                self.context_menu.set(None);
                self.close_action();
                self.clear_selection();
            }
            Shortcut::SetLayout(layout) => self.set_layout(layout),
        }
    }

    /// Forward a failure to `on_error`.
    pub fn report(&self, error: impl Into<FileManagerError>) {
        self.files.with_untracked(|f| f.report(error));
    }

    /// Name errors from dialogs carry the action they came from.
    pub fn report_name_error(&self, kind: ErrorKind, error: &NameError) {
        self.report(FileManagerError::new(kind, error.to_string()));
    }
}
