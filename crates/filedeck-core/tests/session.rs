//! End-to-end flows across the state containers, the way the widget drives them.

use std::sync::{Arc, Mutex};

use filedeck_core::naming::{DEFAULT_FOLDER_NAME, unique_name, validate_name};
use filedeck_core::state::{Clipboard, FilesState, NavigationState, SelectionState};
use filedeck_core::{
    ErrorKind, FileManagerCallbacks, FileManagerConfig, FileManagerError, FileRecord, Handler,
    Layout, PasteEvent, PasteOperation, UploadCandidate, format_date,
};

const DATASET: &str = r#"[
    {"name": "Documents", "isDirectory": true, "path": "/Documents", "updatedAt": "2024-09-09T10:30:00Z"},
    {"name": "Pictures", "isDirectory": true, "path": "/Pictures", "updatedAt": "2024-09-09T11:00:00Z"},
    {"name": "Pic.png", "isDirectory": false, "path": "/Pictures/Pic.png", "updatedAt": "2024-09-08T16:45:00Z", "size": 2048, "type": "png"}
]"#;

fn dataset() -> Vec<FileRecord> {
    serde_json::from_str(DATASET).unwrap()
}

#[test]
fn config_from_toml() {
    let config: FileManagerConfig = toml::from_str(
        r#"
        layout = "list"
        initialPath = "/Pictures"
        acceptedFileTypes = ".png, .jpg"
        maxFileSize = 1048576
        timeZone = "Asia/Seoul"

        [uploadConfig]
        url = "https://api.example.com/files"
        method = "PUT"
        headers = { Authorization = "Bearer token" }
        "#,
    )
    .unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.layout, Layout::List);
    let rules = config.upload_rules();
    assert!(rules.check(&UploadCandidate::new("a.jpg", 10), &[]).is_ok());
    assert!(rules.check(&UploadCandidate::new("a.gif", 10), &[]).is_err());
}

#[test]
fn browse_select_cut_and_paste() {
    let pastes = Arc::new(Mutex::new(Vec::<PasteEvent>::new()));
    let selections = Arc::new(Mutex::new(0usize));
    let callbacks = FileManagerCallbacks {
        on_paste: Handler::new({
            let pastes = pastes.clone();
            move |e: PasteEvent| pastes.lock().unwrap().push(e)
        }),
        on_select: Handler::new({
            let selections = selections.clone();
            move |_: Vec<FileRecord>| *selections.lock().unwrap() += 1
        }),
        ..Default::default()
    };

    let files = FilesState::new(dataset(), callbacks.on_error.clone());
    let mut nav = NavigationState::new("/Pictures", &files);
    let mut selection =
        SelectionState::new(callbacks.on_select.clone(), callbacks.on_download.clone());
    let mut clipboard = Clipboard::new(
        callbacks.on_cut.clone(),
        callbacks.on_copy.clone(),
        callbacks.on_paste.clone(),
    );

    let visible = nav.current_files(&files);
    assert_eq!(visible.len(), 1);
    assert_eq!(
        format_date(visible[0].updated_at.as_deref(), "UTC"),
        "Sep 8, 2024 | 04:45:00 PM"
    );

    selection.select_only(visible[0].clone());
    clipboard.cut(selection.selected().to_vec());
    selection.clear();

    assert!(nav.go_up());
    let documents = files.find("/Documents").cloned();
    clipboard.paste(documents.as_ref()).unwrap();

    let pastes = pastes.lock().unwrap();
    assert_eq!(pastes.len(), 1);
    assert_eq!(pastes[0].operation, PasteOperation::Move);
    assert_eq!(pastes[0].destination.as_ref().unwrap().path, "/Documents");
    assert_eq!(*selections.lock().unwrap(), 2);
}

#[test]
fn failed_paste_reaches_on_error() {
    let errors = Arc::new(Mutex::new(Vec::<FileManagerError>::new()));
    let sink = errors.clone();
    let files = FilesState::new(
        dataset(),
        Handler::new(move |e: FileManagerError| sink.lock().unwrap().push(e)),
    );
    let mut clipboard = Clipboard::default();

    let pictures = files.find("/Pictures").cloned().unwrap();
    clipboard.copy(vec![pictures.clone()]);
    if let Err(err) = clipboard.paste(Some(&pictures)) {
        files.report(err);
    }

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Paste);
}

#[test]
fn create_folder_name_in_current_folder() {
    let files = FilesState::new(dataset(), Handler::none());
    let nav = NavigationState::default();
    let siblings = nav.current_files(&files);

    assert_eq!(unique_name(DEFAULT_FOLDER_NAME, &siblings), "New Folder");
    assert!(validate_name("pictures", &siblings).is_err());
    assert_eq!(validate_name("Music", &siblings).unwrap(), "Music");
}
