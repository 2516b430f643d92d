//! Demo host: mounts the widget over an in-memory dataset and applies the
//! widget's callbacks to it, the way a real backend would.

use filedeck::FileManager;
use filedeck::config::{DEMO_CONFIG, DEMO_FILES, DEMO_UPLOAD_DELAY_MS, LOG_LEVEL};
use filedeck::core::models::{child_path, is_same_or_descendant};
use filedeck::core::naming::unique_name;
use filedeck::core::{
    CreateFolderEvent, FileManagerCallbacks, FileManagerConfig, FileManagerError, FileRecord,
    Handler, Layout, PasteEvent, PasteOperation, RenameEvent, UploadRequest,
};
use filedeck::utils::logger;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LOG_LEVEL);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, Demo).forget();
}

fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[component]
fn Demo() -> impl IntoView {
    let config: FileManagerConfig = toml::from_str(DEMO_CONFIG).unwrap_or_else(|err| {
        log::error!("demo: bad configuration asset: {err}");
        FileManagerConfig::default()
    });
    let records: Vec<FileRecord> = serde_json::from_str(DEMO_FILES).unwrap_or_else(|err| {
        log::error!("demo: bad dataset asset: {err}");
        Vec::new()
    });

    let files = RwSignal::new(records);
    let is_loading = RwSignal::new(false);

    let callbacks = FileManagerCallbacks {
        on_create_folder: Handler::new(move |event: CreateFolderEvent| {
            let parent = event.parent.map(|p| p.path).unwrap_or_default();
            let folder = FileRecord::folder(&parent, &event.name).with_updated_at(&now_iso());
            files.update(|f| f.push(folder));
        }),
        on_file_uploading: Handler::new(move |request: UploadRequest| {
            Timeout::new(DEMO_UPLOAD_DELAY_MS, move || {
                let file = FileRecord::file(&request.parent_path, &request.file_name, request.size)
                    .with_updated_at(&now_iso());
                files.update(|f| f.push(file));
                request
                    .ticket
                    .complete(format!("{{\"uploaded\":\"{}\"}}", request.file_name));
            })
            .forget();
        }),
        on_file_uploaded: Handler::new(|response: String| log::info!("demo: uploaded {response}")),
        on_paste: Handler::new(move |event: PasteEvent| files.update(|f| apply_paste(f, &event))),
        on_rename: Handler::new(move |event: RenameEvent| files.update(|f| apply_rename(f, &event))),
        on_delete: Handler::new(move |targets: Vec<FileRecord>| {
            files.update(|f| {
                f.retain(|r| !targets.iter().any(|t| is_same_or_descendant(&r.path, &t.path)))
            })
        }),
        on_download: Handler::new(|targets: Vec<FileRecord>| {
            let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
            log::info!("demo: download {}", names.join(", "));
        }),
        on_layout_change: Handler::new(|layout: Layout| log::info!("demo: layout {layout}")),
        on_refresh: Handler::new(move |()| {
            is_loading.set(true);
            Timeout::new(400, move || is_loading.set(false)).forget();
        }),
        on_file_open: Handler::new(|file: FileRecord| log::info!("demo: open {}", file.path)),
        on_error: Handler::new(|error: FileManagerError| log::warn!("demo: {error}")),
        ..Default::default()
    };

    view! {
        <FileManager files=files config=config callbacks=callbacks is_loading=is_loading />
    }
}

/// Rewrite `record` and everything under it to live at `new_path`.
fn relocate(record: &FileRecord, old_root: &str, new_root: &str) -> FileRecord {
    let mut moved = record.clone();
    moved.path = format!("{new_root}{}", &record.path[old_root.len()..]);
    if record.path == old_root {
        moved.name = new_root.rsplit('/').next().unwrap_or_default().to_string();
    }
    moved
}

fn apply_rename(records: &mut [FileRecord], event: &RenameEvent) {
    let old_root = event.file.path.clone();
    let new_root = child_path(event.file.parent_path(), &event.new_name);
    for record in records.iter_mut() {
        if is_same_or_descendant(&record.path, &old_root) {
            *record = relocate(record, &old_root, &new_root);
        }
    }
}

fn apply_paste(records: &mut Vec<FileRecord>, event: &PasteEvent) {
    let dest = event
        .destination
        .as_ref()
        .map(|d| d.path.clone())
        .unwrap_or_default();

    for source in &event.files {
        let siblings: Vec<FileRecord> = records
            .iter()
            .filter(|r| r.parent_path() == dest && r.path != source.path)
            .cloned()
            .collect();
        let new_root = child_path(&dest, &unique_name(&source.name, &siblings));
        if new_root == source.path {
            continue;
        }
        let subtree: Vec<FileRecord> = records
            .iter()
            .filter(|r| is_same_or_descendant(&r.path, &source.path))
            .map(|r| relocate(r, &source.path, &new_root))
            .collect();
        if event.operation == PasteOperation::Move {
            records.retain(|r| !is_same_or_descendant(&r.path, &source.path));
        }
        records.extend(subtree);
    }
}
