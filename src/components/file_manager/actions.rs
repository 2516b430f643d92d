//! Dialogs and panels opened by an [`Action`].
//!
//! At most one is open at a time; which one is held by the action trigger.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use filedeck_core::{
    Action, ErrorKind, FileKind, FileRecord, NameError, UploadStatus, format_data_size,
    format_date,
};

use crate::components::icons as ic;
use crate::config::SIZE_DECIMALS;
use crate::state::FileManagerState;
use crate::utils::dom::{focus_element, upload_candidates};

stylance::import_crate_style!(css, "src/components/file_manager/actions.module.css");

/// Selector of the text field a dialog focuses when it opens.
const DIALOG_INPUT: &str = "[data-dialog-input]";

/// Renders whichever action is active.
#[component]
pub fn Actions(state: FileManagerState) -> impl IntoView {
    let active = Memo::new(move |_| state.action.with(|a| a.active()));

    move || match active.get() {
        Some(Action::CreateFolder) => view! { <CreateFolderDialog state=state /> }.into_any(),
        Some(Action::Rename) => view! { <RenameDialog state=state /> }.into_any(),
        Some(Action::Delete) => view! { <DeleteDialog state=state /> }.into_any(),
        Some(Action::Upload) => view! { <UploadPanel state=state /> }.into_any(),
        Some(Action::Preview) => view! { <PreviewPanel state=state /> }.into_any(),
        None => ().into_any(),
    }
}

// =============================================================================
// Dialog Shell
// =============================================================================

/// Modal frame with a title bar. Clicking the backdrop closes it.
#[component]
fn Dialog(state: FileManagerState, action: Action, children: Children) -> impl IntoView {
    view! {
        <div
            class=css::backdrop
            on:click=move |ev| {
                ev.stop_propagation();
                state.close_action();
            }
        >
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-label=action.title()
                on:click=|ev| ev.stop_propagation()
            >
                <header class=css::header>
                    <span class=css::title>{action.title()}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| state.close_action()
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <div class=css::body>{children()}</div>
            </div>
        </div>
    }
}

/// Name field shared by the create-folder and rename dialogs.
#[component]
fn NameForm<F>(
    name: RwSignal<String>,
    error: RwSignal<Option<String>>,
    submit_label: &'static str,
    on_submit: F,
    on_cancel: Callback<()>,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    request_animation_frame(|| {
        focus_element(DIALOG_INPUT);
    });

    view! {
        <input
            class=move || {
                if error.with(|e| e.is_some()) {
                    format!("{} {}", css::input, css::inputError)
                } else {
                    css::input.to_string()
                }
            }
            type="text"
            data-dialog-input=""
            prop:value=move || name.get()
            on:input=move |ev| {
                name.set(event_target_value(&ev));
                error.set(None);
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => {
                    ev.prevent_default();
                    on_submit();
                }
                "Escape" => {
                    ev.stop_propagation();
                    on_cancel.run(());
                }
                _ => {}
            }
        />
        {move || error.get().map(|message| view! { <p class=css::error role="alert">{message}</p> })}
        <footer class=css::footer>
            <button class=css::secondary on:click=move |_| on_cancel.run(())>"Cancel"</button>
            <button class=css::primary on:click=move |_| on_submit()>{submit_label}</button>
        </footer>
    }
}

/// Keep the dialog open with the message; also tell the host.
fn show_name_error(
    state: FileManagerState,
    error: RwSignal<Option<String>>,
    kind: ErrorKind,
    result: Result<(), NameError>,
) {
    if let Err(err) = result {
        error.set(Some(err.to_string()));
        state.report_name_error(kind, &err);
    }
}

// =============================================================================
// Create Folder / Rename / Delete
// =============================================================================

#[component]
fn CreateFolderDialog(state: FileManagerState) -> impl IntoView {
    let name = RwSignal::new(state.default_folder_name());
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        let result = state.create_folder(&name.get_untracked());
        show_name_error(state, error, ErrorKind::CreateFolder, result);
    };

    view! {
        <Dialog state=state action=Action::CreateFolder>
            <NameForm
                name=name
                error=error
                submit_label="Create"
                on_submit=submit
                on_cancel=Callback::new(move |_| state.close_action())
            />
        </Dialog>
    }
}

#[component]
fn RenameDialog(state: FileManagerState) -> impl IntoView {
    let original = state.single_selected().map(|f| f.name).unwrap_or_default();
    let name = RwSignal::new(original);
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        let result = state.rename(&name.get_untracked());
        show_name_error(state, error, ErrorKind::Rename, result);
    };

    view! {
        <Dialog state=state action=Action::Rename>
            <NameForm
                name=name
                error=error
                submit_label="Rename"
                on_submit=submit
                on_cancel=Callback::new(move |_| state.close_action())
            />
        </Dialog>
    }
}

#[component]
fn DeleteDialog(state: FileManagerState) -> impl IntoView {
    let targets = state.selected();
    let prompt = match targets.as_slice() {
        [one] => format!("Are you sure you want to delete \"{}\"?", one.name),
        many => format!("Are you sure you want to delete these {} items?", many.len()),
    };
    let has_folders = targets.iter().any(|f| f.is_directory);

    view! {
        <Dialog state=state action=Action::Delete>
            <p class=css::message>{prompt}</p>
            {has_folders.then(|| view! {
                <p class=css::hint>"Folders are deleted with everything inside them."</p>
            })}
            <footer class=css::footer>
                <button class=css::secondary on:click=move |_| state.close_action()>"Cancel"</button>
                <button class=css::danger on:click=move |_| state.delete()>"Delete"</button>
            </footer>
        </Dialog>
    }
}

// =============================================================================
// Upload
// =============================================================================

#[component]
fn UploadPanel(state: FileManagerState) -> impl IntoView {
    let file_input = NodeRef::<html::Input>::new();
    let dragging_over = RwSignal::new(false);
    let (accept, limit) = state.settings.with_value(|s| {
        (
            s.upload_rules.accept_attribute(),
            s.upload_rules
                .max_file_size()
                .map(|max| format_data_size(max, SIZE_DECIMALS)),
        )
    });
    let hint = match (accept.is_empty(), &limit) {
        (true, None) => String::new(),
        (true, Some(limit)) => format!("Up to {limit}"),
        (false, None) => format!("Accepted: {accept}"),
        (false, Some(limit)) => format!("Accepted: {accept} · up to {limit}"),
    };
    let entries = Memo::new(move |_| state.uploads.with(|q| q.entries().to_vec()));

    view! {
        <Dialog state=state action=Action::Upload>
            <div
                class=move || {
                    if dragging_over.get() {
                        format!("{} {}", css::dropZone, css::dropZoneActive)
                    } else {
                        css::dropZone.to_string()
                    }
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    dragging_over.set(true);
                }
                on:dragleave=move |_| dragging_over.set(false)
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    dragging_over.set(false);
                    state.upload(upload_candidates(ev.data_transfer().and_then(|dt| dt.files())));
                }
            >
                <span class=css::dropIcon><Icon icon=ic::UPLOAD /></span>
                <p>"Drag files here or"</p>
                <button
                    class=css::primary
                    on:click=move |_| {
                        if let Some(input) = file_input.get_untracked() {
                            input.click();
                        }
                    }
                >
                    "Browse files"
                </button>
                <p class=css::hint>{hint}</p>
                <input
                    node_ref=file_input
                    class=css::hiddenInput
                    type="file"
                    multiple=true
                    accept=accept
                    on:change=move |ev| {
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        state.upload(upload_candidates(input.files()));
                        input.set_value("");
                    }
                />
            </div>

            <Show when=move || !entries.with(|e| e.is_empty())>
                <ul class=css::uploadList>
                    <For
                        each=move || entries.get()
                        key=|entry| (entry.id, entry.status.clone())
                        children=move |entry| {
                            let (icon, status_class, detail) = match entry.status {
                                UploadStatus::Pending => (ic::PENDING, css::pending, String::new()),
                                UploadStatus::Done => (ic::CHECK, css::done, String::new()),
                                UploadStatus::Failed(message) => (ic::CLOSE, css::failed, message),
                            };
                            view! {
                                <li class=format!("{} {}", css::uploadRow, status_class)>
                                    <span class=css::statusIcon><Icon icon=icon /></span>
                                    <span class=css::uploadName>{entry.file_name}</span>
                                    <span class=css::uploadDetail>{detail}</span>
                                </li>
                            }
                        }
                    />
                </ul>
                <footer class=css::footer>
                    <button
                        class=css::secondary
                        on:click=move |_| state.uploads.update(|q| q.clear_finished())
                    >
                        "Clear finished"
                    </button>
                </footer>
            </Show>
        </Dialog>
    }
}

// =============================================================================
// Preview
// =============================================================================

#[component]
fn PreviewPanel(state: FileManagerState) -> impl IntoView {
    let Some(file) = state.single_selected() else {
        return view! {
            <Dialog state=state action=Action::Preview>
                <p class=css::message>"Select a single file to preview."</p>
            </Dialog>
        }
        .into_any();
    };
    let kind = FileKind::of(&file);
    let preview_path = state.settings.with_value(|s| s.file_preview_path.clone());
    let modified = format_date(file.updated_at.as_deref(), &state.time_zone());
    let size = file
        .size
        .map(|bytes| format_data_size(bytes, SIZE_DECIMALS))
        .unwrap_or_default();

    view! {
        <Dialog state=state action=Action::Preview>
            <div class=css::preview>
                <PreviewMedia file=file.clone() kind=kind preview_path=preview_path />
                <dl class=css::details>
                    <dt>"Name"</dt>
                    <dd>{file.name.clone()}</dd>
                    <dt>"Modified"</dt>
                    <dd>{modified}</dd>
                    <dt>"Size"</dt>
                    <dd>{size}</dd>
                </dl>
            </div>
            <footer class=css::footer>
                <button class=css::secondary on:click=move |_| state.close_action()>"Close"</button>
                <button class=css::primary on:click=move |_| state.download()>
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </button>
            </footer>
        </Dialog>
    }
    .into_any()
}

/// Media element for `file`, loaded from `preview_path` + the record path.
#[component]
fn PreviewMedia(file: FileRecord, kind: FileKind, preview_path: String) -> impl IntoView {
    if preview_path.is_empty() || !kind.is_previewable() {
        return view! {
            <div class=css::noPreview>
                <span class=css::previewIcon><Icon icon=ic::for_kind(kind) /></span>
                <p>"Preview unavailable"</p>
            </div>
        }
        .into_any();
    }

    let src = format!("{}{}", preview_path.trim_end_matches('/'), file.path);
    match kind {
        FileKind::Image => view! { <img class=css::media src=src alt=file.name /> }.into_any(),
        FileKind::Video => view! { <video class=css::media src=src controls=true></video> }.into_any(),
        FileKind::Audio => view! { <audio class=css::audio src=src controls=true></audio> }.into_any(),
        _ => view! { <iframe class=css::frame src=src title=file.name></iframe> }.into_any(),
    }
}
