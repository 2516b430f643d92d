//! Right-click menu.
//!
//! Opened on a record (file actions) or on the empty content area (folder
//! actions). Any click outside closes it.

use leptos::prelude::*;
use leptos_icons::Icon;

use filedeck_core::{Action, FileRecord, Layout};

use crate::components::icons as ic;
use crate::state::{FileManagerState, MenuAnchor};

stylance::import_crate_style!(css, "src/components/file_manager/context_menu.module.css");

#[component]
pub fn ContextMenu(state: FileManagerState) -> impl IntoView {
    move || {
        state.context_menu.get().map(|anchor| {
            let MenuAnchor { x, y, target } = anchor;
            view! {
                <ul
                    class=css::menu
                    role="menu"
                    style=format!("left: {x}px; top: {y}px;")
                    on:click=|ev| ev.stop_propagation()
                    on:contextmenu=|ev| ev.prevent_default()
                >
                    {match target {
                        Some(record) => view! { <RecordItems state=state record=record /> }.into_any(),
                        None => view! { <FolderItems state=state /> }.into_any(),
                    }}
                </ul>
            }
        })
    }
}

/// Entries for a right-clicked file or folder.
#[component]
fn RecordItems(state: FileManagerState, record: FileRecord) -> impl IntoView {
    let single = state.selection.with_untracked(|s| s.len() == 1);
    let can_paste = record.is_directory && !state.clipboard.with_untracked(|c| c.is_empty());
    let is_file = !record.is_directory;
    let open_target = record.clone();
    let paste_target = record;

    view! {
        <MenuItem state=state icon=ic::FOLDER_OPEN label="Open" on_select=move || state.open(&open_target) />
        <MenuDivider />
        <MenuItem state=state icon=ic::CUT label="Cut" on_select=move || state.cut() />
        <MenuItem state=state icon=ic::COPY label="Copy" on_select=move || state.copy() />
        {can_paste.then(|| view! {
            <MenuItem
                state=state
                icon=ic::PASTE
                label="Paste"
                on_select=move || state.paste(Some(paste_target.clone()))
            />
        })}
        <MenuDivider />
        {single.then(|| view! {
            <MenuItem state=state icon=ic::EDIT label="Rename" on_select=move || state.show(Action::Rename) />
        })}
        {is_file.then(|| view! {
            <MenuItem state=state icon=ic::DOWNLOAD label="Download" on_select=move || state.download() />
        })}
        <MenuItem state=state icon=ic::TRASH label="Delete" on_select=move || state.show(Action::Delete) />
    }
}

/// Entries for the empty area of the current folder.
#[component]
fn FolderItems(state: FileManagerState) -> impl IntoView {
    let can_paste = !state.clipboard.with_untracked(|c| c.is_empty());
    let (layout_icon, layout_label, next_layout) = match state.layout.with_untracked(|l| l.layout()) {
        Layout::Grid => (ic::LIST, "List view", Layout::List),
        Layout::List => (ic::GRID, "Grid view", Layout::Grid),
    };

    view! {
        <MenuItem
            state=state
            icon=ic::NEW_FOLDER
            label="New Folder"
            on_select=move || state.show(Action::CreateFolder)
        />
        <MenuItem state=state icon=ic::UPLOAD label="Upload" on_select=move || state.show(Action::Upload) />
        {can_paste.then(|| view! {
            <MenuItem state=state icon=ic::PASTE label="Paste" on_select=move || state.paste(None) />
        })}
        <MenuDivider />
        <MenuItem state=state icon=ic::REFRESH label="Refresh" on_select=move || state.refresh() />
        <MenuItem
            state=state
            icon=layout_icon
            label=layout_label
            on_select=move || state.set_layout(next_layout)
        />
    }
}

/// One entry; closes the menu before running `on_select`.
#[component]
fn MenuItem<F>(
    state: FileManagerState,
    icon: icondata::Icon,
    label: &'static str,
    on_select: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <li role="none">
            <button
                class=css::item
                role="menuitem"
                on:click=move |_| {
                    state.context_menu.set(None);
                    on_select();
                }
            >
                <span class=css::icon><Icon icon=icon /></span>
                <span class=css::label>{label}</span>
            </button>
        </li>
    }
}

#[component]
fn MenuDivider() -> impl IntoView {
    view! { <li class=css::divider role="separator"></li> }
}
