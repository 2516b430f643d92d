//! Contents of the current folder.
//!
//! Renders the grid or list layout. Click selects, ctrl/cmd-click toggles,
//! shift-click selects a range, double-click opens.

use leptos::prelude::*;
use leptos_icons::Icon;

use filedeck_core::{FileKind, FileRecord, Layout, format_data_size, format_date};

use crate::components::icons as ic;
use crate::config::SIZE_DECIMALS;
use crate::state::{FileManagerState, MenuAnchor};

stylance::import_crate_style!(css, "src/components/file_manager/file_list.module.css");

#[component]
pub fn FileList(state: FileManagerState) -> impl IntoView {
    let entries = Memo::new(move |_| state.visible_files());
    let layout = Signal::derive(move || state.layout.with(|l| l.layout()));

    let list_class = move || match layout.get() {
        Layout::Grid => format!("{} {}", css::files, css::grid),
        Layout::List => format!("{} {}", css::files, css::list),
    };

    view! {
        <div
            class=list_class
            role="grid"
            aria-label="Files"
            on:click=move |_| state.clear_selection()
        >
            <Show when=move || layout.get() == Layout::List>
                <div class=css::listHeader role="row">
                    <span class=css::headerIcon></span>
                    <span class=css::headerName>"Name"</span>
                    <span class=css::headerDate>"Modified"</span>
                    <span class=css::headerSize>"Size"</span>
                </div>
            </Show>
            <Show
                when=move || !entries.with(|e| e.is_empty())
                fallback=|| view! { <p class=css::empty>"This folder is empty."</p> }
            >
                <For
                    each=move || entries.get()
                    key=|record| record.path.clone()
                    children=move |record| view! { <FileItem state=state record=record /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn FileItem(state: FileManagerState, record: FileRecord) -> impl IntoView {
    let kind = FileKind::of(&record);
    let icon = ic::for_kind(kind);
    let modified = format_date(record.updated_at.as_deref(), &state.time_zone());
    let size = match (record.is_directory, record.size) {
        (false, Some(bytes)) => format_data_size(bytes, SIZE_DECIMALS),
        _ => String::new(),
    };

    let is_selected = {
        let path = record.path.clone();
        Signal::derive(move || state.selection.with(|s| s.is_selected(&path)))
    };
    let is_cut = {
        let path = record.path.clone();
        Signal::derive(move || state.clipboard.with(|c| c.is_cut(&path)))
    };

    let item_class = move || {
        let mut class = css::item.to_string();
        if is_selected.get() {
            class.push(' ');
            class.push_str(css::selected);
        }
        if is_cut.get() {
            class.push(' ');
            class.push_str(css::cut);
        }
        class
    };

    let on_click = {
        let record = record.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            state.context_menu.set(None);
            state.click(&record, ev.ctrl_key() || ev.meta_key(), ev.shift_key());
        }
    };

    let on_dblclick = {
        let record = record.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            state.open(&record);
        }
    };

    let on_contextmenu = {
        let record = record.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if !is_selected.get_untracked() {
                state.click(&record, false, false);
            }
            state.context_menu.set(Some(MenuAnchor {
                x: ev.client_x(),
                y: ev.client_y(),
                target: Some(record.clone()),
            }));
        }
    };

    let name_class = if record.is_directory {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };
    let aria_label = if record.is_directory {
        format!("Folder: {}", record.name)
    } else {
        format!("File: {}", record.name)
    };
    let title = record.name.clone();

    view! {
        <div
            class=item_class
            on:click=on_click
            on:dblclick=on_dblclick
            on:contextmenu=on_contextmenu
            role="row"
            tabindex="-1"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
            title=title
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{record.name}</span>
            <span class=css::date>{modified}</span>
            <span class=css::size>{size}</span>
        </div>
    }
}
