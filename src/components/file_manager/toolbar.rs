//! File manager toolbar.
//!
//! Folder and upload actions on the left, selection and clipboard actions in
//! the middle, refresh and layout on the right.

use leptos::prelude::*;
use leptos_icons::Icon;

use filedeck_core::{Action, Layout};

use crate::components::icons as ic;
use crate::state::FileManagerState;

stylance::import_crate_style!(css, "src/components/file_manager/toolbar.module.css");

#[component]
pub fn Toolbar(
    state: FileManagerState,
    is_narrow: Signal<bool>,
    nav_open: RwSignal<bool>,
) -> impl IntoView {
    let has_selection = Signal::derive(move || state.selection.with(|s| !s.is_empty()));
    let single = Signal::derive(move || state.selection.with(|s| s.len() == 1));
    let has_files = Signal::derive(move || {
        state
            .selection
            .with(|s| s.selected().iter().any(|f| !f.is_directory))
    });
    let can_paste = Signal::derive(move || state.clipboard.with(|c| !c.is_empty()));
    let layout = Signal::derive(move || state.layout.with(|l| l.layout()));

    view! {
        <header class=css::toolbar>
            <div class=css::group>
                <Show when=move || is_narrow.get()>
                    <button
                        class=css::button
                        on:click=move |_| nav_open.update(|v| *v = !*v)
                        title="Folders"
                    >
                        <Icon icon=ic::MENU />
                    </button>
                </Show>
                <ToolButton
                    icon=ic::NEW_FOLDER
                    label="New Folder"
                    on_click=move || state.show(Action::CreateFolder)
                />
                <ToolButton
                    icon=ic::UPLOAD
                    label="Upload"
                    on_click=move || state.show(Action::Upload)
                />
            </div>

            <div class=css::group>
                <Show when=move || has_selection.get()>
                    <ToolButton icon=ic::CUT label="Cut" on_click=move || state.cut() />
                    <ToolButton icon=ic::COPY label="Copy" on_click=move || state.copy() />
                </Show>
                <Show when=move || can_paste.get()>
                    <ToolButton icon=ic::PASTE label="Paste" on_click=move || state.paste(None) />
                </Show>
                <Show when=move || single.get()>
                    <ToolButton
                        icon=ic::EDIT
                        label="Rename"
                        on_click=move || state.show(Action::Rename)
                    />
                </Show>
                <Show when=move || has_files.get()>
                    <ToolButton
                        icon=ic::DOWNLOAD
                        label="Download"
                        on_click=move || state.download()
                    />
                </Show>
                <Show when=move || has_selection.get()>
                    <ToolButton
                        icon=ic::TRASH
                        label="Delete"
                        on_click=move || state.show(Action::Delete)
                    />
                    <ToolButton
                        icon=ic::CLOSE
                        label="Clear selection"
                        on_click=move || state.clear_selection()
                    />
                </Show>
            </div>

            <div class=css::group>
                <button class=css::button on:click=move |_| state.refresh() title="Refresh">
                    <Icon icon=ic::REFRESH />
                </button>
                <LayoutMenu state=state layout=layout />
            </div>
        </header>
    }
}

/// Labelled toolbar button.
#[component]
fn ToolButton<F>(icon: icondata::Icon, label: &'static str, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::button on:click=move |_| on_click() title=label>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Grid/list dropdown.
#[component]
fn LayoutMenu(state: FileManagerState, layout: Signal<Layout>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let choose = move |choice: Layout| {
        set_menu_open.set(false);
        state.set_layout(choice);
    };

    // Close menu when focus leaves the dropdown wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        if let Some(related) = event.related_target() {
            if let Some(current) = event.current_target() {
                use wasm_bindgen::JsCast;
                if let (Some(wrapper), Some(target)) = (
                    current.dyn_ref::<web_sys::Node>(),
                    related.dyn_ref::<web_sys::Node>(),
                )
                    && !wrapper.contains(Some(target))
                {
                    set_menu_open.set(false);
                }
            }
        } else {
            set_menu_open.set(false);
        }
    };

    view! {
        <div class=css::dropdownWrapper on:focusout=on_focusout>
            <button
                class=css::button
                on:click=move |_| set_menu_open.update(|v| *v = !*v)
                title="Layout"
            >
                {move || match layout.get() {
                    Layout::Grid => view! { <Icon icon=ic::GRID /> }.into_any(),
                    Layout::List => view! { <Icon icon=ic::LIST /> }.into_any(),
                }}
            </button>
            <Show when=move || menu_open.get()>
                <div class=css::dropdownMenu>
                    <LayoutChoice layout=layout choice=Layout::Grid icon=ic::GRID label="Grid" on_choose=choose />
                    <LayoutChoice layout=layout choice=Layout::List icon=ic::LIST label="List" on_choose=choose />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn LayoutChoice<F>(
    layout: Signal<Layout>,
    choice: Layout,
    icon: icondata::Icon,
    label: &'static str,
    on_choose: F,
) -> impl IntoView
where
    F: Fn(Layout) + 'static,
{
    view! {
        <button
            class=move || {
                if layout.get() == choice {
                    format!("{} {}", css::dropdownItem, css::dropdownItemActive)
                } else {
                    css::dropdownItem.to_string()
                }
            }
            on:click=move |_| on_choose(choice)
        >
            <span class=css::dropdownIcon><Icon icon=icon /></span>
            {label}
            {move || (layout.get() == choice).then(|| view! {
                <span class=css::check><Icon icon=ic::CHECK /></span>
            })}
        </button>
    }
}
