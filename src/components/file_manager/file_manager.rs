//! Main file manager component.
//!
//! Builds the widget state from the configuration and lays out the panes.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: navigation pane and content pane side by side,
//!   split by a draggable handle
//! - **Narrow (< 768px)**: content pane only; the navigation pane opens as an
//!   overlay from the toolbar

use leptos::html;
use leptos::prelude::*;
use leptos_use::use_media_query;

use filedeck_core::shortcut::{self, KeyChord};
use filedeck_core::{FileManagerCallbacks, FileManagerConfig, FileManagerError, FileRecord};

use super::{Actions, Breadcrumb, ContextMenu, FileList, Loader, NavigationPane, Toolbar};
use crate::config::{NARROW_BREAKPOINT, css_vars};
use crate::hooks::use_column_resize;
use crate::state::{FileManagerState, MenuAnchor};
use crate::utils::dom::is_text_input;

stylance::import_crate_style!(css, "src/components/file_manager/file_manager.module.css");

/// File manager widget.
///
/// `files` may change over time; the widget follows it and leaves the
/// current folder if it disappears. An invalid `config` is reported through
/// `on_error` and rendered as an error message instead of the widget.
#[component]
pub fn FileManager(
    #[prop(into)] files: Signal<Vec<FileRecord>>,
    #[prop(optional)] config: FileManagerConfig,
    #[prop(optional)] callbacks: FileManagerCallbacks,
    #[prop(into, optional)] is_loading: Signal<bool>,
) -> impl IntoView {
    let controller = match config.validate().and_then(|()| config.resize_controller()) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("file manager: invalid configuration: {err}");
            callbacks.on_error.emit(FileManagerError::from(err.clone()));
            return view! { <ConfigErrorView message=err.to_string() /> }.into_any();
        }
    };

    let state = FileManagerState::new(&config, files.get_untracked(), controller, callbacks);
    Effect::watch(
        move || files.get(),
        move |records, _, _| state.replace_files(records.clone()),
        false,
    );

    let container = NodeRef::<html::Div>::new();
    let resize = use_column_resize(state.resize, container);
    let split = resize.split();
    let is_dragging = resize.is_dragging();

    let is_narrow = use_media_query(NARROW_BREAKPOINT);
    let nav_open = RwSignal::new(false);

    let root_style = format!(
        "{}: {}; {}: {}; height: {}; width: {};",
        css_vars::PRIMARY_COLOR,
        config.primary_color,
        css_vars::FONT_FAMILY,
        config.font_family,
        config.height.to_css(),
        config.width.to_css(),
    );

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_text_input(&ev) {
            return;
        }
        let chord = KeyChord {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        };
        if let Some(shortcut) = shortcut::resolve(&chord) {
            ev.prevent_default();
            state.run_shortcut(shortcut);
        }
    };

    let nav_class = move || {
        if !is_narrow.get() {
            css::navigationPane.to_string()
        } else if nav_open.get() {
            format!("{} {}", css::navigationPane, css::navigationOverlay)
        } else {
            format!("{} {}", css::navigationPane, css::hidden)
        }
    };
    let nav_style = move || {
        if is_narrow.get() {
            String::new()
        } else {
            format!("width: {}%;", split.get().primary_percent())
        }
    };
    let content_style = move || {
        if is_narrow.get() {
            "width: 100%;".to_string()
        } else {
            format!("width: {}%;", split.get().secondary_percent())
        }
    };

    view! {
        <div
            class=css::fileManager
            style=root_style
            tabindex="0"
            on:keydown=on_keydown
            on:contextmenu=move |ev| ev.prevent_default()
            on:click=move |_| state.context_menu.set(None)
        >
            <Loader is_loading=is_loading />
            <Toolbar state=state is_narrow=is_narrow nav_open=nav_open />

            <div
                node_ref=container
                class=move || {
                    if is_dragging.get() {
                        format!("{} {}", css::body, css::dragging)
                    } else {
                        css::body.to_string()
                    }
                }
                on:mousemove=move |ev| resize.track(&ev)
                on:mouseup=move |_| resize.stop()
                on:mouseleave=move |_| resize.stop()
            >
                <div class=nav_class style=nav_style>
                    <NavigationPane
                        state=state
                        on_navigate=Callback::new(move |_| nav_open.set(false))
                    />
                </div>

                <Show when=move || !is_narrow.get()>
                    <div
                        class=css::resizeHandle
                        role="separator"
                        aria-orientation="vertical"
                        on:mousedown=move |ev| resize.start(&ev)
                    ></div>
                </Show>

                <div
                    class=css::contentPane
                    style=content_style
                    on:contextmenu=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        state.clear_selection();
                        state.context_menu.set(Some(MenuAnchor {
                            x: ev.client_x(),
                            y: ev.client_y(),
                            target: None,
                        }));
                    }
                >
                    <Breadcrumb state=state />
                    <FileList state=state />
                </div>
            </div>

            <Actions state=state />
            <ContextMenu state=state />
        </div>
    }
    .into_any()
}

/// Shown in place of the widget when the configuration is rejected.
#[component]
fn ConfigErrorView(message: String) -> impl IntoView {
    view! {
        <div class=css::configError role="alert">
            <strong>"File manager configuration error"</strong>
            <p>{message}</p>
        </div>
    }
}
