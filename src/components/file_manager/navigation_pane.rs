//! Folder tree shown beside the content pane.

use leptos::prelude::*;
use leptos_icons::Icon;

use filedeck_core::models::is_same_or_descendant;
use filedeck_core::state::FolderNode;

use crate::components::icons as ic;
use crate::state::FileManagerState;

stylance::import_crate_style!(css, "src/components/file_manager/navigation_pane.module.css");

#[component]
pub fn NavigationPane(
    state: FileManagerState,
    /// Called after a folder is chosen (closes the narrow-screen overlay).
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let tree = Memo::new(move |_| state.files.with(|f| f.folder_tree()));
    let current = Memo::new(move |_| state.navigation.with(|n| n.current_path().to_string()));

    let go = move |path: String| {
        state.navigate(&path);
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    view! {
        <nav class=css::pane aria-label="Folders">
            <button
                class=move || row_class(current.get().is_empty())
                on:click=move |_| go(String::new())
            >
                <span class=css::toggle></span>
                <span class=css::icon><Icon icon=ic::HOME /></span>
                <span class=css::name>"Home"</span>
            </button>
            <ul class=css::tree role="tree">
                {move || {
                    tree.get()
                        .into_iter()
                        .map(|node| {
                            view! { <FolderItem node=node depth=1 current=current on_select=go /> }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

fn row_class(active: bool) -> String {
    if active {
        format!("{} {}", css::row, css::rowActive)
    } else {
        css::row.to_string()
    }
}

/// One folder and, when expanded, its subfolders.
#[component]
fn FolderItem<F>(node: FolderNode, depth: usize, current: Memo<String>, on_select: F) -> impl IntoView
where
    F: Fn(String) + Copy + Send + Sync + 'static,
{
    let path = node.path.clone();
    let has_children = !node.children.is_empty();
    // Start expanded on the way to the current folder.
    let expanded = RwSignal::new(is_same_or_descendant(&current.get_untracked(), &path));

    let is_current = {
        let path = path.clone();
        Signal::derive(move || current.get() == path)
    };
    let indent = format!("padding-left: {}rem;", depth as f32 * 0.75);
    let children = node.children;

    view! {
        <li role="treeitem" aria-expanded=move || has_children.then(|| expanded.get().to_string())>
            <button
                class=move || row_class(is_current.get())
                style=indent
                on:click={
                    let path = path.clone();
                    move |_| {
                        on_select(path.clone());
                        expanded.set(true);
                    }
                }
            >
                <span
                    class=css::toggle
                    on:click=move |ev| {
                        ev.stop_propagation();
                        expanded.update(|v| *v = !*v);
                    }
                >
                    {move || has_children.then(|| if expanded.get() {
                        view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                    })}
                </span>
                <span class=css::icon>
                    {move || if is_current.get() {
                        view! { <Icon icon=ic::FOLDER_OPEN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::FOLDER /> }.into_any()
                    }}
                </span>
                <span class=css::name>{node.name}</span>
            </button>
            <Show when=move || expanded.get() && has_children>
                <ul class=css::tree role="group">
                    {children
                        .clone()
                        .into_iter()
                        .map(|child| {
                            view! {
                                <FolderItem node=child depth={depth + 1} current=current on_select=on_select />
                            }
                            .into_any()
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}
