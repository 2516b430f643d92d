//! Breadcrumb for the current folder.
//!
//! Displays the path from Home with clickable segments; the last segment is
//! the current folder and is not clickable.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::state::FileManagerState;

stylance::import_crate_style!(css, "src/components/file_manager/breadcrumb.module.css");

#[component]
pub fn Breadcrumb(state: FileManagerState) -> impl IntoView {
    let crumbs = Memo::new(move |_| state.navigation.with(|n| n.breadcrumb()));
    let is_root = Signal::derive(move || state.navigation.with(|n| n.is_root()));

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            <button
                class=css::upButton
                on:click=move |_| state.go_up()
                disabled=move || is_root.get()
                title="Go to parent folder"
            >
                <Icon icon=ic::ARROW_UP />
            </button>
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let icon = if idx == 0 { ic::HOME } else { ic::FOLDER };
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {if idx == last {
                                    view! { <SegmentCurrent icon=icon label=crumb.name /> }
                                        .into_any()
                                } else {
                                    let path = crumb.path;
                                    view! {
                                        <SegmentLink
                                            icon=icon
                                            label=crumb.name
                                            on_click=move || state.navigate(&path)
                                        />
                                    }
                                    .into_any()
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::segment on:click=move |_| on_click()>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
