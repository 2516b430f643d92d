//! Loading overlay.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/file_manager/file_manager.module.css");

/// Covers the widget while the host is fetching data.
#[component]
pub fn Loader(#[prop(into)] is_loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || is_loading.get()>
            <div class=css::loader role="status" aria-live="polite">
                <span class=css::spinner aria-hidden="true"></span>
                <span class=css::loaderLabel>"Loading..."</span>
            </div>
        </Show>
    }
}
