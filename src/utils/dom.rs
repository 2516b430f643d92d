//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use filedeck_core::UploadCandidate;
use wasm_bindgen::JsCast;
use web_sys::{Event, FileList, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Whether the event originated in a text field.
///
/// Keyboard shortcuts are not applied while the user is typing a name.
pub fn is_text_input(event: &Event) -> bool {
    event
        .target()
        .is_some_and(|target| target.dyn_ref::<web_sys::HtmlInputElement>().is_some())
}

/// Picked or dropped files as upload candidates.
pub fn upload_candidates(list: Option<FileList>) -> Vec<UploadCandidate> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| UploadCandidate::new(file.name(), file.size().max(0.0) as u64))
        .collect()
}
