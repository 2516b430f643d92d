//! Drag-to-resize between the navigation pane and the content pane.
//!
//! Pointer events are forwarded to the core [`ColumnResizeController`]; the
//! container width is measured on every move so the split stays correct
//! after the widget itself is resized.

use leptos::html;
use leptos::prelude::*;

use filedeck_core::{ColumnResizeController, ColumnSplit};

/// Event handlers and derived signals for one resizable container.
#[derive(Clone, Copy)]
pub struct ColumnResize {
    controller: RwSignal<ColumnResizeController>,
    container: NodeRef<html::Div>,
}

impl ColumnResize {
    pub fn split(&self) -> Signal<ColumnSplit> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.split()))
    }

    pub fn is_dragging(&self) -> Signal<bool> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.is_dragging()))
    }

    /// `mousedown` on the handle.
    pub fn start(&self, ev: &web_sys::MouseEvent) {
        ev.prevent_default();
        let x = f64::from(ev.client_x());
        self.controller.update(|c| c.begin_drag(x));
    }

    /// `mousemove` over the container.
    pub fn track(&self, ev: &web_sys::MouseEvent) {
        if !self.controller.with_untracked(|c| c.is_dragging()) {
            return;
        }
        let Some(width) = self.container_width() else {
            return;
        };
        let x = f64::from(ev.client_x());
        self.controller.maybe_update(|c| c.update_drag(x, width));
    }

    /// `mouseup` or `mouseleave` on the container.
    pub fn stop(&self) {
        if self.controller.with_untracked(|c| c.is_dragging()) {
            self.controller.update(|c| c.end_drag());
        }
    }

    fn container_width(&self) -> Option<f64> {
        self.container
            .get_untracked()
            .map(|el| el.get_bounding_client_rect().width())
    }
}

/// Bind `controller` to the element behind `container`.
pub fn use_column_resize(
    controller: RwSignal<ColumnResizeController>,
    container: NodeRef<html::Div>,
) -> ColumnResize {
    ColumnResize {
        controller,
        container,
    }
}
