use crate::callback::Handler;
use crate::models::Layout;

/// Grid/list layout scope.
#[derive(Clone, Debug, Default)]
pub struct LayoutState {
    layout: Layout,
    on_layout_change: Handler<Layout>,
}

impl LayoutState {
    pub fn new(layout: Layout, on_layout_change: Handler<Layout>) -> Self {
        Self {
            layout,
            on_layout_change,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Emits `on_layout_change` only when the layout actually changes.
    pub fn set(&mut self, layout: Layout) -> bool {
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        self.on_layout_change.emit(layout);
        true
    }

    pub fn toggle(&mut self) {
        self.set(self.layout.toggled());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_set_emits_on_change_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut state = LayoutState::new(
            Layout::Grid,
            Handler::new(move |l: Layout| sink.lock().unwrap().push(l)),
        );
        assert!(!state.set(Layout::Grid));
        assert!(state.set(Layout::List));
        state.toggle();
        assert_eq!(state.layout(), Layout::Grid);
        assert_eq!(*seen.lock().unwrap(), vec![Layout::List, Layout::Grid]);
    }
}
