//! Which modal action is open.

/// Actions that open a dialog or panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    CreateFolder,
    Rename,
    Delete,
    Upload,
    Preview,
}

impl Action {
    /// Dialog heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::CreateFolder => "Create Folder",
            Self::Rename => "Rename",
            Self::Delete => "Delete",
            Self::Upload => "Upload Files",
            Self::Preview => "Preview",
        }
    }
}

/// At most one action is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionTrigger {
    active: Option<Action>,
}

impl ActionTrigger {
    pub fn active(&self) -> Option<Action> {
        self.active
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.active == Some(action)
    }

    /// Opens `action`, replacing whatever was open.
    pub fn show(&mut self, action: Action) {
        self.active = Some(action);
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
