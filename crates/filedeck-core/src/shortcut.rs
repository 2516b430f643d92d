//! Keyboard shortcut resolution.
//!
//! The widget converts each `keydown` into a [`KeyChord`] and asks
//! [`resolve`] what it means. Ctrl and Cmd (meta) are interchangeable.

use crate::models::Layout;

/// A key plus its modifiers, as reported by the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key` value (`"c"`, `"Delete"`, `"F2"` ...)
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Cut,
    Copy,
    Paste,
    SelectAll,
    CreateFolder,
    Upload,
    Download,
    Delete,
    Rename,
    Refresh,
    ClearSelection,
    SetLayout(Layout),
}

/// Map a chord to a shortcut, if it is one.
pub fn resolve(chord: &KeyChord) -> Option<Shortcut> {
    if chord.alt {
        return None;
    }
    let key = chord.key.to_lowercase();

    if chord.command() {
        return match (key.as_str(), chord.shift) {
            ("x", false) => Some(Shortcut::Cut),
            ("c", false) => Some(Shortcut::Copy),
            ("v", false) => Some(Shortcut::Paste),
            ("a", false) => Some(Shortcut::SelectAll),
            ("n", true) => Some(Shortcut::CreateFolder),
            ("u", false) => Some(Shortcut::Upload),
            ("d", false) => Some(Shortcut::Download),
            // Shift+1 reports "!" on US layouts.
            ("1" | "!", true) => Some(Shortcut::SetLayout(Layout::Grid)),
            ("2" | "@", true) => Some(Shortcut::SetLayout(Layout::List)),
            _ => None,
        };
    }

    match key.as_str() {
        "delete" => Some(Shortcut::Delete),
        "f2" => Some(Shortcut::Rename),
        "f5" => Some(Shortcut::Refresh),
        "escape" => Some(Shortcut::ClearSelection),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_chords() {
        assert_eq!(resolve(&KeyChord::new("c").ctrl()), Some(Shortcut::Copy));
        assert_eq!(resolve(&KeyChord::new("X").ctrl()), Some(Shortcut::Cut));
        let mut meta_v = KeyChord::new("v");
        meta_v.meta = true;
        assert_eq!(resolve(&meta_v), Some(Shortcut::Paste));
        assert_eq!(
            resolve(&KeyChord::new("N").ctrl().shift()),
            Some(Shortcut::CreateFolder)
        );
        assert_eq!(
            resolve(&KeyChord::new("!").ctrl().shift()),
            Some(Shortcut::SetLayout(Layout::Grid))
        );
        assert_eq!(resolve(&KeyChord::new("n").ctrl()), None);
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(resolve(&KeyChord::new("Delete")), Some(Shortcut::Delete));
        assert_eq!(resolve(&KeyChord::new("F2")), Some(Shortcut::Rename));
        assert_eq!(resolve(&KeyChord::new("Escape")), Some(Shortcut::ClearSelection));
        assert_eq!(resolve(&KeyChord::new("c")), None);
    }

    #[test]
    fn test_alt_disables_shortcuts() {
        let mut chord = KeyChord::new("c").ctrl();
        chord.alt = true;
        assert_eq!(resolve(&chord), None);
    }
}
