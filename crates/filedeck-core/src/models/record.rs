use serde::{Deserialize, Serialize};

// =============================================================================
// File Record
// =============================================================================

/// One file or folder from the caller's dataset.
///
/// Paths are `/`-separated and rooted at the empty string: a top-level
/// folder `Documents` has path `/Documents`, and a file inside it has path
/// `/Documents/notes.txt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Display name (last path segment)
    pub name: String,
    /// Folder flag
    pub is_directory: bool,
    /// Full path from the root
    pub path: String,
    /// Last update as an ISO-8601 string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Size in bytes (files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Free-form type tag, usually the extension
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl FileRecord {
    /// Create a folder record inside `parent_path`.
    pub fn folder(parent_path: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_directory: true,
            path: child_path(parent_path, name),
            updated_at: None,
            size: None,
            file_type: None,
        }
    }

    /// Create a file record inside `parent_path`.
    pub fn file(parent_path: &str, name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            is_directory: false,
            path: child_path(parent_path, name),
            updated_at: None,
            size: Some(size),
            file_type: extension(name),
        }
    }

    pub fn with_updated_at(mut self, updated_at: &str) -> Self {
        self.updated_at = Some(updated_at.to_string());
        self
    }

    /// Path of the containing folder (`""` for top-level entries).
    pub fn parent_path(&self) -> &str {
        parent_of(&self.path)
    }

    /// Lowercased extension, if the name has one.
    pub fn extension(&self) -> Option<String> {
        extension(&self.name)
    }

    /// True if this record is `folder_path` itself or lives somewhere below it.
    pub fn is_within(&self, folder_path: &str) -> bool {
        is_same_or_descendant(&self.path, folder_path)
    }
}

// =============================================================================
// Path helpers
// =============================================================================

/// Join a parent path and a name (`("", "a")` -> `/a`, `("/a", "b")` -> `/a/b`).
pub fn child_path(parent_path: &str, name: &str) -> String {
    format!("{}/{}", parent_path.trim_end_matches('/'), name)
}

/// Parent of a path (`/a/b` -> `/a`, `/a` -> ``).
pub fn parent_of(path: &str) -> &str {
    path.rfind('/').map(|idx| &path[..idx]).unwrap_or("")
}

/// True if `path` equals `ancestor` or is nested under it. Everything is
/// under the root (`""`).
pub fn is_same_or_descendant(path: &str, ancestor: &str) -> bool {
    if ancestor.is_empty() {
        return true;
    }
    path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Lowercased extension of a file name, ignoring dotfiles without one.
pub fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

// =============================================================================
// File Kind
// =============================================================================

/// Coarse file classification used for icons and preview support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Folder,
    Image,
    Video,
    Audio,
    Pdf,
    Text,
    Code,
    Archive,
    Other,
}

impl FileKind {
    pub fn of(record: &FileRecord) -> Self {
        if record.is_directory {
            return Self::Folder;
        }
        match record.extension().as_deref() {
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp") => Self::Image,
            Some("mp4" | "webm" | "mov" | "mkv") => Self::Video,
            Some("mp3" | "wav" | "ogg" | "flac") => Self::Audio,
            Some("pdf") => Self::Pdf,
            Some("txt" | "md" | "csv" | "log") => Self::Text,
            Some("rs" | "js" | "ts" | "jsx" | "tsx" | "json" | "html" | "css" | "py" | "toml") => {
                Self::Code
            }
            Some("zip" | "tar" | "gz" | "rar" | "7z") => Self::Archive,
            _ => Self::Other,
        }
    }

    /// Whether the preview panel can show this kind inline.
    pub fn is_previewable(&self) -> bool {
        matches!(
            self,
            Self::Image | Self::Video | Self::Audio | Self::Pdf | Self::Text | Self::Code
        )
    }
}
