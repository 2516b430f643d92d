//! Error types for the file manager.
//!
//! Every concern gets its own enum so call sites can match on exactly what
//! they can fail with:
//!
//! - [`ConfigError`] - construction-time configuration problems
//! - [`NameError`] - invalid folder/file names on create or rename
//! - [`UploadRejection`] - files refused by the upload acceptance rules
//! - [`ClipboardError`] - paste attempts that cannot be carried out
//!
//! Runtime failures are converted into a [`FileManagerError`] descriptor and
//! handed to the caller's `on_error` callback.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Configuration errors, reported when the widget is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Resize bounds are reversed, non-finite or outside 0-100.
    #[error("invalid resize bounds: min {min}% / max {max}%")]
    InvalidBounds { min: f64, max: f64 },
    /// Upload method other than POST or PUT.
    #[error("unsupported upload method '{0}' (expected POST or PUT)")]
    InvalidUploadMethod(String),
    /// Upload URL is empty or not an absolute/rooted URL.
    #[error("invalid upload url '{0}'")]
    InvalidUploadUrl(String),
    /// Layout other than "grid" or "list".
    #[error("unknown layout '{0}' (expected grid or list)")]
    InvalidLayout(String),
    /// Display time zone is not a known IANA name.
    #[error("unknown time zone '{0}'")]
    InvalidTimeZone(String),
    /// The configuration document itself could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Reasons a folder or file name is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name cannot be empty.")]
    Empty,
    #[error("A file name can't contain any of the following characters: \\ / : * ? \" < > |")]
    InvalidCharacters,
    #[error("This destination already contains a {kind} named \"{name}\".")]
    Duplicate { kind: &'static str, name: String },
}

/// Reasons a file is refused by the upload acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("File type is not allowed.")]
    TypeNotAllowed,
    #[error("File already exists.")]
    AlreadyExists,
    #[error("File size exceeds {limit}.")]
    TooLarge { limit: String },
}

/// Paste failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Nothing has been cut or copied.
    #[error("clipboard is empty")]
    Empty,
    /// The paste target is a file.
    #[error("cannot paste into a file")]
    DestinationNotFolder,
    /// A folder would be pasted into itself or one of its descendants.
    #[error("The destination folder is a subfolder of the source folder.")]
    DestinationInsideSource,
}

/// Which operation an error descriptor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Upload,
    Rename,
    CreateFolder,
    Paste,
    Delete,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Upload => "upload",
            Self::Rename => "rename",
            Self::CreateFolder => "create_folder",
            Self::Paste => "paste",
            Self::Delete => "delete",
            Self::Config => "config",
        };
        f.write_str(label)
    }
}

/// Error descriptor passed to `on_error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileManagerError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FileManagerError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FileManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FileManagerError {}

impl From<ConfigError> for FileManagerError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, err.to_string())
    }
}

impl From<UploadRejection> for FileManagerError {
    fn from(err: UploadRejection) -> Self {
        Self::new(ErrorKind::Upload, err.to_string())
    }
}

impl From<ClipboardError> for FileManagerError {
    fn from(err: ClipboardError) -> Self {
        Self::new(ErrorKind::Paste, err.to_string())
    }
}
