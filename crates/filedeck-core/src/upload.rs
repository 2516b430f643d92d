//! Upload configuration, acceptance rules and the upload queue.
//!
//! The widget never talks to the network itself. It checks candidate files
//! against [`UploadRules`], builds an [`UploadRequest`] from the caller's
//! [`UploadConfig`], and hands that to `on_file_uploading`. The host performs
//! the transfer and reports back through the request's [`UploadTicket`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::callback::Handler;
use crate::error::{ConfigError, ErrorKind, FileManagerError, UploadRejection};
use crate::format::format_data_size;
use crate::models::{FileRecord, extension};

/// HTTP method used for uploads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UploadMethod {
    #[default]
    Post,
    Put,
}

impl UploadMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for UploadMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            other => Err(ConfigError::InvalidUploadMethod(other.to_string())),
        }
    }
}

impl TryFrom<String> for UploadMethod {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UploadMethod> for String {
    fn from(method: UploadMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Accept absolute `http(s)` URLs and root-relative paths.
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    let ok = url.starts_with("https://") && url.len() > "https://".len()
        || url.starts_with("http://") && url.len() > "http://".len()
        || url.starts_with('/');
    if ok && !url.chars().any(char::is_whitespace) {
        Ok(())
    } else {
        Err(ConfigError::InvalidUploadUrl(url.to_string()))
    }
}

/// Where and how uploads are sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub method: UploadMethod,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            url: "/upload".to_string(),
            headers: BTreeMap::new(),
            method: UploadMethod::Post,
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.url)
    }

    /// Describe the upload of `candidate` into `parent` (`None` is the root).
    pub fn request_for(
        &self,
        candidate: &UploadCandidate,
        parent: Option<&FileRecord>,
        ticket: UploadTicket,
    ) -> UploadRequest {
        UploadRequest {
            ticket,
            url: self.url.clone(),
            method: self.method,
            headers: self.headers.clone(),
            file_name: candidate.name.clone(),
            size: candidate.size,
            parent_path: parent.map(|p| p.path.clone()).unwrap_or_default(),
        }
    }
}

/// A file the user picked or dropped, before it is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Transport-free description of one upload, given to `on_file_uploading`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    /// Completion handle for the host.
    pub ticket: UploadTicket,
    pub url: String,
    pub method: UploadMethod,
    pub headers: BTreeMap<String, String>,
    pub file_name: String,
    pub size: u64,
    /// Destination folder path (`""` for the root).
    pub parent_path: String,
}

// =============================================================================
// Upload Tracking
// =============================================================================

/// How an upload ended, as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutcome {
    pub id: u64,
    /// Response body on success, error message on failure.
    pub result: Result<String, String>,
}

/// Handle the host uses to report the end of one upload.
#[derive(Clone, Debug)]
pub struct UploadTicket {
    id: u64,
    sink: Handler<UploadOutcome>,
}

impl UploadTicket {
    pub fn new(id: u64, sink: Handler<UploadOutcome>) -> Self {
        Self { id, sink }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn complete(&self, response: impl Into<String>) {
        self.sink.emit(UploadOutcome {
            id: self.id,
            result: Ok(response.into()),
        });
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.sink.emit(UploadOutcome {
            id: self.id,
            result: Err(message.into()),
        });
    }
}

impl PartialEq for UploadTicket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UploadTicket {}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Pending,
    Done,
    Failed(String),
}

/// One row of the upload panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadEntry {
    pub id: u64,
    pub file_name: String,
    pub status: UploadStatus,
}

/// Uploads started from the widget and their progress.
///
/// `enqueue` returns the request instead of emitting it so the caller can
/// invoke `on_file_uploading` outside any borrow of the queue.
#[derive(Clone, Debug, Default)]
pub struct UploadQueue {
    next_id: u64,
    entries: Vec<UploadEntry>,
    on_file_uploaded: Handler<String>,
    on_error: Handler<FileManagerError>,
}

impl UploadQueue {
    pub fn new(on_file_uploaded: Handler<String>, on_error: Handler<FileManagerError>) -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            on_file_uploaded,
            on_error,
        }
    }

    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    pub fn has_pending(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.status == UploadStatus::Pending)
    }

    fn push(&mut self, file_name: &str, status: UploadStatus) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(UploadEntry {
            id,
            file_name: file_name.to_string(),
            status,
        });
        id
    }

    /// Record a refused file and report it through `on_error`.
    pub fn reject(&mut self, candidate: &UploadCandidate, rejection: UploadRejection) {
        let message = rejection.to_string();
        self.push(&candidate.name, UploadStatus::Failed(message.clone()));
        self.on_error.emit(FileManagerError::from(rejection));
        log::warn!("upload: '{}' rejected: {message}", candidate.name);
    }

    /// Add a pending upload and build its request. `sink` receives the
    /// host's outcome and should route it back to [`UploadQueue::finish`].
    pub fn enqueue(
        &mut self,
        config: &UploadConfig,
        candidate: &UploadCandidate,
        parent: Option<&FileRecord>,
        sink: Handler<UploadOutcome>,
    ) -> UploadRequest {
        let id = self.push(&candidate.name, UploadStatus::Pending);
        config.request_for(candidate, parent, UploadTicket::new(id, sink))
    }

    /// Apply an outcome. Unknown or already-finished ids are ignored.
    pub fn finish(&mut self, outcome: UploadOutcome) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.id == outcome.id && e.status == UploadStatus::Pending)
        else {
            return false;
        };
        match outcome.result {
            Ok(response) => {
                entry.status = UploadStatus::Done;
                self.on_file_uploaded.emit(response);
            }
            Err(message) => {
                entry.status = UploadStatus::Failed(message.clone());
                self.on_error.emit(FileManagerError::new(
                    ErrorKind::Upload,
                    format!("{}: {message}", entry.file_name),
                ));
            }
        }
        true
    }

    /// Drop finished rows, keeping pending ones.
    pub fn clear_finished(&mut self) {
        self.entries.retain(|e| e.status == UploadStatus::Pending);
    }
}

/// File type and size acceptance rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadRules {
    /// Normalized extensions without the leading dot; empty accepts all.
    accepted_extensions: Vec<String>,
    max_file_size: Option<u64>,
}

impl UploadRules {
    /// `accepted_file_types` is a comma-separated list like `".png, .jpg"`.
    pub fn new(accepted_file_types: &str, max_file_size: Option<u64>) -> Self {
        let accepted_extensions = accepted_file_types
            .split(',')
            .map(|t| t.trim().trim_start_matches('.').to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self {
            accepted_extensions,
            max_file_size: max_file_size.filter(|&max| max > 0),
        }
    }

    pub fn max_file_size(&self) -> Option<u64> {
        self.max_file_size
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn accepts_type(&self, name: &str) -> bool {
        if self.accepted_extensions.is_empty() {
            return true;
        }
        extension(name).is_some_and(|ext| self.accepted_extensions.contains(&ext))
    }

    /// Check a candidate against the rules and the destination's contents.
    pub fn check(
        &self,
        candidate: &UploadCandidate,
        siblings: &[FileRecord],
    ) -> Result<(), UploadRejection> {
        if !self.accepts_type(&candidate.name) {
            return Err(UploadRejection::TypeNotAllowed);
        }

        let exists = siblings
            .iter()
            .any(|f| !f.is_directory && f.name.eq_ignore_ascii_case(&candidate.name));
        if exists {
            return Err(UploadRejection::AlreadyExists);
        }

        if let Some(max) = self.max_file_size
            && candidate.size > max
        {
            return Err(UploadRejection::TooLarge {
                limit: format_data_size(max, 2),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_method() {
        assert_eq!("POST".parse::<UploadMethod>(), Ok(UploadMethod::Post));
        assert_eq!("PUT".parse::<UploadMethod>(), Ok(UploadMethod::Put));
        assert_eq!(
            "GET".parse::<UploadMethod>(),
            Err(ConfigError::InvalidUploadMethod("GET".to_string()))
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("/upload").is_ok());
        assert!(validate_url("https://files.example.com/up").is_ok());
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("https://").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("/has space").is_err());
    }

    #[test]
    fn test_request_for() {
        let mut config = UploadConfig::default();
        config
            .headers
            .insert("Authorization".to_string(), "Bearer t".to_string());
        let parent = FileRecord::folder("", "Pictures");
        let ticket = UploadTicket::new(3, Handler::none());
        let request = config.request_for(&UploadCandidate::new("a.png", 10), Some(&parent), ticket);
        assert_eq!(request.ticket.id(), 3);
        assert_eq!(request.url, "/upload");
        assert_eq!(request.method, UploadMethod::Post);
        assert_eq!(request.parent_path, "/Pictures");
        assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("Bearer t"));

        let at_root = config.request_for(
            &UploadCandidate::new("a.png", 10),
            None,
            UploadTicket::new(4, Handler::none()),
        );
        assert_eq!(at_root.parent_path, "");
    }

    #[test]
    fn test_rules_accept_everything_by_default() {
        let rules = UploadRules::new("", None);
        assert!(rules.check(&UploadCandidate::new("anything.bin", u64::MAX), &[]).is_ok());
        assert_eq!(rules.accept_attribute(), "");
    }

    #[test]
    fn test_rules_type_filter() {
        let rules = UploadRules::new(".png, .JPG,txt", None);
        assert!(rules.accepts_type("a.png"));
        assert!(rules.accepts_type("b.jpg"));
        assert!(rules.accepts_type("c.TXT"));
        assert!(!rules.accepts_type("d.gif"));
        assert!(!rules.accepts_type("noext"));
        assert_eq!(rules.accept_attribute(), ".png,.jpg,.txt");
    }

    #[test]
    fn test_rules_check_order_and_messages() {
        let rules = UploadRules::new(".png", Some(2 * 1024 * 1024));
        let siblings = vec![FileRecord::file("/p", "Pic.png", 1)];

        assert_eq!(
            rules.check(&UploadCandidate::new("x.gif", 1), &siblings),
            Err(UploadRejection::TypeNotAllowed)
        );
        assert_eq!(
            rules.check(&UploadCandidate::new("pic.PNG", 1), &siblings),
            Err(UploadRejection::AlreadyExists)
        );
        let err = rules
            .check(&UploadCandidate::new("big.png", 3 * 1024 * 1024), &siblings)
            .unwrap_err();
        assert_eq!(err.to_string(), "File size exceeds 2.00 MB.");
        assert!(rules.check(&UploadCandidate::new("new.png", 5), &siblings).is_ok());
    }

    #[test]
    fn test_queue_round_trip_through_ticket() {
        use std::sync::{Arc, Mutex};

        let uploaded = Arc::new(Mutex::new(Vec::new()));
        let errors = Arc::new(Mutex::new(Vec::new()));
        let (u, e) = (uploaded.clone(), errors.clone());
        let queue = Arc::new(Mutex::new(UploadQueue::new(
            Handler::new(move |body: String| u.lock().unwrap().push(body)),
            Handler::new(move |err: FileManagerError| e.lock().unwrap().push(err.message)),
        )));
        let q = queue.clone();
        let sink = Handler::new(move |o: UploadOutcome| {
            q.lock().unwrap().finish(o);
        });

        let config = UploadConfig::default();
        let first = queue.lock().unwrap().enqueue(
            &config,
            &UploadCandidate::new("a.png", 1),
            None,
            sink.clone(),
        );
        let second = queue.lock().unwrap().enqueue(
            &config,
            &UploadCandidate::new("b.png", 1),
            None,
            sink,
        );
        assert_ne!(first.ticket.id(), second.ticket.id());
        assert!(queue.lock().unwrap().has_pending());

        first.ticket.complete("{\"ok\":true}");
        second.ticket.fail("HTTP 500");
        // A second report for the same upload is ignored.
        first.ticket.fail("late");

        assert_eq!(*uploaded.lock().unwrap(), vec!["{\"ok\":true}".to_string()]);
        assert_eq!(*errors.lock().unwrap(), vec!["b.png: HTTP 500".to_string()]);
        let queue = queue.lock().unwrap();
        assert_eq!(queue.entries()[0].status, UploadStatus::Done);
        assert_eq!(queue.entries()[1].status, UploadStatus::Failed("HTTP 500".to_string()));
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_reject_reports_error() {
        let mut queue = UploadQueue::default();
        queue.reject(&UploadCandidate::new("x.gif", 1), UploadRejection::TypeNotAllowed);
        assert_eq!(
            queue.entries()[0].status,
            UploadStatus::Failed("File type is not allowed.".to_string())
        );
        queue.clear_finished();
        assert!(queue.entries().is_empty());
    }

    #[test]
    fn test_zero_limit_is_unlimited() {
        let rules = UploadRules::new("", Some(0));
        assert_eq!(rules.max_file_size(), None);
    }
}
