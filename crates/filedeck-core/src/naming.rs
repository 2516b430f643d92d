//! Folder and file name rules for create and rename.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::NameError;
use crate::models::FileRecord;

/// Characters a name may not contain.
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("invalid-character pattern"));

/// Default name offered by the create-folder dialog.
pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// Validate a new name against its future siblings.
///
/// Returns the trimmed name on success. Duplicates are matched
/// case-insensitively against every sibling.
pub fn validate_name(name: &str, siblings: &[FileRecord]) -> Result<String, NameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if INVALID_CHARS.is_match(name) {
        return Err(NameError::InvalidCharacters);
    }
    if let Some(existing) = siblings
        .iter()
        .find(|f| f.name.to_lowercase() == name.to_lowercase())
    {
        return Err(NameError::Duplicate {
            kind: if existing.is_directory { "folder" } else { "file" },
            name: existing.name.clone(),
        });
    }
    Ok(name.to_string())
}

/// Validate a rename of `file`.
///
/// `Ok(None)` means the name is unchanged and nothing should be emitted.
pub fn validate_rename(
    file: &FileRecord,
    new_name: &str,
    siblings: &[FileRecord],
) -> Result<Option<String>, NameError> {
    if new_name.trim() == file.name {
        return Ok(None);
    }
    let others: Vec<FileRecord> = siblings
        .iter()
        .filter(|s| s.path != file.path)
        .cloned()
        .collect();
    validate_name(new_name, &others).map(Some)
}

/// First free name among `base`, `base (1)`, `base (2)`, ...
pub fn unique_name(base: &str, siblings: &[FileRecord]) -> String {
    let taken = |candidate: &str| {
        siblings
            .iter()
            .any(|f| f.name.to_lowercase() == candidate.to_lowercase())
    };
    if !taken(base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{base} ({n})"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn siblings() -> Vec<FileRecord> {
        vec![
            FileRecord::folder("", "Documents"),
            FileRecord::file("", "notes.txt", 10),
        ]
    }

    #[test]
    fn test_validate_name_ok() {
        assert_eq!(validate_name("  Music ", &siblings()), Ok("Music".to_string()));
    }

    #[test]
    fn test_validate_name_rejects() {
        assert_eq!(validate_name("   ", &siblings()), Err(NameError::Empty));
        assert_eq!(validate_name("a/b", &siblings()), Err(NameError::InvalidCharacters));
        assert_eq!(validate_name("what?", &siblings()), Err(NameError::InvalidCharacters));
        assert_eq!(
            validate_name("documents", &siblings()),
            Err(NameError::Duplicate {
                kind: "folder",
                name: "Documents".to_string()
            })
        );
        assert_eq!(
            validate_name("NOTES.txt", &siblings()),
            Err(NameError::Duplicate {
                kind: "file",
                name: "notes.txt".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rename() {
        let all = siblings();
        let file = &all[1];
        assert_eq!(validate_rename(file, "notes.txt", &all), Ok(None));
        // Case-only change of itself is allowed.
        assert_eq!(
            validate_rename(file, "Notes.txt", &all),
            Ok(Some("Notes.txt".to_string()))
        );
        assert!(validate_rename(file, "Documents", &all).is_err());
    }

    #[test]
    fn test_unique_name() {
        let mut all = siblings();
        assert_eq!(unique_name(DEFAULT_FOLDER_NAME, &all), "New Folder");
        all.push(FileRecord::folder("", "New Folder"));
        assert_eq!(unique_name(DEFAULT_FOLDER_NAME, &all), "New Folder (1)");
        all.push(FileRecord::folder("", "new folder (1)"));
        assert_eq!(unique_name(DEFAULT_FOLDER_NAME, &all), "New Folder (2)");
    }
}
