// Text Monitor - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::{CLOCK_FORMAT, NOT_FOUND_MESSAGE, READ_ERROR_PREFIX};
use crate::util::error::FileError;
use chrono::{DateTime, Local};
use std::path::PathBuf;

// =============================================================================
// Storage kind
// =============================================================================

/// Which storage backend a tracked file stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// A file bind-mounted from the host; editable from outside the container.
    BindMount,
    /// A file on a named volume; survives container restarts.
    Volume,
}

impl StorageKind {
    /// Both kinds in tab order.
    pub fn all() -> [StorageKind; 2] {
        [StorageKind::BindMount, StorageKind::Volume]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            StorageKind::BindMount => "Bind Mount",
            StorageKind::Volume => "Volume",
        }
    }

    /// Tab caption including its icon.
    pub fn tab_title(&self) -> &'static str {
        match self {
            StorageKind::BindMount => "\u{1f4c1} Bind Mount",
            StorageKind::Volume => "\u{1f4be} Volume",
        }
    }

    /// First line of a freshly created file.
    pub fn template_header(&self) -> &'static str {
        match self {
            StorageKind::BindMount => "=== Bind Mount File ===",
            StorageKind::Volume => "=== Volume File ===",
        }
    }

    /// Descriptive lines written after the creation timestamp.
    pub fn template_description(&self) -> &'static [&'static str] {
        match self {
            StorageKind::BindMount => &[
                "This file is stored in Bind Mount",
                "You can edit it from your host system!",
            ],
            StorageKind::Volume => &[
                "This file is stored in Docker Volume",
                "It persists between container restarts",
            ],
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Refresh results
// =============================================================================

/// Size and modification time of a file that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Size in bytes.
    pub size: u64,
    /// Last modification time in local time.
    pub modified: DateTime<Local>,
}

/// Outcome of reading one tracked file. Produced by `platform::fs::refresh`,
/// consumed by `TrackedFile::apply`, then dropped.
#[derive(Debug)]
pub struct RefreshResult {
    /// Full file content, or why it could not be read.
    pub content: Result<String, FileError>,
    /// Present only when the file exists.
    pub stat: Option<FileStat>,
}

impl RefreshResult {
    /// Display-ready text: the content itself, the not-found sentinel, or a
    /// descriptive read error.
    pub fn display_text(&self) -> String {
        render_content(&self.content)
    }
}

/// Render a read outcome as the text shown in a file tab.
pub fn render_content(content: &Result<String, FileError>) -> String {
    match content {
        Ok(text) => text.clone(),
        Err(FileError::NotFound { .. }) => NOT_FOUND_MESSAGE.to_string(),
        Err(FileError::Read { source, .. }) => format!("{READ_ERROR_PREFIX}: {source}"),
        Err(other) => format!("{READ_ERROR_PREFIX}: {other}"),
    }
}

// =============================================================================
// Tracked file
// =============================================================================

/// One of the two files displayed by the application.
///
/// Created at start-up for each configured path and updated in place on every
/// refresh. Tracked files are never removed.
#[derive(Debug, Clone)]
pub struct TrackedFile {
    /// Absolute path of the file on disk.
    pub path: PathBuf,

    /// Storage backend this file represents.
    pub kind: StorageKind,

    /// Text shown in the tab: content, sentinel, or error message.
    pub last_known_content: String,

    /// Size from the most recent refresh. `None` when the file was missing.
    pub last_known_size: Option<u64>,

    /// Modification time from the most recent refresh.
    pub last_known_modified: Option<DateTime<Local>>,

    /// Error text from the most recent refresh, if the read failed for a
    /// reason other than the file being absent.
    pub last_error: Option<String>,
}

impl TrackedFile {
    pub fn new(path: PathBuf, kind: StorageKind) -> Self {
        Self {
            path,
            kind,
            last_known_content: String::new(),
            last_known_size: None,
            last_known_modified: None,
            last_error: None,
        }
    }

    /// Replace the last known state with a fresh read.
    ///
    /// Always overwrites content, even when the modification time is
    /// unchanged.
    pub fn apply(&mut self, result: RefreshResult) {
        self.last_known_content = result.display_text();
        self.last_error = match &result.content {
            Err(e) if !e.is_not_found() => Some(e.to_string()),
            _ => None,
        };
        match result.stat {
            Some(stat) => {
                self.last_known_size = Some(stat.size);
                self.last_known_modified = Some(stat.modified);
            }
            None => {
                self.last_known_size = None;
                self.last_known_modified = None;
            }
        }
    }

    /// Path, size and modification time annotation for the tab header.
    pub fn info_line(&self) -> String {
        match (self.last_known_size, self.last_known_modified) {
            (Some(size), Some(modified)) => format!(
                "Path: {} | Size: {size} bytes | Modified: {}",
                self.path.display(),
                modified.format(CLOCK_FORMAT)
            ),
            _ => format!("Path: {}", self.path.display()),
        }
    }
}

// =============================================================================
// Scheduler messages
// =============================================================================

/// Message sent from the polling scheduler thread to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerMessage {
    /// The refresh interval elapsed; the UI should re-read all tracked files.
    RefreshRequested {
        /// 1-based count of ticks delivered since the scheduler started.
        tick: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io;

    fn stat_at(size: u64) -> FileStat {
        FileStat {
            size,
            modified: Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn test_apply_ok_sets_content_and_stat() {
        let mut file = TrackedFile::new(PathBuf::from("/data/text.txt"), StorageKind::Volume);
        file.apply(RefreshResult {
            content: Ok("hello\n".to_string()),
            stat: Some(stat_at(6)),
        });
        assert_eq!(file.last_known_content, "hello\n");
        assert_eq!(file.last_known_size, Some(6));
        assert!(file.last_error.is_none());
        assert_eq!(
            file.info_line(),
            "Path: /data/text.txt | Size: 6 bytes | Modified: 09:26:53"
        );
    }

    #[test]
    fn test_apply_not_found_uses_sentinel_and_clears_stat() {
        let mut file = TrackedFile::new(PathBuf::from("/data/text.txt"), StorageKind::BindMount);
        file.apply(RefreshResult {
            content: Ok("old".to_string()),
            stat: Some(stat_at(3)),
        });
        file.apply(RefreshResult {
            content: Err(FileError::NotFound {
                path: file.path.clone(),
            }),
            stat: None,
        });
        assert_eq!(file.last_known_content, NOT_FOUND_MESSAGE);
        assert_eq!(file.last_known_size, None);
        assert!(file.last_error.is_none(), "missing file is not an error");
        assert_eq!(file.info_line(), "Path: /data/text.txt");
    }

    #[test]
    fn test_read_error_is_rendered_descriptively() {
        let content: Result<String, FileError> = Err(FileError::Read {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        });
        let text = render_content(&content);
        assert!(text.starts_with("Error reading file: "), "got: {text}");
        assert!(text.contains("valid UTF-8"));
    }

    #[test]
    fn test_storage_kind_templates_differ() {
        assert_ne!(
            StorageKind::BindMount.template_header(),
            StorageKind::Volume.template_header()
        );
        assert_eq!(StorageKind::all().len(), 2);
    }
}
