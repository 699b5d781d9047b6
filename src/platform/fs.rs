// Text Monitor - platform/fs.rs
//
// File display controller: turns a path into display-ready content and
// metadata. Stateless; every function makes one synchronous filesystem call
// (or a small fixed sequence of them) and reports failures as `FileError`
// values rather than panicking.
//
// Every refresh re-reads the whole file; there is no modification-time
// short-circuit.

use crate::core::model::{FileStat, RefreshResult};
use crate::core::template;
use crate::util::error::FileError;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Create `path` with `template_lines` as its content if it does not exist.
///
/// Parent directories are created as needed. Returns `Ok(true)` if the file
/// was created and `Ok(false)` if it already existed; an existing file is
/// never modified.
pub fn ensure_exists(path: &Path, template_lines: &[String]) -> Result<bool, FileError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| FileError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    }

    // create_new: if something else created the file since the exists()
    // check, leave it alone.
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(source) => {
            return Err(FileError::Create {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    file.write_all(template::template_text(template_lines).as_bytes())
        .map_err(|source| FileError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), "Created file from template");
    Ok(true)
}

/// Read the full content of `path` as UTF-8 text.
pub fn read(path: &Path) -> Result<String, FileError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FileError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(FileError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// `read` rendered for display: the content, the not-found sentinel, or a
/// descriptive error message.
pub fn read_for_display(path: &Path) -> String {
    crate::core::model::render_content(&read(path))
}

/// Append `text` to `path`, creating the file if it is missing.
pub fn append(path: &Path, text: &str) -> Result<(), FileError> {
    let write = || -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        file.write_all(text.as_bytes())
    };
    write().map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Appended text");
    Ok(())
}

/// Size and local modification time of `path`, or `None` if it does not
/// exist or its metadata cannot be read.
pub fn stat(path: &Path) -> Option<FileStat> {
    let meta = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot stat file");
            }
            return None;
        }
    };
    let modified = match meta.modified() {
        Ok(t) => DateTime::<Local>::from(t),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Modification time unavailable");
            return None;
        }
    };
    Some(FileStat {
        size: meta.len(),
        modified,
    })
}

/// Read content and metadata of `path` for one refresh.
pub fn refresh(path: &Path) -> RefreshResult {
    let content = read(path);
    if let Err(ref e) = content {
        if e.is_not_found() {
            tracing::debug!(path = %path.display(), "Tracked file not found");
        } else {
            tracing::warn!(error = %e, "Tracked file read failed");
        }
    }
    let stat = match content {
        Err(ref e) if e.is_not_found() => None,
        _ => stat(path),
    };
    RefreshResult { content, stat }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_ensure_exists_creates_parents_and_writes_template() {
        let dir = TempDir::new().expect("tmpdir");
        let path = dir.path().join("bind_mount").join("nested").join("text.txt");

        let created = ensure_exists(&path, &lines(&["=== Header ===", "body"])).unwrap();
        assert!(created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "=== Header ===\nbody\n");
    }

    #[test]
    fn test_ensure_exists_is_idempotent() {
        let dir = TempDir::new().expect("tmpdir");
        let path = dir.path().join("text.txt");
        fs::write(&path, "user content").unwrap();

        let created = ensure_exists(&path, &lines(&["template"])).unwrap();
        assert!(!created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "user content");
    }

    #[test]
    fn test_ensure_exists_fails_when_parent_is_a_file() {
        let dir = TempDir::new().expect("tmpdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = ensure_exists(&blocker.join("text.txt"), &lines(&["x"]));
        assert!(matches!(result, Err(FileError::Create { .. })), "got {result:?}");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = TempDir::new().expect("tmpdir");
        let path = dir.path().join("absent.txt");
        assert!(matches!(read(&path), Err(FileError::NotFound { .. })));
        assert_eq!(read_for_display(&path), "File not found!");
    }

    #[test]
    fn test_read_invalid_utf8_is_read_error() {
        let dir = TempDir::new().expect("tmpdir");
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xffu8, 0xfe, 0x00, 0xc3]).unwrap();

        assert!(matches!(read(&path), Err(FileError::Read { .. })));
        assert!(read_for_display(&path).starts_with("Error reading file: "));
    }

    #[test]
    fn test_read_directory_is_read_error_not_panic() {
        let dir = TempDir::new().expect("tmpdir");
        assert!(matches!(read(dir.path()), Err(FileError::Read { .. })));
    }

    #[test]
    fn test_append_does_not_truncate() {
        let dir = TempDir::new().expect("tmpdir");
        let path = dir.path().join("text.txt");
        fs::write(&path, "original\n").unwrap();

        append(&path, "A").unwrap();
        append(&path, "B").unwrap();
        assert_eq!(read(&path).unwrap(), "original\nAB");
    }

    #[test]
    fn test_append_into_missing_directory_fails_with_write_error() {
        let dir = TempDir::new().expect("tmpdir");
        let path = dir.path().join("no_such_dir").join("text.txt");
        assert!(matches!(append(&path, "x"), Err(FileError::Write { .. })));
    }

    #[test]
    fn test_stat_reports_byte_length() {
        let dir = TempDir::new().expect("tmpdir");
        let path = dir.path().join("text.txt");
        let before = Local::now() - chrono::Duration::seconds(2);
        fs::write(&path, "h\u{e9}llo").unwrap();

        let stat = stat(&path).expect("file exists");
        assert_eq!(stat.size, "h\u{e9}llo".len() as u64);
        assert!(stat.modified >= before);
        assert!(super::stat(&dir.path().join("absent")).is_none());
    }

    #[test]
    fn test_refresh_missing_file_has_no_stat() {
        let dir = TempDir::new().expect("tmpdir");
        let result = refresh(&dir.path().join("absent.txt"));
        assert!(result.stat.is_none());
        assert_eq!(result.display_text(), "File not found!");
    }
}
