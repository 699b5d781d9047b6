// Text Monitor - app/state.rs
//
// Application state management. Holds the two tracked files, the status
// line, accumulated warnings and the request flags set by UI panels.
// Owned by the eframe::App implementation and only ever touched on the UI
// thread, so every file operation runs one at a time.

use crate::core::model::{StorageKind, TrackedFile};
use crate::core::template;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants::{CLOCK_FORMAT, MAX_WARNINGS};
use chrono::{DateTime, Local};
use std::time::Duration;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The bind-mount file followed by the volume file. The set is fixed.
    pub files: [TrackedFile; 2],

    /// Index into `files` of the tab currently shown.
    pub selected_tab: usize,

    /// Interval of the background refresh timer, for the status line.
    pub refresh_interval: Duration,

    /// Status message for the status bar.
    pub status_message: String,

    /// Time of the most recent completed refresh.
    pub last_refreshed_at: Option<DateTime<Local>>,

    /// Non-fatal warnings (config problems, failed writes), newest last.
    pub warnings: Vec<String>,

    /// Set by the Refresh All button; handled by the app on the next frame.
    pub request_refresh: bool,

    /// Set by the Add Sample Text button.
    pub request_append: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create state for the configured paths. No I/O happens here.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            files: [
                TrackedFile::new(config.bind_mount_path.clone(), StorageKind::BindMount),
                TrackedFile::new(config.volume_path.clone(), StorageKind::Volume),
            ],
            selected_tab: 0,
            refresh_interval: config.refresh_interval,
            status_message: format!(
                "Auto-refresh every {} seconds",
                config.refresh_interval.as_secs()
            ),
            last_refreshed_at: None,
            warnings: Vec::new(),
            request_refresh: false,
            request_append: false,
            debug_mode,
        }
    }

    /// Create any missing tracked file from its template.
    ///
    /// Creation failures are recorded as warnings; the next refresh will show
    /// whatever the read returns for that path.
    pub fn ensure_files(&mut self, now: &DateTime<Local>) {
        let created_at = now.naive_local();
        let mut failures = Vec::new();
        for file in &self.files {
            let lines = template::initial_template(file.kind, &created_at);
            if let Err(e) = fs::ensure_exists(&file.path, &lines) {
                tracing::warn!(kind = %file.kind, error = %e, "Could not create tracked file");
                failures.push(e.to_string());
            }
        }
        for msg in failures {
            self.push_warning(msg);
        }
    }

    /// Re-read every tracked file in full and stamp the status line.
    pub fn refresh_all(&mut self, now: DateTime<Local>) {
        for file in &mut self.files {
            let result = fs::refresh(&file.path);
            file.apply(result);
        }
        self.last_refreshed_at = Some(now);
        self.status_message = format!("Refreshed at: {}", now.format(CLOCK_FORMAT));
        tracing::debug!(at = %now.format(CLOCK_FORMAT), "Refreshed tracked files");
    }

    /// Append the sample block to every tracked file, then refresh.
    ///
    /// A failed append is logged and kept as a warning; the other file is
    /// still written and the refresh still runs.
    pub fn append_sample_all(&mut self, now: DateTime<Local>) {
        let block = template::sample_append_block(&now.naive_local());
        let mut failures = Vec::new();
        for file in &self.files {
            if let Err(e) = fs::append(&file.path, &block) {
                tracing::warn!(kind = %file.kind, error = %e, "Error writing sample text");
                failures.push(format!("Error writing to {} file: {e}", file.kind));
            }
        }
        for msg in failures {
            self.push_warning(msg);
        }
        self.refresh_all(now);
    }

    /// The file shown in the selected tab.
    pub fn selected_file(&self) -> &TrackedFile {
        &self.files[self.selected_tab.min(self.files.len() - 1)]
    }

    /// Record a warning, dropping the oldest once `MAX_WARNINGS` is reached.
    pub fn push_warning(&mut self, msg: String) {
        if self.warnings.len() >= MAX_WARNINGS {
            self.warnings.remove(0);
        }
        self.warnings.push(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            bind_mount_path: dir.join("bind_mount").join("text.txt"),
            volume_path: dir.join("volume").join("text.txt"),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_new_state_has_two_files_and_interval_status() {
        let state = AppState::new(&AppConfig::default(), false);
        assert_eq!(state.files[0].kind, StorageKind::BindMount);
        assert_eq!(state.files[1].kind, StorageKind::Volume);
        assert_eq!(state.status_message, "Auto-refresh every 5 seconds");
        assert!(state.last_refreshed_at.is_none());
    }

    #[test]
    fn test_append_failure_is_recorded_and_refresh_still_runs() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new(&config_in(dir.path()), false);
        // Only the volume directory exists, so the bind-mount append fails.
        std::fs::create_dir_all(dir.path().join("volume")).unwrap();

        let now = Local::now();
        state.append_sample_all(now);

        assert_eq!(state.warnings.len(), 1);
        assert!(state.warnings[0].contains("Bind Mount"), "got {:?}", state.warnings);
        assert_eq!(state.files[0].last_known_content, "File not found!");
        assert!(state.files[1].last_known_content.contains("--- Added at "));
        assert_eq!(state.last_refreshed_at, Some(now));
    }

    #[test]
    fn test_warnings_are_bounded() {
        let mut state = AppState::new(&AppConfig::default(), false);
        for i in 0..MAX_WARNINGS + 5 {
            state.push_warning(format!("w{i}"));
        }
        assert_eq!(state.warnings.len(), MAX_WARNINGS);
        assert_eq!(state.warnings[0], "w5");
    }

    #[test]
    fn test_selected_file_clamps_index() {
        let mut state = AppState::new(&AppConfig::default(), false);
        state.selected_tab = 7;
        assert_eq!(state.selected_file().kind, StorageKind::Volume);
    }
}
