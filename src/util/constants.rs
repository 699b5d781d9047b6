// Text Monitor - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Text Monitor";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "TextMonitor";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Native window title.
pub const WINDOW_TITLE: &str = "Text.txt Monitor";

// =============================================================================
// Tracked files
// =============================================================================

/// Default path of the file standing in for a host bind mount.
pub const DEFAULT_BIND_MOUNT_PATH: &str = "/app/data/bind_mount/text.txt";

/// Default path of the file standing in for a persistent volume.
pub const DEFAULT_VOLUME_PATH: &str = "/app/data/volume/text.txt";

/// Text shown in place of file content when the file does not exist.
pub const NOT_FOUND_MESSAGE: &str = "File not found!";

/// Prefix of the text shown in place of file content when a read fails.
pub const READ_ERROR_PREFIX: &str = "Error reading file";

/// `strftime` format of the creation line written into new files.
pub const CREATED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `strftime` format used for append separators, mtimes and the status bar.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Refresh scheduling
// =============================================================================

/// Default interval between scheduled refresh ticks (seconds).
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// Minimum user-configurable refresh interval (seconds).
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 1;

/// Maximum user-configurable refresh interval (seconds).
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3_600; // 1 h

/// How often the scheduler thread checks its stop flag while sleeping (ms).
pub const SCHEDULER_CANCEL_CHECK_INTERVAL_MS: u64 = 100;

/// Maximum number of non-fatal warnings kept for display.
/// Oldest entries are dropped first once the cap is reached.
pub const MAX_WARNINGS: usize = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
