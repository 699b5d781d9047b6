// Text Monitor - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for Text Monitor configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/textmonitor/ or %APPDATA%\TextMonitor\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[files]` section.
    pub files: FilesSection,
    /// `[refresh]` section.
    pub refresh: RefreshSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[files]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FilesSection {
    /// Path of the bind-mount file.
    pub bind_mount_path: Option<PathBuf>,
    /// Path of the volume file.
    pub volume_path: Option<PathBuf>,
}

/// `[refresh]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RefreshSection {
    /// Seconds between scheduled refresh ticks.
    pub interval_secs: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the file standing in for a host bind mount.
    pub bind_mount_path: PathBuf,
    /// Path of the file standing in for a persistent volume.
    pub volume_path: PathBuf,
    /// Interval between scheduled refresh ticks.
    pub refresh_interval: Duration,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_mount_path: PathBuf::from(constants::DEFAULT_BIND_MOUNT_PATH),
            volume_path: PathBuf::from(constants::DEFAULT_VOLUME_PATH),
            refresh_interval: Duration::from_secs(constants::DEFAULT_REFRESH_INTERVAL_SECS),
            log_level: None,
        }
    }
}

/// Check a refresh interval against the allowed range.
pub fn validate_interval_secs(secs: u64) -> Result<Duration, ConfigError> {
    if (constants::MIN_REFRESH_INTERVAL_SECS..=constants::MAX_REFRESH_INTERVAL_SECS)
        .contains(&secs)
    {
        Ok(Duration::from_secs(secs))
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: "[refresh] interval_secs".to_string(),
            value: secs.to_string(),
            expected: format!(
                "{}-{} seconds",
                constants::MIN_REFRESH_INTERVAL_SECS,
                constants::MAX_REFRESH_INTERVAL_SECS
            ),
        })
    }
}

/// Read and parse config.toml without validating values.
///
/// Returns `Ok(None)` if the file does not exist (first run).
pub fn read_raw_config(config_path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;
    let raw = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })?;
    Ok(Some(raw))
}

/// Load and validate config.toml at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning:
/// the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw_config(config_path) {
        Ok(Some(r)) => r,
        Ok(None) => {
            tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), warnings);
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Files --
    if let Some(path) = raw.files.bind_mount_path {
        if path.as_os_str().is_empty() {
            warnings.push("[files] bind_mount_path is empty. Using default.".to_string());
        } else {
            config.bind_mount_path = path;
        }
    }
    if let Some(path) = raw.files.volume_path {
        if path.as_os_str().is_empty() {
            warnings.push("[files] volume_path is empty. Using default.".to_string());
        } else {
            config.volume_path = path;
        }
    }

    // -- Refresh: interval_secs --
    if let Some(secs) = raw.refresh.interval_secs {
        match validate_interval_secs(secs) {
            Ok(interval) => config.refresh_interval = interval,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_REFRESH_INTERVAL_SECS
            )),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}
