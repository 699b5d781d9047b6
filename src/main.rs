// Text Monitor - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Tracked-file creation and the first refresh
// 5. eframe GUI launch with the refresh scheduler

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use textmonitor::app;
pub use textmonitor::core;
pub use textmonitor::platform;
pub use textmonitor::ui;
pub use textmonitor::util;

use chrono::Local;
use clap::Parser;
use std::path::PathBuf;

/// Text Monitor - watch a bind-mount file and a volume file side by side.
///
/// Both files are re-read on a fixed interval, so edits made from the host
/// show up without restarting the application.
#[derive(Parser, Debug)]
#[command(name = "textmonitor", version, about)]
struct Cli {
    /// Path of the bind-mount file (overrides config.toml).
    #[arg(long = "bind-mount")]
    bind_mount: Option<PathBuf>,

    /// Path of the volume file (overrides config.toml).
    #[arg(long = "volume")]
    volume: Option<PathBuf>,

    /// Seconds between automatic refreshes (overrides config.toml).
    #[arg(short = 'i', long = "interval")]
    interval: Option<u64>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can apply; any
    // problems are returned as warnings and logged once tracing is up.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (mut config, mut warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "Text Monitor starting"
    );

    // CLI > config.toml > defaults
    if let Some(path) = cli.bind_mount {
        config.bind_mount_path = path;
    }
    if let Some(path) = cli.volume {
        config.volume_path = path;
    }
    if let Some(secs) = cli.interval {
        match platform::config::validate_interval_secs(secs) {
            Ok(interval) => config.refresh_interval = interval,
            Err(e) => warnings.push(format!(
                "--interval: {e}. Using {}s.",
                config.refresh_interval.as_secs()
            )),
        }
    }

    for warning in &warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    tracing::info!(
        bind_mount = %config.bind_mount_path.display(),
        volume = %config.volume_path.display(),
        interval_secs = config.refresh_interval.as_secs(),
        "Tracked files configured"
    );

    let mut state = app::state::AppState::new(&config, cli.debug);
    for warning in warnings {
        state.push_warning(warning);
    }
    state.ensure_files(&Local::now());
    state.refresh_all(Local::now());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::WINDOW_TITLE)
            .with_inner_size(ui::theme::WINDOW_SIZE)
            .with_min_inner_size(ui::theme::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let interval = config.refresh_interval;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            // The timer thread only wakes the UI; the refresh itself runs in
            // TextMonitorApp::update on this thread.
            let ctx = cc.egui_ctx.clone();
            let scheduler =
                app::scheduler::PollingScheduler::start(interval, move || ctx.request_repaint());
            Ok(Box::new(gui::TextMonitorApp::new(state, scheduler)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Text Monitor GUI: {e}");
        std::process::exit(1);
    }
}
