// Text Monitor - gui.rs
//
// Top-level eframe::App implementation.
// Drains refresh requests from the scheduler, acts on button flags, and
// wires together the UI panels. Runs entirely on the UI thread.

use crate::app::scheduler::{PollingScheduler, SchedulerState};
use crate::app::state::AppState;
use crate::core::model::SchedulerMessage;
use crate::ui;
use chrono::Local;

/// The Text Monitor application.
pub struct TextMonitorApp {
    pub state: AppState,
    pub scheduler: PollingScheduler,
}

impl TextMonitorApp {
    /// Create a new application instance with the given state and a running
    /// scheduler.
    pub fn new(state: AppState, scheduler: PollingScheduler) -> Self {
        Self { state, scheduler }
    }
}

impl eframe::App for TextMonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Scheduled refresh hand-off. Everything drained this frame is served
        // by one refresh.
        let requests = self.scheduler.poll_requests();
        if let Some(SchedulerMessage::RefreshRequested { tick }) = requests.last() {
            tracing::debug!(tick, drained = requests.len(), "Scheduled refresh");
            self.state.refresh_all(Local::now());
        }

        // ---- Handle flags set by the control panel ----
        if std::mem::take(&mut self.state.request_append) {
            self.state.append_sample_all(Local::now());
        }
        if std::mem::take(&mut self.state.request_refresh) {
            self.state.refresh_all(Local::now());
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::panels::header::render(ui);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ui::theme::STATUS_TEXT, &self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.scheduler.state() == SchedulerState::Stopped {
                        ui.colored_label(ui::theme::ERROR_TEXT, "Auto-refresh stopped");
                    }
                    let n = self.state.warnings.len();
                    if n > 0 {
                        ui.colored_label(ui::theme::WARNING_TEXT, format!("\u{26a0} {n}"))
                            .on_hover_text(self.state.warnings.join("\n"));
                    }
                    if self.state.debug_mode {
                        ui.weak("debug");
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::controls::render(ui, &mut self.state);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::file_tab::render(ui, &mut self.state);
        });
    }
}
