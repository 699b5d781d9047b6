// Text Monitor - ui/panels/controls.rs
//
// Refresh / Add Sample Text / Exit buttons.
// Buttons only set request flags on the state; the app acts on them.

use crate::app::state::AppState;

/// Render the control buttons.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("\u{1f504} Refresh All").clicked() {
            state.request_refresh = true;
        }
        if ui.button("\u{1f4dd} Add Sample Text").clicked() {
            state.request_append = true;
        }
        if ui.button("\u{274c} Exit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
