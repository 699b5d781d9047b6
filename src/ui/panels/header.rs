// Text Monitor - ui/panels/header.rs
//
// Title and one-line usage hint at the top of the window.

use crate::ui::theme;

/// Render the header.
pub fn render(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::PANEL_MARGIN);
        ui.label(
            egui::RichText::new("\u{1f4c4} Text.txt Monitor")
                .size(theme::TITLE_SIZE)
                .strong(),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Edit text.txt files outside Docker and see changes here")
                .size(theme::INFO_SIZE),
        );
        ui.add_space(4.0);
    });
}
