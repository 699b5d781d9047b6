// Text Monitor - ui/panels/file_tab.rs
//
// Tab strip plus the body of the selected tab: the path/size/mtime line and
// a scrollable, read-only view of the file content.
//
// The scroll area keeps its offset across refreshes because its id is tied
// to the storage kind, not to the content.

use crate::app::state::AppState;
use crate::core::model::TrackedFile;
use crate::ui::theme;
use crate::util::constants::NOT_FOUND_MESSAGE;

/// Render the tab strip and the selected file.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        for (i, file) in state.files.iter().enumerate() {
            ui.selectable_value(&mut state.selected_tab, i, file.kind.tab_title());
        }
    });
    ui.separator();
    render_file(ui, state.selected_file());
}

fn render_file(ui: &mut egui::Ui, file: &TrackedFile) {
    ui.label(
        egui::RichText::new(file.info_line())
            .monospace()
            .size(theme::PATH_LABEL_SIZE),
    );
    if let Some(ref err) = file.last_error {
        ui.colored_label(theme::ERROR_TEXT, err);
    }
    ui.add_space(4.0);

    let colour = if file.last_known_content == NOT_FOUND_MESSAGE {
        Some(theme::WARNING_TEXT)
    } else if file.last_error.is_some() {
        Some(theme::ERROR_TEXT)
    } else {
        None
    };

    egui::ScrollArea::vertical()
        .id_salt(("file_content", file.kind.label()))
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let mut text: &str = &file.last_known_content;
            let mut edit = egui::TextEdit::multiline(&mut text)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY);
            if let Some(c) = colour {
                edit = edit.text_color(c);
            }
            ui.add(edit);
        });
}
