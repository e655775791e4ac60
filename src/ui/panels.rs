use std::path::Path;

use eframe::egui::{self, Color32, RichText, TextEdit, Ui};

use crate::state::{AppState, ImportError};

// ---------------------------------------------------------------------------
// Top bar: menu, filter field, counters, status message
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Import…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let filter = TextEdit::singleline(&mut state.filter_text)
            .hint_text("Filter…")
            .desired_width(150.0);
        if ui.add(filter).changed() {
            state.refilter();
        }

        ui.separator();

        if !state.table.is_empty() {
            ui.label(format!(
                "{} parameters ({} visible) from {} file(s)",
                state.table.rows().len(),
                state.visible_rows.len(),
                state.table.data_column_count(),
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Import parameter file")
        .add_filter("Parameter files", &["param"])
        .pick_file();

    if let Some(path) = file {
        import_path(state, &path);
    }
}

/// Shared import entry point for the menu dialog and drag-and-drop.
pub fn import_path(state: &mut AppState, path: &Path) {
    match state.import_file(path) {
        Ok(()) => {
            log::info!(
                "Imported {} ({} parameters in table)",
                path.display(),
                state.table.rows().len()
            );
            state.status_message = None;
        }
        Err(err) => {
            match &err {
                ImportError::AlreadyImported(_) => log::warn!("{err}"),
                ImportError::Load(_) => log::error!("Failed to import: {err}"),
            }
            state.status_message = Some(format!("Import failed: {err}"));
        }
    }
}
