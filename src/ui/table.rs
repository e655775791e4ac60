use eframe::egui::{self, Color32, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::state::AppState;

const HEADER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Central table view
// ---------------------------------------------------------------------------

/// Render the alignment table: the name column plus one column per imported
/// file, rows tinted by classification. Right-clicking a file column header
/// offers deletion; the name column has no menu.
pub fn alignment_table(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Import a .param file to start comparing  (File → Import…)");
        });
        return;
    }

    let n_data = state.table.data_column_count();
    let mut delete_request: Option<usize> = None;

    TableBuilder::new(ui)
        .resizable(true)
        .column(Column::auto().at_least(160.0))
        .columns(Column::remainder().at_least(70.0), n_data)
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            for (i, file_column) in state.table.columns().iter().enumerate() {
                let (_, response) = header.col(|ui| {
                    ui.strong(&file_column.label);
                });
                response.context_menu(|ui| {
                    if ui.button("Delete column").clicked() {
                        // Grid index: data columns start at 1.
                        delete_request = Some(i + 1);
                        ui.close_menu();
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_rows.len(), |mut table_row| {
                let row = &state.table.rows()[state.visible_rows[table_row.index()]];
                let fill = row.classification.map(color::classification_fill);

                table_row.col(|ui| {
                    paint_cell_fill(ui, fill);
                    ui.label(&row.name);
                });
                for cell in &row.cells {
                    table_row.col(|ui| {
                        paint_cell_fill(ui, fill);
                        if let Some(value) = cell {
                            ui.label(value);
                        }
                    });
                }
            });
        });

    if let Some(index) = delete_request {
        log::info!("Deleting column {index}");
        state.delete_column(index);
    }
}

/// Paint the cell background, expanded to cover the inter-cell spacing so a
/// classified row reads as one continuous band.
fn paint_cell_fill(ui: &mut Ui, fill: Option<Color32>) {
    if let Some(fill) = fill {
        let spacing = ui.spacing().item_spacing;
        let rect = ui.max_rect().expand2(egui::vec2(spacing.x / 2.0, spacing.y / 2.0));
        ui.painter().rect_filled(rect, 0.0, fill);
    }
}
