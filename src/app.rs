use std::path::Path;

use eframe::egui::{self, Align2, Color32, FontId, Id, LayerId, Order};

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ParamCompareApp {
    pub state: AppState,
}

impl Default for ParamCompareApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for ParamCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_file_drops(ctx);

        // ---- Top panel: menu bar, filter, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: alignment table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::alignment_table(ui, &mut self.state);
        });
    }
}

impl ParamCompareApp {
    /// Drag-and-drop import: only `.param` files are accepted, and only the
    /// first one of a multi-file drop is imported.
    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let hovering_param = ctx.input(|i| {
            i.raw
                .hovered_files
                .iter()
                .any(|f| f.path.as_deref().is_some_and(is_param_file))
        });
        if hovering_param {
            drop_overlay(ctx);
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        match dropped
            .iter()
            .filter_map(|f| f.path.as_deref())
            .find(|p| is_param_file(p))
        {
            Some(path) => panels::import_path(&mut self.state, path),
            None => log::debug!("ignoring drop without a .param file"),
        }
    }
}

fn is_param_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("param"))
}

fn drop_overlay(ctx: &egui::Context) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_overlay")));
    let rect = ctx.screen_rect();
    painter.rect_filled(rect, 0.0, Color32::from_black_alpha(96));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Drop to import",
        FontId::proportional(22.0),
        Color32::WHITE,
    );
}
