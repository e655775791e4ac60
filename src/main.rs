mod app;
mod color;
mod data;
mod state;
mod ui;

use app::ParamCompareApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Parameter Comparator",
        options,
        Box::new(|_cc| Ok(Box::new(ParamCompareApp::default()))),
    )
}
