mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;
use std::sync::mpsc;

use app::EvDashApp;
use eframe::egui;

const DEFAULT_DATA_PATH: &str = "data/Electric_Vehicle_Population_Data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    // One-shot startup load on a background thread; the window opens
    // immediately and the charts fill in once the dataset arrives.
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let dataset = data::loader::load_or_empty(&path);
        let _ = tx.send(dataset);
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EV Population Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(EvDashApp::new(rx)))),
    )
}
