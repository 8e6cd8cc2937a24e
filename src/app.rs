use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use eframe::egui;

use crate::data::model::EvDataset;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EvDashApp {
    pub state: AppState,
    /// Channel from the one-shot startup loader; dropped once it delivers.
    dataset_rx: Option<Receiver<EvDataset>>,
}

impl EvDashApp {
    pub fn new(dataset_rx: Receiver<EvDataset>) -> Self {
        Self {
            state: AppState::default(),
            dataset_rx: Some(dataset_rx),
        }
    }

    /// Poll the startup loader until the dataset arrives.
    fn poll_loader(&mut self) {
        let Some(rx) = &self.dataset_rx else { return };
        match rx.try_recv() {
            Ok(dataset) => {
                self.state.set_dataset(dataset);
                self.dataset_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Loader thread died without sending; same as an empty load.
                log::warn!("Dataset loader exited without delivering");
                self.state.set_dataset(EvDataset::default());
                self.dataset_rx = None;
            }
        }
    }
}

impl eframe::App for EvDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        if self.state.loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ---- Top panel: title and record counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters and selectors ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::chart_panel(ui, &self.state);
        });
    }
}
