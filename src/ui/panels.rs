use std::collections::BTreeMap;

use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::{Metric, FILTER_FIELDS};
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Left side panel – filter and selector widgets
// ---------------------------------------------------------------------------

/// Render the left panel: one combo box per filter column, then the
/// metric and chart-type selectors.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone the option lists so the combo closures can mutate state.
    // Options always come from the unfiltered dataset: they never narrow
    // as other filters are applied.
    let options: BTreeMap<String, Vec<String>> = state
        .dataset
        .as_ref()
        .map(|ds| ds.filter_options.clone())
        .unwrap_or_default();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for field in FILTER_FIELDS {
                let values = options.get(field).map(Vec::as_slice).unwrap_or(&[]);
                filter_combo(ui, state, field, values);
            }

            ui.separator();

            ui.strong("Metric");
            egui::ComboBox::from_id_salt("metric")
                .selected_text(state.metric.column())
                .show_ui(ui, |ui: &mut Ui| {
                    for metric in Metric::ALL {
                        ui.selectable_value(&mut state.metric, metric, metric.column());
                    }
                });
            ui.add_space(4.0);

            ui.strong("Chart Type");
            egui::ComboBox::from_id_salt("chart_type")
                .selected_text(state.chart_kind.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for kind in ChartKind::ALL {
                        ui.selectable_value(&mut state.chart_kind, kind, kind.label());
                    }
                });
        });
}

/// One single-select filter combo with an "All <field>" default entry.
fn filter_combo(ui: &mut Ui, state: &mut AppState, field: &str, values: &[String]) {
    let selected = state.selected(field).to_string();
    let shown = if selected.is_empty() {
        all_label(field)
    } else {
        selected.clone()
    };

    ui.strong(field);
    egui::ComboBox::from_id_salt(field)
        .selected_text(shown)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(selected.is_empty(), all_label(field))
                .clicked()
            {
                state.set_filter(field, String::new());
            }
            for value in values {
                if ui.selectable_label(selected == *value, value).clicked() {
                    state.set_filter(field, value.clone());
                }
            }
        });
    ui.add_space(4.0);
}

fn all_label(field: &str) -> String {
    match field {
        "City" => "All Cities".to_string(),
        other => format!("All {other}s"),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title, load progress, record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("EV Population Dashboard");
        ui.separator();

        if state.loading {
            ui.spinner();
            ui.label("Loading dataset…");
        } else if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} matching",
                ds.len(),
                state.visible_indices.len()
            ));
        }
    });
}
