use eframe::egui::{self, Color32, Pos2, Sense, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::data::aggregate::AggregateRow;
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Chart panel (central)
// ---------------------------------------------------------------------------

/// Render the central panel for the current chart kind.
///
/// Every kind draws over the same aggregate rows; switching kinds changes
/// only the primitives, never the values.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    if state.loading {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.spinner();
        });
        return;
    }

    let Some(dataset) = &state.dataset else {
        return;
    };
    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data loaded");
        });
        return;
    }

    let rows = state.chart_data();
    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records match the current filters");
        });
        return;
    }

    let colors = ColorMap::from_labels(rows.iter().map(|r| r.label.as_str()));
    let metric = state.metric.column();

    match state.chart_kind {
        ChartKind::All => {
            // All three views side by side, over the identical row set.
            ui.columns(3, |cols: &mut [Ui]| {
                pie_chart(&mut cols[0], metric, &rows, &colors);
                bar_chart(&mut cols[1], metric, &rows, &colors);
                line_chart(&mut cols[2], metric, &rows);
            });
        }
        ChartKind::Pie => pie_chart(ui, metric, &rows, &colors),
        ChartKind::Bar => bar_chart(ui, metric, &rows, &colors),
        ChartKind::Line => line_chart(ui, metric, &rows),
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

/// Proportional slices with a swatch legend underneath. egui_plot has no
/// pie primitive, so the slices are painted directly.
fn pie_chart(ui: &mut Ui, metric: &str, rows: &[AggregateRow], colors: &ColorMap) {
    ui.vertical(|ui: &mut Ui| {
        ui.strong(format!("{metric} Distribution"));

        let total: u64 = rows.iter().map(|r| r.count).sum();
        let size = ui.available_width().min(280.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.45;

        // Start at 12 o'clock, sweep clockwise.
        let mut start = -std::f32::consts::FRAC_PI_2;
        for row in rows {
            let sweep = (row.count as f32 / total as f32) * std::f32::consts::TAU;
            paint_slice(
                &painter,
                center,
                radius,
                start,
                sweep,
                colors.color_for(&row.label),
            );
            start += sweep;
        }

        for row in rows {
            ui.horizontal(|ui: &mut Ui| {
                let (swatch, p) = ui.allocate_painter(Vec2::splat(10.0), Sense::hover());
                p.rect_filled(
                    swatch.rect,
                    egui::CornerRadius::same(2),
                    colors.color_for(&row.label),
                );
                ui.label(format!("{} ({})", row.label, row.count));
            });
        }
    });
}

/// Fill one slice as a fan of triangles from the centre, so wide slices
/// (more than a half turn) still tessellate correctly.
fn paint_slice(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    let segments = ((sweep / std::f32::consts::TAU) * 96.0).ceil().max(1.0) as usize;
    for i in 0..segments {
        let a0 = start + sweep * (i as f32 / segments as f32);
        let a1 = start + sweep * ((i + 1) as f32 / segments as f32);
        painter.add(egui::Shape::convex_polygon(
            vec![
                center,
                center + radius * Vec2::new(a0.cos(), a0.sin()),
                center + radius * Vec2::new(a1.cos(), a1.sin()),
            ],
            color,
            Stroke::NONE,
        ));
    }
}

// ---------------------------------------------------------------------------
// Bar
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, metric: &str, rows: &[AggregateRow], colors: &ColorMap) {
    ui.vertical(|ui: &mut Ui| {
        ui.strong(format!("{metric} Distribution (Bar)"));

        let bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::new(i as f64, row.count as f64)
                    .name(&row.label)
                    .fill(colors.color_for(&row.label))
                    .width(0.6)
            })
            .collect();

        Plot::new(("bar_chart", metric))
            .legend(Legend::default())
            .y_axis_label("Count")
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(metric));
            });
    });
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, metric: &str, rows: &[AggregateRow]) {
    ui.vertical(|ui: &mut Ui| {
        ui.strong(format!("{metric} Distribution (Line)"));

        let points: PlotPoints = rows
            .iter()
            .enumerate()
            .map(|(i, row)| [i as f64, row.count as f64])
            .collect();

        let line = Line::new(points).name(metric).width(1.5);

        Plot::new(("line_chart", metric))
            .legend(Legend::default())
            .y_axis_label("Count")
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    });
}
