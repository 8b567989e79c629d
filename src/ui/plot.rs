use eframe::egui::{self, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints, Points,
};

use crate::app::DashboardApp;
use crate::color::chart_colors;
use crate::data::stats::{BoxSummary, SectorStats};
use crate::export;
use crate::labels::generate_labels;
use crate::state::{ChartType, DashboardController};

const CHART_HEIGHT: f32 = 320.0;

/// Series names of the comparison chart, one group of bars each.
pub const COMPARISON_MEASURES: [&str; 5] =
    ["Mean", "Median", "Min", "Max", "Standard Deviation"];

// ---------------------------------------------------------------------------
// Primary chart (central panel)
// ---------------------------------------------------------------------------

/// Title row with the export button, then the chart for the selected type.
pub fn chart_section(ui: &mut Ui, app: &mut DashboardApp) {
    let title = app.controller.view().formatted_title().to_string();
    let chart_type = app.controller.selection().chart_type;

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(format!("{title} Data Analysis"));
        if ui.button("Export Chart").clicked() {
            request_chart_export(ui.ctx(), app, &title, chart_type);
        }
    });

    let sample = app.controller.primary_sample();
    let stats = app.controller.view().stats();
    let rect = sector_chart(ui, sample, stats, &title, chart_type);
    app.session.chart_rect = Some(rect);
}

/// Ask for a destination, then request a screenshot; the app saves the
/// chart area once the screenshot arrives.
fn request_chart_export(
    ctx: &egui::Context,
    app: &mut DashboardApp,
    title: &str,
    chart_type: ChartType,
) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(export::chart_png_file_name(title, chart_type))
        .add_filter("PNG Image", &["png"])
        .save_file()
    else {
        return;
    };

    app.session.pending_chart_export = Some(path);
    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
}

/// Draw one sector with the chosen chart type. Returns the plot's screen rect.
pub fn sector_chart(
    ui: &mut Ui,
    sample: &[f64],
    stats: &SectorStats,
    title: &str,
    chart_type: ChartType,
) -> egui::Rect {
    let colors = chart_colors(0);

    let plot = Plot::new("sector_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true);

    let plot = match chart_type {
        ChartType::BoxPlot => plot.y_axis_label("").x_axis_label("Value"),
        _ => plot.x_axis_label("Index").y_axis_label("Value"),
    };

    let response = plot.show(ui, |plot_ui| match chart_type {
        ChartType::Bar => {
            let labels = generate_labels(sample.len());
            let bars: Vec<Bar> = sample
                .iter()
                .zip(labels)
                .enumerate()
                .map(|(i, (&v, label))| {
                    Bar::new((i + 1) as f64, v)
                        .name(label)
                        .fill(colors.fill)
                        .stroke(Stroke::new(1.0, colors.stroke))
                        .width(0.8)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name(title).color(colors.stroke));
        }
        ChartType::Line => {
            plot_ui.line(
                Line::new(indexed_points(sample))
                    .name(title)
                    .color(colors.stroke)
                    .width(2.0),
            );
        }
        ChartType::Scatter => {
            plot_ui.points(
                Points::new(indexed_points(sample))
                    .name(title)
                    .color(colors.stroke)
                    .radius(4.0),
            );
        }
        ChartType::BoxPlot => {
            let summary = BoxSummary::from(stats);
            let spread = BoxSpread::new(
                summary.lower_whisker,
                summary.q1,
                summary.median,
                summary.q3,
                summary.upper_whisker,
            );
            let elem = BoxElem::new(0.0, spread)
                .name(title)
                .box_width(0.5)
                .fill(colors.fill)
                .stroke(Stroke::new(1.5, colors.stroke));
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name(title).horizontal());
        }
    });

    response.response.rect
}

/// `(i + 1, value)` points: the x axis counts data points from one.
fn indexed_points(sample: &[f64]) -> PlotPoints {
    sample
        .iter()
        .enumerate()
        .map(|(i, &v)| [(i + 1) as f64, v])
        .collect()
}

// ---------------------------------------------------------------------------
// Comparison chart
// ---------------------------------------------------------------------------

/// Values plotted for one sector in the comparison chart, in
/// [`COMPARISON_MEASURES`] order.
pub fn comparison_values(stats: &SectorStats) -> [f64; 5] {
    [
        stats.mean,
        stats.median,
        stats.min,
        stats.max,
        stats.standard_deviation,
    ]
}

/// Grouped bars of the primary and comparison statistics, or a hint when
/// no comparison sector is chosen.
pub fn comparison_section(ui: &mut Ui, controller: &DashboardController) {
    let view = controller.view();
    ui.heading("Sector Comparison");

    let (Some(comparison), Some(title)) = (&view.comparison, view.formatted_comparison_title())
    else {
        ui.add_sized(
            [ui.available_width(), 80.0],
            egui::Label::new("Select a sector to compare with"),
        );
        return;
    };
    let compared_points = controller.comparison_sample().map_or(0, <[f64]>::len);
    ui.label(format!(
        "{} vs {title} ({} / {compared_points} data points)",
        view.formatted_title(),
        view.stats().count
    ));

    let series = [
        (&view.primary.title, &view.primary.stats, -0.2),
        (&comparison.title, &comparison.stats, 0.2),
    ];

    Plot::new("comparison_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_scroll(false)
        .y_axis_label("Value")
        .show(ui, |plot_ui| {
            for (index, (title, stats, offset)) in series.into_iter().enumerate() {
                let colors = chart_colors(index);
                let bars: Vec<Bar> = comparison_values(stats)
                    .into_iter()
                    .zip(COMPARISON_MEASURES)
                    .enumerate()
                    .map(|(i, (v, measure))| {
                        Bar::new(i as f64 + offset, v)
                            .name(measure)
                            .fill(colors.fill)
                            .stroke(Stroke::new(1.0, colors.stroke))
                            .width(0.4)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(title).color(colors.stroke));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::compute_stats;

    #[test]
    fn points_start_at_one() {
        let points = indexed_points(&[4.0, 5.0]);
        let xs: Vec<f64> = points.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn comparison_values_follow_measure_order() {
        let stats = compute_stats(&[1.0, 2.0, 3.0, 4.0]);
        let values = comparison_values(&stats);
        assert_eq!(values[..4], [2.5, 2.5, 1.0, 4.0]);
        assert_eq!(COMPARISON_MEASURES[4], "Standard Deviation");
        assert!((values[4] - 1.25f64.sqrt()).abs() < 1e-12);
    }
}
