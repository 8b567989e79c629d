use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::app::DashboardApp;
use crate::export::{self, SortDirection, sorted_values};
use crate::format::format_number;

const ROW_HEIGHT: f32 = 20.0;
const TABLE_MAX_HEIGHT: f32 = 380.0;

// ---------------------------------------------------------------------------
// Data table of the selected sector
// ---------------------------------------------------------------------------

/// Index/value table with a sort toggle and CSV export of the shown order.
pub fn data_table(ui: &mut Ui, app: &mut DashboardApp) {
    let title = app.controller.view().formatted_title().to_string();
    let direction = app.session.sort_direction;

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(format!("{title} Data"));

        let sort_hint = match direction {
            SortDirection::Ascending => "Sort Descending",
            SortDirection::Descending => "Sort Ascending",
        };
        if ui.button("⇅").on_hover_text(sort_hint).clicked() {
            app.session.sort_direction = direction.toggled();
        }
        if ui.button("Export CSV").clicked() {
            export_sector_dialog(app, &title, direction);
        }
    });

    let rows = sorted_values(app.controller.primary_sample(), app.session.sort_direction);

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(TABLE_MAX_HEIGHT)
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Index");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label((i + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(egui::RichText::new(format_number(rows[i])).strong());
                });
            });
        });
}

fn export_sector_dialog(app: &mut DashboardApp, title: &str, direction: SortDirection) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(export::sector_csv_file_name(title))
        .add_filter("CSV Files", &["csv"])
        .save_file()
    else {
        return;
    };

    let sample = app.controller.primary_sample();
    let result =
        export::export_to_file(&path, |f| export::write_sector_csv(f, sample, direction));
    if let Err(e) = result {
        app.report_error("Export", &e);
    }
}
