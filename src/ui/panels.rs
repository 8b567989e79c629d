use eframe::egui::{self, Color32, RichText, Ui};

use crate::app::{DashboardApp, Session};
use crate::export;
use crate::format::{format_number, format_sector_key};
use crate::state::{ChartType, ViewModel};

// ---------------------------------------------------------------------------
// Left side panel – selectors
// ---------------------------------------------------------------------------

/// Render the sector, chart-type and comparison selectors.
pub fn side_panel(ui: &mut Ui, app: &mut DashboardApp) {
    ui.heading("Controls");
    ui.separator();

    // Keys are cloned so the controller can be mutated inside the widgets.
    let selection = app.controller.selection().clone();
    let sector_keys: Vec<String> = app
        .controller
        .dataset()
        .keys()
        .map(str::to_string)
        .collect();
    let candidates: Vec<String> = app
        .controller
        .comparison_candidates()
        .into_iter()
        .map(str::to_string)
        .collect();

    // ---- Sector selector ----
    ui.strong("Select Sector");
    let mut picked_sector = None;
    egui::ComboBox::from_id_salt("sector_select")
        .width(ui.available_width())
        .selected_text(format_sector_key(&selection.selected_sector))
        .show_ui(ui, |ui: &mut Ui| {
            for key in &sector_keys {
                let is_selected = *key == selection.selected_sector;
                if ui
                    .selectable_label(is_selected, format_sector_key(key))
                    .clicked()
                {
                    picked_sector = Some(key.clone());
                }
            }
        });
    if let Some(key) = picked_sector {
        if let Err(e) = app.controller.select_sector(&key) {
            app.report_error("Sector selection", &anyhow::Error::from(e));
        }
    }
    ui.add_space(8.0);

    // ---- Chart type selector ----
    ui.strong("Chart Type");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for chart_type in ChartType::ALL {
            if ui
                .selectable_label(selection.chart_type == chart_type, chart_type.label())
                .clicked()
            {
                app.controller.select_chart_type(chart_type);
            }
        }
    });
    ui.add_space(8.0);

    // ---- Comparison selector ----
    ui.strong("Compare with:");
    let current = app.controller.selection().comparison_sector.clone();
    let selected_text = current
        .as_deref()
        .map(format_sector_key)
        .unwrap_or_else(|| "No comparison".to_string());

    let mut picked_comparison: Option<Option<String>> = None;
    egui::ComboBox::from_id_salt("comparison_select")
        .width(ui.available_width())
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "No comparison").clicked() {
                picked_comparison = Some(None);
            }
            for key in &candidates {
                let is_selected = current.as_deref() == Some(key.as_str());
                if ui
                    .selectable_label(is_selected, format_sector_key(key))
                    .clicked()
                {
                    picked_comparison = Some(Some(key.clone()));
                }
            }
        });
    if let Some(choice) = picked_comparison {
        if let Err(e) = app.controller.select_comparison(choice.as_deref()) {
            app.report_error("Comparison selection", &anyhow::Error::from(e));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, app: &mut DashboardApp) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open dataset…").clicked() {
                open_file_dialog(app);
                ui.close_menu();
            }
            if ui.button("Export all data…").clicked() {
                export_all_dialog(app);
                ui.close_menu();
            }
        });

        if ui.selectable_label(app.session.show_info, "About").clicked() {
            app.session.show_info = !app.session.show_info;
        }

        ui.separator();

        let view = app.controller.view();
        ui.label(format!(
            "{} Data Analysis: {} data points",
            view.formatted_title(),
            view.stats().count
        ));

        if let Some(msg) = &app.session.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Info banner
// ---------------------------------------------------------------------------

pub fn info_panel(ui: &mut Ui, session: &mut Session) {
    ui.add_space(4.0);
    ui.strong("About This Dashboard");
    ui.label(
        "Analyze and compare sector data. Select different sectors, visualize them \
         with multiple chart types, view statistics, and export the data for \
         further analysis.",
    );
    if ui.small_button("Dismiss").clicked() {
        session.show_info = false;
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Statistics grid
// ---------------------------------------------------------------------------

/// Label/value rows of the statistics panel, values already formatted.
pub fn stat_rows(view: &ViewModel) -> [(&'static str, String); 7] {
    let s = view.stats();
    [
        ("Mean", format_number(s.mean)),
        ("Median", format_number(s.median)),
        ("Min", format_number(s.min)),
        ("Max", format_number(s.max)),
        ("Range", format_number(s.range)),
        ("Std Dev", format_number(s.standard_deviation)),
        ("Count", format_number(s.count as f64)),
    ]
}

pub fn stats_panel(ui: &mut Ui, view: &ViewModel) {
    ui.heading(format!("{} Statistics", view.formatted_title()));
    egui::Grid::new("stats_grid")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in stat_rows(view) {
                ui.label(label);
                ui.strong(value);
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(app: &mut DashboardApp) {
    let file = rfd::FileDialog::new()
        .set_title("Open sector data")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                app.controller.load_dataset(dataset);
                app.session.status_message = None;
            }
            Err(e) => app.report_error("Loading", &e),
        }
    }
}

fn export_all_dialog(app: &mut DashboardApp) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(export::ALL_SECTORS_FILE_NAME)
        .add_filter("CSV Files", &["csv"])
        .save_file()
    else {
        return;
    };

    let dataset = app.controller.dataset();
    let result = export::export_to_file(&path, |f| export::write_all_sectors_csv(f, dataset));
    if let Err(e) = result {
        app.report_error("Export", &e);
    }
}
