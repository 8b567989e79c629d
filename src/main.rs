mod app;
mod color;
mod data;
mod error;
mod export;
mod format;
mod labels;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use app::DashboardApp;
use data::model::SectorDataset;
use eframe::egui;

/// Dataset named on the command line, or the built-in demo data.
fn initial_dataset() -> Result<SectorDataset> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => data::loader::load_file(&path),
        None => {
            log::info!("No dataset given, using built-in demo data");
            Ok(data::builtin::demo_dataset()?)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let dataset = initial_dataset()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sector Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard: {e}"))
}
