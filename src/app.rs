use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;

use crate::data::model::SectorDataset;
use crate::export::{self, SortDirection};
use crate::state::DashboardController;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// Session state that never affects statistics
// ---------------------------------------------------------------------------

/// Presentation-only state: table ordering, banners, pending exports.
#[derive(Default)]
pub struct Session {
    /// Order of the data table and of its CSV export.
    pub sort_direction: SortDirection,

    /// Whether the "about" banner is open.
    pub show_info: bool,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Screen rect of the primary chart in the last frame (for PNG export).
    pub chart_rect: Option<egui::Rect>,

    /// Destination of a chart PNG waiting for its screenshot.
    pub pending_chart_export: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub controller: DashboardController,
    pub session: Session,
}

impl DashboardApp {
    pub fn new(dataset: SectorDataset) -> Self {
        Self {
            controller: DashboardController::new(dataset),
            session: Session::default(),
        }
    }

    /// Report a failed user action in the top bar and the log.
    pub fn report_error(&mut self, action: &str, err: &anyhow::Error) {
        log::error!("{action} failed: {err:#}");
        self.session.status_message = Some(format!("{action} failed: {err:#}"));
    }

    /// Pick up the screenshot requested by "Export Chart" and save the
    /// chart area as PNG.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.session.pending_chart_export.is_none() {
            return;
        }

        let mut screenshot: Option<Arc<egui::ColorImage>> = None;
        ctx.input(|i| {
            for event in &i.raw.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    screenshot = Some(image.clone());
                }
            }
        });

        let Some(image) = screenshot else {
            return;
        };
        let Some(path) = self.session.pending_chart_export.take() else {
            return;
        };

        let (rgba, width, height) =
            crop_rgba(&image, self.session.chart_rect, ctx.pixels_per_point());
        match export::save_png(&path, width, height, rgba) {
            Ok(()) => self.session.status_message = None,
            Err(e) => self.report_error("Chart export", &e),
        }
    }
}

/// Crop a screenshot to `rect` (in points), returning RGBA bytes and size.
fn crop_rgba(
    image: &egui::ColorImage,
    rect: Option<egui::Rect>,
    pixels_per_point: f32,
) -> (Vec<u8>, u32, u32) {
    let full_w = image.width();
    let full_h = image.height();

    let (x0, y0, x1, y1) = match rect {
        Some(r) => (
            ((r.left() * pixels_per_point) as usize).min(full_w),
            ((r.top() * pixels_per_point) as usize).min(full_h),
            ((r.right() * pixels_per_point).ceil() as usize).min(full_w),
            ((r.bottom() * pixels_per_point).ceil() as usize).min(full_h),
        ),
        None => (0, 0, full_w, full_h),
    };

    let width = x1.saturating_sub(x0);
    let height = y1.saturating_sub(y0);
    let mut rgba = Vec::with_capacity(width * height * 4);
    for row in y0..y1 {
        for col in x0..x1 {
            let c = image.pixels[row * full_w + col];
            rgba.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
        }
    }
    (rgba, width as u32, height as u32)
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, self);
        });

        if self.session.show_info {
            egui::TopBottomPanel::top("info_panel").show(ctx, |ui| {
                panels::info_panel(ui, &mut self.session);
            });
        }

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("controls_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, self);
            });

        // ---- Central panel: charts, statistics, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::chart_section(ui, self);
                    ui.add_space(12.0);
                    panels::stats_panel(ui, self.controller.view());
                    ui.add_space(12.0);
                    plot::comparison_section(ui, &self.controller);
                    ui.add_space(12.0);
                    table::data_table(ui, self);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(w: usize, h: usize) -> egui::ColorImage {
        let mut img = egui::ColorImage::new([w, h], egui::Color32::BLACK);
        img.pixels = (0..w * h)
            .map(|i| egui::Color32::from_rgb(i as u8, 0, 0))
            .collect();
        img
    }

    #[test]
    fn crop_without_rect_keeps_everything() {
        let (rgba, w, h) = crop_rgba(&image(3, 2), None, 1.0);
        assert_eq!((w, h), (3, 2));
        assert_eq!(rgba.len(), 3 * 2 * 4);
    }

    #[test]
    fn crop_to_rect_scales_by_pixels_per_point() {
        let rect = egui::Rect::from_min_max(egui::pos2(1.0, 0.0), egui::pos2(2.0, 1.0));
        let (rgba, w, h) = crop_rgba(&image(6, 4), Some(rect), 2.0);
        assert_eq!((w, h), (2, 2));
        // first cropped pixel is column 2 of row 0
        assert_eq!(rgba[0], 2);
        // first pixel of the second cropped row is column 2 of row 1
        assert_eq!(rgba[8], 8);
    }

    #[test]
    fn crop_clamps_to_image() {
        let rect = egui::Rect::from_min_max(egui::pos2(2.0, 2.0), egui::pos2(50.0, 50.0));
        let (_, w, h) = crop_rgba(&image(4, 4), Some(rect), 1.0);
        assert_eq!((w, h), (2, 2));
    }
}
