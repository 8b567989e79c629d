use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colour sets
// ---------------------------------------------------------------------------

/// Stroke colours of the chart series, cycled by series index.
const STROKES: [(u8, u8, u8); 8] = [
    (0x25, 0x63, 0xEB), // blue
    (0x0D, 0x94, 0x88), // teal
    (0xD9, 0x77, 0x06), // amber
    (0xDB, 0x27, 0x77), // pink
    (0x4F, 0x46, 0xE5), // indigo
    (0x05, 0x96, 0x69), // emerald
    (0x7C, 0x3A, 0xED), // violet
    (0xE1, 0x1D, 0x48), // rose
];

/// How much lighter the fill is than its stroke (HSL lightness delta).
const FILL_LIGHTEN: f32 = 0.15;

/// Fill and stroke used to draw one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartColors {
    pub fill: Color32,
    pub stroke: Color32,
}

/// Colour set for series `index`, wrapping after the last set.
pub fn chart_colors(index: usize) -> ChartColors {
    let (r, g, b) = STROKES[index % STROKES.len()];
    let stroke = Srgb::<u8>::new(r, g, b).into_format::<f32>();

    let mut hsl: Hsl = stroke.into_color();
    hsl.lightness = (hsl.lightness + FILL_LIGHTEN).min(1.0);
    let fill: Srgb = hsl.into_color();

    ChartColors {
        fill: to_color32(fill),
        stroke: Color32::from_rgb(r, g, b),
    }
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb = rgb.into_format::<u8>();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
