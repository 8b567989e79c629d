use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::SectorDataset;
use crate::state::ChartType;

// ---------------------------------------------------------------------------
// Table ordering
// ---------------------------------------------------------------------------

/// Sort direction of the data table, which the single-sector CSV follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Copy of `values` in table order.
pub fn sorted_values(values: &[f64], direction: SortDirection) -> Vec<f64> {
    let mut sorted = values.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(f64::total_cmp),
        SortDirection::Descending => sorted.sort_by(|a, b| b.total_cmp(a)),
    }
    sorted
}

// ---------------------------------------------------------------------------
// CSV writers
// ---------------------------------------------------------------------------

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Write one sector as `Index,Value` rows, 1-based, in `direction` order.
pub fn write_sector_csv<W: Write>(
    writer: W,
    values: &[f64],
    direction: SortDirection,
) -> Result<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(["Index", "Value"])?;
    for (i, value) in sorted_values(values, direction).iter().enumerate() {
        wtr.write_record([(i + 1).to_string(), value.to_string()])?;
    }
    wtr.flush().context("flushing sector CSV")?;
    Ok(())
}

/// Write every value of every sector as `Sector,Value` rows, in dataset order.
pub fn write_all_sectors_csv<W: Write>(writer: W, dataset: &SectorDataset) -> Result<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(["Sector", "Value"])?;
    for sector in dataset.iter() {
        for value in &sector.values {
            wtr.write_record([sector.key.as_str(), value.to_string().as_str()])?;
        }
    }
    wtr.flush().context("flushing dataset CSV")?;
    Ok(())
}

/// Create `path` and fill it with `write`.
pub fn export_to_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(std::fs::File) -> Result<()>,
{
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write(file).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// PNG
// ---------------------------------------------------------------------------

/// Save raw RGBA pixels as a PNG file.
pub fn save_png(path: &Path, width: u32, height: u32, rgba: Vec<u8>) -> Result<()> {
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .context("pixel buffer does not match image size")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("saving {}", path.display()))?;
    log::info!("Saved chart image to {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// File names
// ---------------------------------------------------------------------------

pub const ALL_SECTORS_FILE_NAME: &str = "sector_data_complete.csv";

/// Lowercase `title` and replace each whitespace run with a single `-`.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(c.to_lowercase());
            in_space = false;
        }
    }
    out
}

pub fn sector_csv_file_name(title: &str) -> String {
    format!("{}_data.csv", slugify(title))
}

pub fn chart_png_file_name(title: &str, chart_type: ChartType) -> String {
    format!("{}_{chart_type}_chart.png", slugify(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> SectorDataset {
        SectorDataset::from_sectors(vec![
            ("steel_set1".to_string(), vec![3.0, 1.5]),
            ("textiles".to_string(), vec![]),
            ("energy".to_string(), vec![0.25]),
        ])
        .unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sector_csv_follows_sort_order() {
        let values = [2.0, 10.0, -1.5];
        let asc = render(|b| write_sector_csv(b, &values, SortDirection::Ascending));
        assert_eq!(asc, "Index,Value\n1,-1.5\n2,2\n3,10\n");

        let desc = render(|b| write_sector_csv(b, &values, SortDirection::Descending));
        assert_eq!(desc, "Index,Value\n1,10\n2,2\n3,-1.5\n");
    }

    #[test]
    fn empty_sector_csv_is_header_only() {
        let out = render(|b| write_sector_csv(b, &[], SortDirection::Ascending));
        assert_eq!(out, "Index,Value\n");
    }

    #[test]
    fn all_sectors_csv_in_dataset_order() {
        let ds = dataset();
        let out = render(|b| write_all_sectors_csv(b, &ds));
        assert_eq!(out, "Sector,Value\nsteel_set1,3\nsteel_set1,1.5\nenergy,0.25\n");
    }

    #[test]
    fn toggling_direction() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn file_names() {
        assert_eq!(
            slugify("Manufacturing Output  (Set 1)"),
            "manufacturing-output-(set-1)"
        );
        assert_eq!(sector_csv_file_name("Retail Sales"), "retail-sales_data.csv");
        assert_eq!(
            chart_png_file_name("Retail Sales", ChartType::BoxPlot),
            "retail-sales_boxplot_chart.png"
        );
    }

    #[test]
    fn writes_files_and_pngs() {
        let dir = std::env::temp_dir()
            .join(format!("sector-dashboard-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let csv_path = dir.join(ALL_SECTORS_FILE_NAME);
        let ds = dataset();
        export_to_file(&csv_path, |f| write_all_sectors_csv(f, &ds)).unwrap();
        let text = std::fs::read_to_string(&csv_path).unwrap();
        assert!(text.starts_with("Sector,Value\n"));

        let png_path = dir.join("chart.png");
        save_png(&png_path, 2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        let img = image::open(&png_path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 1));

        assert!(save_png(&png_path, 4, 4, vec![0; 3]).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
