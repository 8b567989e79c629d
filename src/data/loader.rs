use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, LargeListArray, ListArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::SectorDataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sector dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `{ "sector_key": [1.0, 2.0, ...], ... }`
/// * `.csv`     – long format with `Sector` and `Value` columns
/// * `.parquet` – one row per sector: `sector` string, `values` float list
///
/// Sector order always follows the file.
pub fn load_file(path: &Path) -> Result<SectorDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!("Read {} sectors from {}", dataset.len(), path.display());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (key order is kept):
///
/// ```json
/// {
///   "manufacturing_output_set1": [0.12, 0.14, ...],
///   "energy_use": [120.5, 98.0, ...]
/// }
/// ```
fn load_json(path: &Path) -> Result<SectorDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let object = root
        .as_object()
        .context("Expected top-level JSON object of sector → values")?;

    let mut sectors = Vec::with_capacity(object.len());
    for (key, val) in object {
        let values = json_array_to_f64(val, key)?;
        sectors.push((key.clone(), values));
    }

    Ok(SectorDataset::from_sectors(sectors)?)
}

fn json_array_to_f64(val: &JsonValue, sector: &str) -> Result<Vec<f64>> {
    let arr = val
        .as_array()
        .with_context(|| format!("Sector '{sector}': expected an array of numbers"))?;

    arr.iter()
        .enumerate()
        .map(|(j, v)| {
            v.as_f64()
                .with_context(|| format!("Sector '{sector}', value {j}: not a number"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming a `Sector` and a `Value` column (any case,
/// any position), then one row per value. This is the layout written by
/// "Export all data", so exports load back unchanged.
fn load_csv(path: &Path) -> Result<SectorDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let sector_idx = column("Sector")?;
    let value_idx = column("Value")?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let sector = record.get(sector_idx).unwrap_or("").trim();
        if sector.is_empty() {
            bail!("CSV row {row_no}: empty sector name");
        }
        let raw = record.get(value_idx).unwrap_or("").trim();
        let value = raw
            .parse::<f64>()
            .with_context(|| format!("CSV row {row_no}: '{raw}' is not a number"))?;

        rows.push((sector.to_string(), value));
    }

    Ok(SectorDataset::from_rows(rows)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing sector data.
///
/// Expected schema:
/// - `sector`: Utf8 or LargeUtf8 – sector key
/// - `values`: List<Float64> or LargeList<Float64> (Float32 also accepted)
///
/// Other columns are ignored. A sector split over several rows is
/// concatenated in row order.
fn load_parquet(path: &Path) -> Result<SectorDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut chunks = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let sector_idx = schema
            .index_of("sector")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'sector' column"))?;
        let values_idx = schema
            .index_of("values")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'values' column"))?;

        let sector_col = batch.column(sector_idx);
        let values_col = batch.column(values_idx);

        for row in 0..batch.num_rows() {
            let sector = extract_string(sector_col, row)
                .with_context(|| format!("Row {row}: failed to read 'sector'"))?;
            let values = extract_f64_list(values_col, row)
                .with_context(|| format!("Row {row}: failed to read 'values'"))?;

            chunks.push((sector, values));
        }
    }

    Ok(SectorDataset::from_chunks(chunks)?)
}

// -- Parquet / Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null sector name");
    }
    let value = match col.data_type() {
        DataType::Utf8 => col
            .as_string_opt::<i32>()
            .context("expected StringArray")?
            .value(row),
        DataType::LargeUtf8 => col
            .as_string_opt::<i64>()
            .context("expected LargeStringArray")?
            .value(row),
        other => bail!("Expected Utf8 column, got {other:?}"),
    };
    Ok(value.to_string())
}

/// Extract a `Vec<f64>` from a List or LargeList column at the given row.
fn extract_f64_list(col: &Arc<dyn Array>, row: usize) -> Result<Vec<f64>> {
    if col.is_null(row) {
        bail!("null value in list column");
    }

    let values_array = match col.data_type() {
        DataType::List(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<ListArray>()
                .context("expected ListArray")?;
            list_arr.value(row)
        }
        DataType::LargeList(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<LargeListArray>()
                .context("expected LargeListArray")?;
            list_arr.value(row)
        }
        other => bail!("Expected List or LargeList column, got {other:?}"),
    };

    if values_array.null_count() > 0 {
        bail!("list contains null values");
    }

    // The inner array can be Float64 or Float32
    if let Some(f64_arr) = values_array.as_any().downcast_ref::<Float64Array>() {
        Ok(f64_arr.values().iter().copied().collect())
    } else if let Some(f32_arr) = values_array.as_any().downcast_ref::<Float32Array>() {
        Ok(f32_arr.values().iter().map(|&v| v as f64).collect())
    } else {
        bail!(
            "List inner type is {:?}, expected Float64 or Float32",
            values_array.data_type()
        )
    }
}
