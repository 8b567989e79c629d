use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Builder, ListBuilder, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Sector profile: `(key, base level, trend per step, seasonal amplitude, noise)`.
const PROFILES: [(&str, f64, f64, f64, f64); 8] = [
    ("steel_production_set1", 420.0, 3.5, 25.0, 8.0),
    ("steel_production_set2", 395.0, 2.0, 30.0, 12.0),
    ("textile_exports_set1", 86.0, -0.8, 6.0, 2.5),
    ("textile_exports_set2", 91.0, -0.2, 4.0, 3.0),
    ("power_grid_load", 1850.0, 12.0, 140.0, 35.0),
    ("water_quality_index", 0.72, 0.004, 0.05, 0.02),
    ("semiconductor_yield", 0.0045, 0.00002, 0.0004, 0.0002),
    ("port_throughput", 12500.0, -40.0, 900.0, 300.0),
];

const POINTS_PER_SECTOR: usize = 24;
const SEASON_LENGTH: f64 = 12.0;

fn generate_series(profile: (&str, f64, f64, f64, f64), rng: &mut SimpleRng) -> Vec<f64> {
    let (_, base, trend, amplitude, noise) = profile;
    (0..POINTS_PER_SECTOR)
        .map(|i| {
            let t = i as f64;
            let seasonal = amplitude * (2.0 * std::f64::consts::PI * t / SEASON_LENGTH).sin();
            base + trend * t + seasonal + rng.gauss(0.0, noise)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_sectors.parquet".to_string());

    let mut rng = SimpleRng::new(42);

    let mut values_builder = ListBuilder::new(Float64Builder::new());
    for profile in PROFILES {
        let series = generate_series(profile, &mut rng);
        values_builder.values().append_slice(&series);
        values_builder.append(true);
    }
    let values_array = values_builder.finish();
    let sector_array = StringArray::from(PROFILES.iter().map(|p| p.0).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("sector", DataType::Utf8, false),
        Field::new(
            "values",
            DataType::List(Arc::new(Field::new("item", DataType::Float64, true))),
            false,
        ),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(sector_array), Arc::new(values_array)],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;

    println!(
        "Wrote {} sectors ({POINTS_PER_SECTOR} values each) to {output_path}",
        PROFILES.len()
    );
    Ok(())
}
