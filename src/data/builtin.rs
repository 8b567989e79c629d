use super::model::SectorDataset;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Demo dataset shown when no file is given on the command line
// ---------------------------------------------------------------------------

const DEMO_SECTORS: &[(&str, &[f64])] = &[
    (
        "manufacturing_output_set1",
        &[
            0.4523, 0.5172, 0.3891, 0.6045, 0.4788, 0.5531, 0.4102, 0.4967, 0.5814, 0.4379,
            0.5246, 0.4655, 0.3987, 0.5703, 0.4431,
        ],
    ),
    (
        "manufacturing_output_set2",
        &[
            0.6112, 0.5874, 0.6433, 0.5521, 0.6098, 0.6745, 0.5902, 0.6281, 0.5667, 0.6390,
            0.6014, 0.5788, 0.6552, 0.6173, 0.5936,
        ],
    ),
    (
        "manufacturing_output_set3",
        &[
            0.3345, 0.2987, 0.3612, 0.3178, 0.2854, 0.3491, 0.3020, 0.3267, 0.3733, 0.2919,
            0.3398, 0.3105, 0.3556, 0.2799, 0.3214,
        ],
    ),
    (
        "energy_consumption",
        &[
            1245.0, 1310.5, 1198.2, 1402.7, 1356.1, 1287.9, 1221.4, 1379.8, 1333.6, 1264.3,
            1418.2, 1302.0, 1249.7, 1388.5, 1296.4,
        ],
    ),
    (
        "agricultural_yield",
        &[
            42.7, 38.9, 45.2, 40.1, 44.6, 39.8, 41.3, 46.0, 37.5, 43.9, 40.8, 44.1, 39.2, 42.0,
            45.7,
        ],
    ),
    (
        "chemical_emissions",
        &[
            0.00042, 0.00057, 0.00038, 0.00061, 0.00049, 0.00053, 0.00044, 0.00058, 0.00036,
            0.00051, 0.00047, 0.00055, 0.00040, 0.00059, 0.00046,
        ],
    ),
    (
        "logistics_delay_index",
        &[
            0.062, 0.048, 0.071, 0.055, 0.083, 0.059, 0.044, 0.067, 0.076, 0.052, 0.058, 0.069,
            0.047, 0.081, 0.063,
        ],
    ),
];

/// Fixed in-memory dataset covering every formatting band.
pub fn demo_dataset() -> Result<SectorDataset, DashboardError> {
    SectorDataset::from_sectors(
        DEMO_SECTORS
            .iter()
            .map(|(key, values)| (key.to_string(), values.to_vec())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_dataset_is_ordered_and_complete() {
        let ds = demo_dataset().unwrap();
        assert_eq!(ds.len(), DEMO_SECTORS.len());
        assert_eq!(ds.first_key(), "manufacturing_output_set1");
        assert!(ds.iter().all(|s| s.values.len() == 15));
    }
}
