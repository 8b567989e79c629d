use std::collections::HashMap;

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Sector – one named sample
// ---------------------------------------------------------------------------

/// A single named sector and its ordered sample values.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub key: String,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// SectorDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Ordered mapping of sector key → sample.
///
/// Sectors are kept in source order so that "the first sector" is stable
/// regardless of how the dataset was produced. The dataset is never mutated
/// once built; a new file replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorDataset {
    sectors: Vec<Sector>,
    index: HashMap<String, usize>,
}

impl SectorDataset {
    /// Build a dataset from `(key, values)` pairs, keeping their order.
    ///
    /// Fails on an empty list or a repeated key.
    pub fn from_sectors<I>(sectors: I) -> Result<Self, DashboardError>
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let mut out = Vec::new();
        let mut index = HashMap::new();

        for (key, values) in sectors {
            if index.contains_key(&key) {
                return Err(DashboardError::DuplicateSector(key));
            }
            index.insert(key.clone(), out.len());
            out.push(Sector { key, values });
        }

        if out.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }

        Ok(SectorDataset {
            sectors: out,
            index,
        })
    }

    /// Build a dataset from `(key, values)` chunks where a key may repeat.
    ///
    /// Chunks for the same key are concatenated in order; sectors are
    /// ordered by their first appearance. An empty chunk still creates its
    /// sector.
    pub fn from_chunks<I>(chunks: I) -> Result<Self, DashboardError>
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let mut order: Vec<(String, Vec<f64>)> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (key, values) in chunks {
            match seen.get(&key) {
                Some(&i) => order[i].1.extend(values),
                None => {
                    seen.insert(key.clone(), order.len());
                    order.push((key, values));
                }
            }
        }

        Self::from_sectors(order)
    }

    /// Build a dataset from long-format `(key, value)` rows.
    pub fn from_rows<I>(rows: I) -> Result<Self, DashboardError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self::from_chunks(rows.into_iter().map(|(key, value)| (key, vec![value])))
    }

    /// Key of the first sector in dataset order.
    pub fn first_key(&self) -> &str {
        // from_sectors rejects empty datasets
        &self.sectors[0].key
    }

    /// Sample of a sector, if the key exists.
    pub fn values(&self, key: &str) -> Option<&[f64]> {
        self.index
            .get(key)
            .map(|&i| self.sectors[i].values.as_slice())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Sector keys in dataset order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|s| s.key.as_str())
    }

    /// All sectors in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.iter()
    }

    /// Number of sectors.
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Total number of values across all sectors.
    pub fn value_count(&self) -> usize {
        self.sectors.iter().map(|s| s.values.len()).sum()
    }
}
