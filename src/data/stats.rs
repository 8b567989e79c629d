// ---------------------------------------------------------------------------
// Descriptive statistics for a single sector
// ---------------------------------------------------------------------------

/// Summary statistics of one sample.
///
/// All fields are zero for an empty sample. `range` is always `max - min`
/// and `standard_deviation` is the population standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectorStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub standard_deviation: f64,
    pub count: usize,
}

/// Compute [`SectorStats`] for `sample`.
///
/// The caller's slice is left untouched; a sorted copy is used internally.
pub fn compute_stats(sample: &[f64]) -> SectorStats {
    if sample.is_empty() {
        return SectorStats::default();
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let n = count as f64;
    let min = sorted[0];
    let max = sorted[count - 1];
    let mean = sorted.iter().sum::<f64>() / n;

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    SectorStats {
        mean,
        median,
        min,
        max,
        range: max - min,
        standard_deviation: variance.sqrt(),
        count,
    }
}

// ---------------------------------------------------------------------------
// Box plot summary
// ---------------------------------------------------------------------------

/// Five-number summary drawn by the box plot.
///
/// The quartiles are midpoints between the median and the extremes, not
/// sample quartiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

impl From<&SectorStats> for BoxSummary {
    fn from(stats: &SectorStats) -> Self {
        BoxSummary {
            lower_whisker: stats.min,
            q1: stats.min + (stats.median - stats.min) / 2.0,
            median: stats.median,
            q3: stats.median + (stats.max - stats.median) / 2.0,
            upper_whisker: stats.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn samples() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0],
            vec![-3.5, 10.0, 0.25, 7.0, 7.0],
            vec![0.001, 0.002, 0.0005],
            vec![1200.0, -40.0, 3.0, 99.5, 0.0, 12.0],
        ]
    }

    #[test]
    fn empty_sample_is_all_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(
            stats,
            SectorStats {
                mean: 0.0,
                median: 0.0,
                min: 0.0,
                max: 0.0,
                range: 0.0,
                standard_deviation: 0.0,
                count: 0,
            }
        );
    }

    #[test]
    fn four_values() {
        let s = compute_stats(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert_eq!(s.range, 3.0);
        assert!((s.standard_deviation - 1.25f64.sqrt()).abs() < EPS);
        assert_eq!(s.count, 4);
    }

    #[test]
    fn single_value() {
        let s = compute_stats(&[5.0]);
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.median, 5.0);
        assert_eq!(s.min, 5.0);
        assert_eq!(s.max, 5.0);
        assert_eq!(s.range, 0.0);
        assert_eq!(s.standard_deviation, 0.0);
        assert_eq!(s.count, 1);
    }

    #[test]
    fn odd_count_takes_center_after_sort() {
        let s = compute_stats(&[9.0, 1.0, 4.0]);
        assert_eq!(s.median, 4.0);
    }

    #[test]
    fn population_not_sample_deviation() {
        // population sd of [2,4,4,4,5,5,7,9] is exactly 2
        let s = compute_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.standard_deviation - 2.0).abs() < EPS);
    }

    #[test]
    fn input_is_not_reordered() {
        let sample = vec![3.0, 1.0, 2.0];
        let _ = compute_stats(&sample);
        assert_eq!(sample, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn ordering_bounds_hold() {
        for sample in samples() {
            let s = compute_stats(&sample);
            assert!(s.min <= s.mean + EPS && s.mean <= s.max + EPS, "{sample:?}");
            assert!(s.min <= s.median && s.median <= s.max, "{sample:?}");
            assert_eq!(s.range, s.max - s.min);
            assert!(s.range >= 0.0);
            assert!(s.standard_deviation >= 0.0);
            assert_eq!(s.count, sample.len());
        }
    }

    #[test]
    fn permutation_invariant() {
        for sample in samples() {
            let base = compute_stats(&sample);

            let mut reversed = sample.clone();
            reversed.reverse();
            let mut rotated = sample.clone();
            rotated.rotate_left(sample.len() / 2);

            for perm in [reversed, rotated] {
                let s = compute_stats(&perm);
                assert_eq!(s, base, "{perm:?}");
            }
        }
    }

    #[test]
    fn box_summary_uses_midpoints() {
        let stats = compute_stats(&[0.0, 2.0, 10.0]);
        let b = BoxSummary::from(&stats);
        assert_eq!(b.lower_whisker, 0.0);
        assert_eq!(b.q1, 1.0);
        assert_eq!(b.median, 2.0);
        assert_eq!(b.q3, 6.0);
        assert_eq!(b.upper_whisker, 10.0);
    }
}
