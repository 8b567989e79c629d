/// Axis labels for a chart of `n` values: `"Data Point 1"` … `"Data Point n"`.
pub fn generate_labels(n: usize) -> Vec<String> {
    indexed_labels("Data Point ", n)
}

/// `n` labels made of `prefix` followed by a 1-based index.
pub fn indexed_labels(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{prefix}{i}")).collect()
}
