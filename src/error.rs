use thiserror::Error;

/// Contract violations raised by the dataset and selection layers.
///
/// File-level failures (I/O, malformed input) travel as `anyhow::Error`
/// with context instead; these variants are the ones callers can match on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("unknown sector '{0}'")]
    UnknownSector(String),

    #[error("dataset contains no sectors")]
    EmptyDataset,

    #[error("sector '{0}' appears more than once")]
    DuplicateSector(String),
}
