//! Data layer: core types, loading, and statistics.
//!
//! Architecture:
//! ```text
//!  .json / .csv / .parquet      built-in demo
//!        │                           │
//!        ▼                           │
//!   ┌──────────┐                     │
//!   │  loader   │  parse file ───────┤
//!   └──────────┘                     ▼
//!                            ┌───────────────┐
//!                            │ SectorDataset │  ordered key → Vec<f64>
//!                            └───────────────┘
//!                                    │
//!                                    ▼
//!                              ┌──────────┐
//!                              │  stats    │  sample → SectorStats
//!                              └──────────┘
//! ```

pub mod builtin;
pub mod loader;
pub mod model;
pub mod stats;
