//! monkey-core: record types, data sources, and the cached catalog service.
//!
//! The [`MonkeyCatalog`] lazily loads records from a swappable [`MonkeyDataSource`],
//! serves them from an immutable snapshot, and counts how often each record is
//! returned by random selection.

mod catalog;
mod data;
mod error;
mod model;
mod shared;
mod source;

pub use catalog::MonkeyCatalog;
pub use data::seed_monkeys;
pub use error::{CatalogError, Result};
pub use model::{ConservationStatus, Monkey, MonkeyRecord, WeightRange};
pub use shared::{DirectoryConfig, DEFAULT_CONFIG_PATH, DEFAULT_DESCRIPTION_WIDTH};
pub use source::{
    build_data_source, DataSourceKind, McpMonkeyDataSource, MonkeyDataSource, SeedMonkeyDataSource,
};

/// Re-exported so callers can cancel loads without depending on tokio-util directly.
pub use tokio_util::sync::CancellationToken;
