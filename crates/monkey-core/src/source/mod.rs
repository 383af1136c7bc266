//! Pluggable suppliers of monkey records.
//!
//! | Kind   | Type                     | Behaviour                                     |
//! |--------|--------------------------|-----------------------------------------------|
//! | `seed` | [`SeedMonkeyDataSource`] | Compiled-in six monkeys, no I/O               |
//! | `mcp`  | [`McpMonkeyDataSource`]  | Placeholder for a Monkey MCP server client    |

mod mcp;
mod seed;

pub use mcp::McpMonkeyDataSource;
pub use seed::SeedMonkeyDataSource;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::{CatalogError, Result};
use crate::model::MonkeyRecord;
use crate::shared::DirectoryConfig;

/// Supplies the full record list to the catalog.
#[async_trait::async_trait]
pub trait MonkeyDataSource: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Fetches every record. Implementations should return [`CatalogError::Cancelled`]
    /// once `cancel` fires.
    async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<MonkeyRecord>>;
}

/// Data source selector used by configuration. Config values go through [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DataSourceKind {
    #[default]
    Seed,
    Mcp,
}

impl DataSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Mcp => "mcp",
        }
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSourceKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seed" => Ok(Self::Seed),
            "mcp" => Ok(Self::Mcp),
            other => Err(CatalogError::InvalidArgument(format!(
                "unknown data source: {other:?} (expected \"seed\" or \"mcp\")"
            ))),
        }
    }
}

impl TryFrom<String> for DataSourceKind {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Builds the data source selected by `config`.
pub fn build_data_source(config: &DirectoryConfig) -> Arc<dyn MonkeyDataSource> {
    match config.source {
        DataSourceKind::Seed => Arc::new(SeedMonkeyDataSource::new()),
        DataSourceKind::Mcp => Arc::new(McpMonkeyDataSource::new(config.mcp_endpoint.clone())),
    }
}
