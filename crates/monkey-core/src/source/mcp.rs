use tokio_util::sync::CancellationToken;

use crate::error::{CatalogError, Result};
use crate::model::MonkeyRecord;
use crate::source::MonkeyDataSource;

const SOURCE_NAME: &str = "mcp";

/// Monkey MCP server source. The protocol client is not wired yet, so every fetch fails
/// with [`CatalogError::SourceUnavailable`] and the catalog stays empty.
#[derive(Debug, Clone, Default)]
pub struct McpMonkeyDataSource {
    endpoint: Option<String>,
}

impl McpMonkeyDataSource {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[async_trait::async_trait]
impl MonkeyDataSource for McpMonkeyDataSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<MonkeyRecord>> {
        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }
        let message = match self.endpoint.as_deref() {
            Some(endpoint) => format!("MCP client for {endpoint} is not implemented"),
            None => "MCP client is not implemented and no endpoint is configured".to_string(),
        };
        tracing::warn!(target: "monkey::source", "{}", message);
        Err(CatalogError::SourceUnavailable(message))
    }
}
