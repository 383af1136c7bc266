use tokio_util::sync::CancellationToken;

use crate::data::seed_monkeys;
use crate::error::{CatalogError, Result};
use crate::model::MonkeyRecord;
use crate::source::MonkeyDataSource;

const SOURCE_NAME: &str = "seed";

/// Maps the compiled-in seed list to extended records. Only the description is carried
/// over; every other optional field stays absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedMonkeyDataSource;

impl SeedMonkeyDataSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl MonkeyDataSource for SeedMonkeyDataSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<MonkeyRecord>> {
        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }
        let records = seed_monkeys()
            .into_iter()
            .map(|m| {
                MonkeyRecord::new(m.name, m.scientific_name, m.region)
                    .map(|r| r.with_description(m.description))
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(target: "monkey::source", count = records.len(), "seed records mapped");
        Ok(records)
    }
}
