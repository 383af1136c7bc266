//! Cached monkey catalog over a swappable data source.
//!
//! One mutex guards the snapshot, the active source, the pick counts and the loading
//! flag. The fetch itself runs without the lock; callers that arrive while a fetch is
//! in flight wait on [`Notify`] and re-check instead of fetching again, so at most one
//! fetch runs per invalidation cycle.

use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::futures::Notified;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::model::MonkeyRecord;
use crate::source::{MonkeyDataSource, SeedMonkeyDataSource};

const LOG_TARGET: &str = "monkey::catalog";

struct CatalogState {
    cache: Option<Arc<[MonkeyRecord]>>,
    source: Arc<dyn MonkeyDataSource>,
    pick_counts: HashMap<Uuid, u64>,
    loading: bool,
    /// Bumped on every invalidation; a fetch started under an older generation is stale.
    generation: u64,
}

impl CatalogState {
    fn reset(&mut self) {
        self.cache = None;
        self.pick_counts.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

enum Step<'a> {
    Hit(Arc<[MonkeyRecord]>),
    Wait(Notified<'a>),
    Fetch {
        source: Arc<dyn MonkeyDataSource>,
        generation: u64,
    },
}

/// Thread-safe catalog service. Share it behind an `Arc`; every instance is independent.
pub struct MonkeyCatalog {
    state: Mutex<CatalogState>,
    load_finished: Notify,
}

impl MonkeyCatalog {
    pub fn new(source: Arc<dyn MonkeyDataSource>) -> Self {
        Self {
            state: Mutex::new(CatalogState {
                cache: None,
                source,
                pick_counts: HashMap::new(),
                loading: false,
                generation: 0,
            }),
            load_finished: Notify::new(),
        }
    }

    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the data source and drops the cache and all pick counts.
    ///
    /// With `preload`, the new source is fetched before this returns, so the next
    /// [`get_all`](Self::get_all) is served from cache.
    pub async fn configure_data_source(
        &self,
        source: Arc<dyn MonkeyDataSource>,
        preload: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        {
            let mut state = self.state();
            tracing::info!(
                target: LOG_TARGET,
                from = state.source.name(),
                to = source.name(),
                preload,
                "configuring data source"
            );
            state.source = source;
            state.reset();
        }
        if preload {
            self.get_all(cancel).await?;
        }
        Ok(())
    }

    /// Name of the active data source.
    pub fn source_name(&self) -> String {
        self.state().source.name().to_string()
    }

    /// Whether a snapshot is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.state().cache.is_some()
    }

    /// Returns the cached snapshot, loading it first if needed.
    ///
    /// The returned slice is immutable and stays valid after a later invalidation.
    pub async fn get_all(&self, cancel: &CancellationToken) -> Result<Arc<[MonkeyRecord]>> {
        loop {
            let step = {
                let mut state = self.state();
                if let Some(cache) = &state.cache {
                    Step::Hit(Arc::clone(cache))
                } else if state.loading {
                    // Registered under the lock so the loader's notify_waiters cannot be missed.
                    Step::Wait(self.load_finished.notified())
                } else {
                    state.loading = true;
                    Step::Fetch {
                        source: Arc::clone(&state.source),
                        generation: state.generation,
                    }
                }
            };

            match step {
                Step::Hit(snapshot) => return Ok(snapshot),
                Step::Wait(notified) => {
                    tracing::debug!(target: LOG_TARGET, "waiting for in-flight load");
                    tokio::select! {
                        _ = notified => {}
                        _ = cancel.cancelled() => return Err(CatalogError::Cancelled),
                    }
                }
                Step::Fetch { source, generation } => {
                    if let Some(snapshot) = self.load(source, generation, cancel).await? {
                        return Ok(snapshot);
                    }
                }
            }
        }
    }

    /// Runs one fetch. Returns `Ok(None)` when the catalog was invalidated or
    /// reconfigured while the fetch was in flight and the result was discarded.
    async fn load(
        &self,
        source: Arc<dyn MonkeyDataSource>,
        generation: u64,
        cancel: &CancellationToken,
    ) -> Result<Option<Arc<[MonkeyRecord]>>> {
        let _loading = LoadingGuard { catalog: self };
        tracing::info!(target: LOG_TARGET, source = source.name(), "loading catalog");

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CatalogError::Cancelled),
            res = source.fetch_all(cancel) => res,
        };
        let records = match fetched {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(target: LOG_TARGET, source = source.name(), "load failed: {}", e);
                return Err(e);
            }
        };

        let snapshot: Arc<[MonkeyRecord]> = Arc::from(records);
        let mut state = self.state();
        if state.generation != generation {
            tracing::warn!(
                target: LOG_TARGET,
                source = source.name(),
                "catalog changed during load; discarding {} records",
                snapshot.len()
            );
            return Ok(None);
        }
        tracing::info!(
            target: LOG_TARGET,
            source = source.name(),
            count = snapshot.len(),
            "catalog loaded"
        );
        state.cache = Some(Arc::clone(&snapshot));
        Ok(Some(snapshot))
    }

    /// First record whose common or scientific name equals `name`, ignoring case.
    /// A blank query returns `None` without touching the data source.
    pub async fn find_by_name(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<MonkeyRecord>> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let all = self.get_all(cancel).await?;
        Ok(all.iter().find(|m| m.matches_name(name)).cloned())
    }

    /// Picks a record uniformly at random and bumps its pick count.
    pub async fn get_random(&self, cancel: &CancellationToken) -> Result<MonkeyRecord> {
        loop {
            let all = self.get_all(cancel).await?;
            if let Some(picked) = self.pick_from(&all)? {
                return Ok(picked);
            }
        }
    }

    /// Picks from `snapshot` and counts the pick, or returns `Ok(None)` when `snapshot`
    /// is no longer the cached one so no stale id lands in the current count table.
    fn pick_from(&self, snapshot: &Arc<[MonkeyRecord]>) -> Result<Option<MonkeyRecord>> {
        let mut state = self.state();
        if !state
            .cache
            .as_ref()
            .is_some_and(|cache| Arc::ptr_eq(cache, snapshot))
        {
            tracing::debug!(target: LOG_TARGET, "catalog changed before pick; retrying");
            return Ok(None);
        }
        let picked = snapshot
            .choose(&mut rand::rng())
            .ok_or(CatalogError::EmptyData)?
            .clone();
        let count = state.pick_counts.entry(picked.id()).or_insert(0);
        *count += 1;
        tracing::debug!(
            target: LOG_TARGET,
            name = picked.common_name(),
            picks = *count,
            "random pick"
        );
        Ok(Some(picked))
    }

    /// How many times the record with `id` was returned by [`get_random`](Self::get_random).
    pub fn pick_count(&self, id: Uuid) -> u64 {
        self.state().pick_counts.get(&id).copied().unwrap_or(0)
    }

    /// Point-in-time copy of every pick count.
    pub fn pick_counts_snapshot(&self) -> HashMap<Uuid, u64> {
        self.state().pick_counts.clone()
    }

    /// Drops the cache and pick counts; the next read reloads from the source.
    pub fn invalidate(&self) {
        let mut state = self.state();
        state.reset();
        tracing::info!(target: LOG_TARGET, source = state.source.name(), "catalog invalidated");
    }
}

impl Default for MonkeyCatalog {
    fn default() -> Self {
        Self::new(Arc::new(SeedMonkeyDataSource::new()))
    }
}

/// Clears the loading flag and wakes waiters however the load ends, including when the
/// load future is dropped mid-fetch.
struct LoadingGuard<'a> {
    catalog: &'a MonkeyCatalog,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.catalog.state().loading = false;
        self.catalog.load_finished.notify_waiters();
    }
}
