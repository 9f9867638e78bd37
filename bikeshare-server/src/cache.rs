//! Caching layer for trip source queries.
//!
//! The recommender asks for the same start-station groupings repeatedly
//! (one per request, and popular stations dominate). This wraps any
//! [`TripSource`] in bounded caches keyed by query, so repeated requests skip
//! the scan. Only successful answers are cached; errors always reach the
//! caller and the next request retries the underlying source.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::trace;

use crate::domain::{CoordinatePair, Sex};
use crate::store::{DestinationAggregate, StoreError, TripSource};

/// Cache key for groupings: (start station, sex filter).
type GroupKey = (String, Option<Sex>);

/// Cache key for coordinate samples: (start station, end station).
type PairKey = (String, String);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Entries unused for this long are evicted.
    pub time_to_idle: Duration,

    /// Maximum number of cached entries per query kind.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            time_to_idle: Duration::from_secs(30 * 60),
            max_capacity: 1000,
        }
    }
}

/// Trip source with caching.
///
/// Wraps a `TripSource` and caches groupings and coordinate samples.
pub struct CachedTripSource<S> {
    source: S,
    groups: MokaCache<GroupKey, Arc<DestinationAggregate>>,
    coordinates: MokaCache<PairKey, Arc<Vec<CoordinatePair>>>,
}

impl<S: TripSource> CachedTripSource<S> {
    /// Create a new cached source.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        Self {
            source,
            groups: build_cache(config),
            coordinates: build_cache(config),
        }
    }

    /// Access the underlying source for operations that bypass cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get cache statistics: total entries across both caches.
    ///
    /// Eviction and insertion bookkeeping is applied lazily, so the count
    /// may lag recent activity.
    pub fn cache_entry_count(&self) -> u64 {
        self.groups.entry_count() + self.coordinates.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.groups.invalidate_all();
        self.coordinates.invalidate_all();
    }

    #[cfg(test)]
    fn run_pending_tasks(&self) {
        self.groups.run_pending_tasks();
        self.coordinates.run_pending_tasks();
    }
}

fn build_cache<K, V>(config: &CacheConfig) -> MokaCache<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    MokaCache::builder()
        .time_to_idle(config.time_to_idle)
        .max_capacity(config.max_capacity)
        .build()
}

impl<S: TripSource> TripSource for CachedTripSource<S> {
    fn endpoints_by_start(
        &self,
        start: &str,
        sex: Option<Sex>,
    ) -> Result<DestinationAggregate, StoreError> {
        let key = (start.to_string(), sex);

        // Try cache first
        if let Some(cached) = self.groups.get(&key) {
            trace!(start, ?sex, "grouping cache hit");
            return Ok(cached.as_ref().clone());
        }

        let aggregate = self.source.endpoints_by_start(start, sex)?;
        self.groups.insert(key, Arc::new(aggregate.clone()));

        Ok(aggregate)
    }

    fn coordinates_for(&self, start: &str, end: &str) -> Result<Vec<CoordinatePair>, StoreError> {
        let key = (start.to_string(), end.to_string());

        if let Some(cached) = self.coordinates.get(&key) {
            trace!(start, end, "coordinate cache hit");
            return Ok(cached.as_ref().clone());
        }

        let pairs = self.source.coordinates_for(start, end)?;
        self.coordinates.insert(key, Arc::new(pairs.clone()));

        Ok(pairs)
    }

    fn start_stations(&self) -> Result<Vec<String>, StoreError> {
        self.source.start_stations()
    }
}
