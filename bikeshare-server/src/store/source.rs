//! The data-source abstraction used by the recommender.

use crate::domain::{CoordinatePair, Sex};

use super::{DestinationAggregate, StoreError};

/// Trait for answering the recommender's trip queries.
///
/// This abstraction allows the recommender to run against the in-memory
/// store, a cached wrapper, or mock data in tests. Implementations must be
/// safe to query concurrently; any per-query handle is acquired and released
/// inside each call.
pub trait TripSource {
    /// Durations of trips leaving `start`, grouped by destination.
    ///
    /// With `sex = None` every trip matches. An unknown station yields an
    /// empty aggregate, not an error.
    fn endpoints_by_start(
        &self,
        start: &str,
        sex: Option<Sex>,
    ) -> Result<DestinationAggregate, StoreError>;

    /// Coordinates of every trip from `start` to `end`, one pair per trip.
    ///
    /// Pairs with missing components are included as-is.
    fn coordinates_for(&self, start: &str, end: &str) -> Result<Vec<CoordinatePair>, StoreError>;

    /// All distinct start station names, sorted ascending.
    fn start_stations(&self) -> Result<Vec<String>, StoreError>;
}
