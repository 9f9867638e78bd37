//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedTripSource;
use crate::recommend::RecommenderConfig;
use crate::store::TripStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached trip store
    pub trips: Arc<CachedTripSource<TripStore>>,

    /// Recommendation engine configuration
    pub config: Arc<RecommenderConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(trips: CachedTripSource<TripStore>, config: RecommenderConfig) -> Self {
        Self {
            trips: Arc::new(trips),
            config: Arc::new(config),
        }
    }
}
