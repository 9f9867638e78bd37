//! Historical trip data access.
//!
//! Trip records are ingested once from a bike-share CSV export and then
//! served read-only. The recommender talks to the data through the
//! [`TripSource`] trait so that the in-memory [`TripStore`], the caching
//! wrapper, and test doubles are interchangeable.

mod aggregate;
mod error;
mod load;
mod memory;
mod source;

pub use aggregate::DestinationAggregate;
pub use error::{MalformedRecord, StoreError};
pub use load::{LoadedTrips, load_trips, load_trips_from_path};
pub use memory::TripStore;
pub use source::TripSource;
