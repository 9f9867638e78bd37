//! Trip time and distance estimation.
//!
//! Turns the raw samples held for one station pair into the two numbers a
//! recommendation carries: a skill-adjusted ETA in minutes and a mean
//! great-circle distance in kilometres.

mod distance;
mod duration;

pub use distance::{EARTH_RADIUS_KM, estimate_distance, haversine_km};
pub use duration::{EstimateError, SECONDS_PER_MINUTE, estimate_eta, mean_eta};
