//! Destination recommendation engine.
//!
//! This module answers: "I'm at this station and want to ride for between
//! `time_low` and `time_high` minutes - where should I go?"
//!
//! For each destination previously reached from the start station, the
//! engine estimates a skill-adjusted trip time, keeps the destinations whose
//! estimate lands inside the requested window, attaches a mean distance, and
//! ranks the survivors by closeness to the middle of the window.

mod config;
mod rank;
mod recommender;

pub use config::{RecommenderConfig, SampleFallback};
pub use rank::{rank_by_midpoint, truncate};
pub use recommender::{RecommendError, RecommendRequest, Recommendation, Recommender};
