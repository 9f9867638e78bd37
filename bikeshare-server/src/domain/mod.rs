//! Domain types for the bike-share recommender.
//!
//! This module contains the validated building blocks shared by the store,
//! the estimators and the web layer. Categorical inputs (rider skill, rider
//! sex) are closed enumerations with explicit wire codes, and coordinates are
//! optional values rather than zero-filled pairs.

mod coordinate;
mod error;
mod rider;
mod trip;

pub use coordinate::{Coordinate, CoordinatePair};
pub use error::DomainError;
pub use rider::{Sex, SkillLevel};
pub use trip::TripRecord;
