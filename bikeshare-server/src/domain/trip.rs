//! Historical trip records.

use super::{Coordinate, CoordinatePair, Sex};

/// One historical bike-share trip.
///
/// Records are loaded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Trip duration in seconds.
    pub duration_secs: u32,

    /// Name of the station the trip started at.
    pub start_location: String,

    /// Name of the station the trip ended at.
    pub end_location: String,

    /// Rider's year of birth, if recorded and parseable.
    pub rider_birth_year: Option<u16>,

    /// Rider's sex, if recorded with a known code.
    pub sex: Option<Sex>,

    /// Start station position for this trip.
    pub start_coordinate: Option<Coordinate>,

    /// End station position for this trip.
    pub end_coordinate: Option<Coordinate>,
}

impl TripRecord {
    /// Create a record with no optional rider or position data.
    pub fn new(
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            duration_secs,
            start_location: start_location.into(),
            end_location: end_location.into(),
            rider_birth_year: None,
            sex: None,
            start_coordinate: None,
            end_coordinate: None,
        }
    }

    /// Set the rider's sex.
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Set the rider's birth year.
    pub fn with_birth_year(mut self, year: u16) -> Self {
        self.rider_birth_year = Some(year);
        self
    }

    /// Set the start and end positions.
    pub fn with_coordinates(mut self, start: Option<Coordinate>, end: Option<Coordinate>) -> Self {
        self.start_coordinate = start;
        self.end_coordinate = end;
        self
    }

    /// The positions observed for this trip.
    pub fn coordinates(&self) -> CoordinatePair {
        CoordinatePair::new(self.start_coordinate, self.end_coordinate)
    }

    /// Whether this record passes an optional sex filter.
    ///
    /// No filter matches every record, including ones with unknown sex.
    /// A filter never matches a record whose sex is unknown.
    pub fn matches_sex(&self, filter: Option<Sex>) -> bool {
        match filter {
            None => true,
            Some(wanted) => self.sex == Some(wanted),
        }
    }
}
