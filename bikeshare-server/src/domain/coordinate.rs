//! Geographic coordinate types.

use std::fmt;

use super::DomainError;

/// A latitude/longitude position in degrees.
///
/// Any `Coordinate` value is finite and within range by construction, so a
/// missing position is always expressed as `Option<Coordinate>` and never as
/// `(0.0, 0.0)`.
///
/// # Examples
///
/// ```
/// use bikeshare_server::domain::Coordinate;
///
/// let hilltop = Coordinate::new(40.7128, -74.0060).unwrap();
/// assert_eq!(hilltop.lat(), 40.7128);
///
/// // Out of range latitude is rejected
/// assert!(Coordinate::new(95.0, 0.0).is_err());
///
/// // NaN is rejected
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let invalid = |reason| DomainError::InvalidCoordinate { lat, lng, reason };

        if !lat.is_finite() || !lng.is_finite() {
            return Err(invalid("components must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }

        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Start and end positions observed for one historical trip.
///
/// Either side may be missing; consumers decide how to treat partial pairs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinatePair {
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
}

impl CoordinatePair {
    /// Create a pair from optional endpoints.
    pub fn new(start: Option<Coordinate>, end: Option<Coordinate>) -> Self {
        Self { start, end }
    }

    /// Both endpoints, if both are present.
    pub fn both(&self) -> Option<(Coordinate, Coordinate)> {
        Some((self.start?, self.end?))
    }

    /// The same pair travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
