//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Sex, SkillLevel};
use crate::recommend::{RecommendRequest, Recommendation};

/// Query string for a recommendation request.
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Start station name
    pub start: String,

    /// Shortest acceptable trip (minutes)
    pub time_low: i64,

    /// Longest acceptable trip (minutes)
    pub time_high: i64,

    /// Riding level code: -1 beginner, 0 average, 1 pro
    #[serde(default)]
    pub riding_level: i64,

    /// Sex code: 0 female, 1 male, 2 other; absent for no filter
    pub sex: Option<i64>,

    /// Maximum number of results
    pub limit: Option<i64>,
}

impl RecommendQuery {
    /// Translate wire codes into an engine request.
    pub fn into_request(self) -> Result<RecommendRequest, DomainError> {
        let skill = SkillLevel::from_code(self.riding_level)?;
        let sex = self.sex.map(Sex::from_code).transpose()?;

        Ok(RecommendRequest::new(self.start, self.time_low, self.time_high)
            .with_skill(skill)
            .with_sex(sex)
            .with_limit(self.limit))
    }
}

/// A recommended destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    /// Destination station name
    pub destination: String,

    /// Estimated trip time in minutes
    pub eta: f64,

    /// Mean distance in kilometres; null when unknown
    pub distance: Option<f64>,
}

impl From<&Recommendation> for RecommendationResult {
    fn from(rec: &Recommendation) -> Self {
        Self {
            destination: rec.destination.clone(),
            eta: rec.eta,
            distance: rec.distance,
        }
    }
}

/// Response for a recommendation request.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// The start station queried
    pub start: String,

    /// Destinations, best fit first
    pub recommendations: Vec<RecommendationResult>,
}

/// Response listing start stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Sorted station names
    pub stations: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
