//! Recommendation orchestration.

use tracing::{debug, trace};

use crate::domain::{DomainError, Sex, SkillLevel};
use crate::estimate::{EstimateError, estimate_distance, estimate_eta, mean_eta};
use crate::store::{StoreError, TripSource};

use super::config::{RecommenderConfig, SampleFallback};
use super::rank::{rank_by_midpoint, truncate};

/// Error from a recommendation request.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    /// The request was rejected before touching the data source
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(String),

    /// A destination's trip time could not be estimated
    #[error("cannot estimate trip time to {destination}: {source}")]
    Estimate {
        destination: String,
        #[source]
        source: EstimateError,
    },

    /// The data source failed
    #[error(transparent)]
    Source(#[from] StoreError),
}

impl From<DomainError> for RecommendError {
    fn from(err: DomainError) -> Self {
        RecommendError::InvalidRequest(err.to_string())
    }
}

/// A recommended destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Destination station name.
    pub destination: String,

    /// Estimated trip time in minutes.
    pub eta: f64,

    /// Mean observed distance in kilometres, `None` if no trip to this
    /// destination has usable coordinates.
    pub distance: Option<f64>,
}

impl Recommendation {
    /// Absolute difference between this ETA and `midpoint`, in minutes.
    pub fn offset_from(&self, midpoint: f64) -> f64 {
        (self.eta - midpoint).abs()
    }
}

/// Request for destination recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    /// Start station name.
    pub start: String,

    /// Shortest acceptable trip, in minutes.
    pub time_low: i64,

    /// Longest acceptable trip, in minutes.
    pub time_high: i64,

    /// Rider skill used to bias the ETA.
    pub skill: SkillLevel,

    /// Only use trips by riders of this sex; `None` uses every trip.
    pub sex: Option<Sex>,

    /// Maximum number of results; `None` defers to the configured default.
    pub limit: Option<i64>,
}

impl RecommendRequest {
    /// Create a request for an average rider with no sex filter or limit.
    pub fn new(start: impl Into<String>, time_low: i64, time_high: i64) -> Self {
        Self {
            start: start.into(),
            time_low,
            time_high,
            skill: SkillLevel::default(),
            sex: None,
            limit: None,
        }
    }

    /// Set the rider skill.
    pub fn with_skill(mut self, skill: SkillLevel) -> Self {
        self.skill = skill;
        self
    }

    /// Set the sex filter.
    pub fn with_sex(mut self, sex: Option<Sex>) -> Self {
        self.sex = sex;
        self
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit;
        self
    }

    /// Validate the request.
    ///
    /// Bounds are never swapped or clamped here; inverted or negative input
    /// is rejected.
    pub fn validate(&self) -> Result<(), RecommendError> {
        if self.time_low < 0 || self.time_high < 0 {
            return Err(RecommendError::InvalidRequest(format!(
                "time bounds must be non-negative (got {}..{})",
                self.time_low, self.time_high
            )));
        }

        if self.time_low > self.time_high {
            return Err(RecommendError::InvalidRequest(format!(
                "time_low {} is greater than time_high {}",
                self.time_low, self.time_high
            )));
        }

        if let Some(limit) = self.limit
            && limit < 0
        {
            return Err(RecommendError::InvalidRequest(format!(
                "limit must be non-negative (got {limit})"
            )));
        }

        Ok(())
    }

    /// Middle of the requested window, in minutes.
    pub fn midpoint(&self) -> f64 {
        (self.time_low as f64 + self.time_high as f64) / 2.0
    }

    /// Whether an ETA lies inside the inclusive window.
    pub fn in_window(&self, eta: f64) -> bool {
        self.time_low as f64 <= eta && eta <= self.time_high as f64
    }
}

/// Destination recommender.
///
/// Holds only borrowed, read-only collaborators, so any number of
/// recommenders can run concurrently over the same source.
pub struct Recommender<'a, S: TripSource + ?Sized> {
    source: &'a S,
    config: &'a RecommenderConfig,
}

impl<'a, S: TripSource + ?Sized> Recommender<'a, S> {
    /// Create a new recommender.
    pub fn new(source: &'a S, config: &'a RecommenderConfig) -> Self {
        Self { source, config }
    }

    /// Recommend destinations for a request, best fit first.
    ///
    /// A start station with no recorded trips, or no destination inside the
    /// window, yields an empty list rather than an error.
    pub fn recommend(&self, request: &RecommendRequest) -> Result<Vec<Recommendation>, RecommendError> {
        request.validate()?;

        let aggregate = self.source.endpoints_by_start(&request.start, request.sex)?;
        if aggregate.is_empty() {
            debug!(start = %request.start, sex = ?request.sex, "no trips recorded from start station");
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for (destination, durations) in aggregate.iter() {
            let Some(eta) = self.estimate(destination, durations, request.skill)? else {
                continue;
            };

            if !request.in_window(eta) {
                trace!(destination, eta, "outside requested window");
                continue;
            }

            let pairs = self.source.coordinates_for(&request.start, destination)?;
            matches.push(Recommendation {
                destination: destination.to_string(),
                eta,
                distance: estimate_distance(&pairs),
            });
        }

        debug!(
            start = %request.start,
            candidates = aggregate.len(),
            matches = matches.len(),
            "recommendation search complete"
        );

        let ranked = rank_by_midpoint(matches, request.midpoint());
        let limit = request
            .limit
            .map(|k| usize::try_from(k).unwrap_or(0))
            .or(self.config.default_limit);

        Ok(truncate(ranked, limit))
    }

    /// Distinct start stations known to the source, sorted.
    pub fn start_stations(&self) -> Result<Vec<String>, RecommendError> {
        Ok(self.source.start_stations()?)
    }

    /// Estimate one destination's ETA, applying the insufficient-sample policy.
    ///
    /// `Ok(None)` means the destination is dropped.
    fn estimate(
        &self,
        destination: &str,
        durations: &[u32],
        skill: SkillLevel,
    ) -> Result<Option<f64>, RecommendError> {
        let err = match estimate_eta(durations, skill) {
            Ok(eta) => return Ok(Some(eta)),
            Err(err) => err,
        };

        match (&err, self.config.sample_fallback) {
            (EstimateError::InsufficientSample { .. }, SampleFallback::Drop) => {
                debug!(destination, %err, "dropping destination");
                Ok(None)
            }
            (EstimateError::InsufficientSample { .. }, SampleFallback::Average) => {
                debug!(destination, %err, "falling back to unconditioned mean");
                Ok(mean_eta(durations))
            }
            _ => Err(RecommendError::Estimate {
                destination: destination.to_string(),
                source: err,
            }),
        }
    }
}

#[cfg(test)]
#[path = "recommender_tests.rs"]
mod tests;
