//! Configuration for the recommendation engine.

use std::fmt;
use std::str::FromStr;

/// What to do when a skill-conditioned estimate has no samples to use.
///
/// This only arises for Beginner/Pro requests when no observed duration
/// lies strictly on the rider's side of the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFallback {
    /// Fail the whole request with `RecommendError::Estimate`.
    #[default]
    Propagate,
    /// Leave the destination out of the results.
    Drop,
    /// Use the unconditioned mean for that destination.
    Average,
}

impl FromStr for SampleFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(SampleFallback::Propagate),
            "drop" => Ok(SampleFallback::Drop),
            "average" => Ok(SampleFallback::Average),
            other => Err(format!(
                "unknown sample fallback {other:?} (expected propagate, drop or average)"
            )),
        }
    }
}

impl fmt::Display for SampleFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleFallback::Propagate => "propagate",
            SampleFallback::Drop => "drop",
            SampleFallback::Average => "average",
        })
    }
}

/// Configuration parameters for the recommender.
#[derive(Debug, Clone, Default)]
pub struct RecommenderConfig {
    /// Recovery policy for empty skill-conditioned samples.
    pub sample_fallback: SampleFallback,

    /// Number of results to return when the request gives no limit.
    /// `None` returns every match.
    pub default_limit: Option<usize>,
}

impl RecommenderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(sample_fallback: SampleFallback, default_limit: Option<usize>) -> Self {
        Self {
            sample_fallback,
            default_limit,
        }
    }

    /// Set the insufficient-sample policy.
    pub fn with_sample_fallback(mut self, fallback: SampleFallback) -> Self {
        self.sample_fallback = fallback;
        self
    }

    /// Set the default result limit.
    pub fn with_default_limit(mut self, limit: Option<usize>) -> Self {
        self.default_limit = limit;
        self
    }
}
