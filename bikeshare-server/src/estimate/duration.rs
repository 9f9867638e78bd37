//! Skill-adjusted trip time estimation.
//!
//! Beginners are modelled as riders who take longer than typical and pros as
//! riders who are quicker than typical. The estimate for a skilled or
//! unskilled rider is the mean of the observed trips on their side of the
//! overall mean.

use crate::domain::SkillLevel;

/// Stored durations are seconds; every ETA leaving this module is minutes.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Error from duration estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// No samples at all
    #[error("no duration samples to estimate from")]
    EmptySample,

    /// The skill-conditioned subset of samples is empty
    #[error("insufficient samples for a {skill} estimate (mean {mean_secs:.1}s)")]
    InsufficientSample { skill: SkillLevel, mean_secs: f64 },
}

/// Estimate the trip time in minutes for a rider of the given skill.
///
/// - If every sample is identical, that value is the estimate for any skill.
/// - `Average` gets the mean of all samples.
/// - `Beginner` gets the mean of samples strictly above the overall mean.
/// - `Pro` gets the mean of samples strictly below the overall mean.
///
/// # Examples
///
/// ```
/// use bikeshare_server::domain::SkillLevel;
/// use bikeshare_server::estimate::estimate_eta;
///
/// let samples: [u32; 3] = [60, 60, 120]; // mean is 80 seconds
/// assert_eq!(estimate_eta(&samples, SkillLevel::Beginner).unwrap(), 2.0);
/// assert_eq!(estimate_eta(&samples, SkillLevel::Pro).unwrap(), 1.0);
/// ```
pub fn estimate_eta(durations: &[u32], skill: SkillLevel) -> Result<f64, EstimateError> {
    let (&first, rest) = durations.split_first().ok_or(EstimateError::EmptySample)?;

    if rest.iter().all(|&d| d == first) {
        return Ok(to_minutes(f64::from(first)));
    }

    let total_avg = mean_secs(durations.iter().copied()).ok_or(EstimateError::EmptySample)?;

    let conditioned = match skill {
        SkillLevel::Average => return Ok(to_minutes(total_avg)),
        SkillLevel::Beginner => mean_secs(
            durations
                .iter()
                .copied()
                .filter(|&d| f64::from(d) > total_avg),
        ),
        SkillLevel::Pro => mean_secs(
            durations
                .iter()
                .copied()
                .filter(|&d| f64::from(d) < total_avg),
        ),
    };

    conditioned
        .map(to_minutes)
        .ok_or(EstimateError::InsufficientSample {
            skill,
            mean_secs: total_avg,
        })
}

/// Unconditioned mean of the samples in minutes, or `None` if empty.
pub fn mean_eta(durations: &[u32]) -> Option<f64> {
    mean_secs(durations.iter().copied()).map(to_minutes)
}

fn mean_secs(values: impl Iterator<Item = u32>) -> Option<f64> {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| {
        (sum + u64::from(v), count + 1)
    });
    (count > 0).then(|| sum as f64 / count as f64)
}

fn to_minutes(secs: f64) -> f64 {
    secs / SECONDS_PER_MINUTE
}
