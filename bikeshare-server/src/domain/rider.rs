//! Rider categories: self-reported skill level and sex.
//!
//! Both are closed enumerations. The integer codes used by the trip data
//! and the HTTP query string are mapped explicitly via `from_code`/`code`
//! and never flow through the engine as bare integers.

use std::fmt;

use super::DomainError;

/// Self-reported riding skill, used to bias trip time estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillLevel {
    /// Rides slower than typical (wire code -1).
    Beginner,
    /// Rides at the typical pace (wire code 0).
    #[default]
    Average,
    /// Rides faster than typical (wire code 1).
    Pro,
}

impl SkillLevel {
    /// Parse a wire code: -1 beginner, 0 average, 1 pro.
    pub fn from_code(code: i64) -> Result<Self, DomainError> {
        match code {
            -1 => Ok(SkillLevel::Beginner),
            0 => Ok(SkillLevel::Average),
            1 => Ok(SkillLevel::Pro),
            other => Err(DomainError::UnknownSkill(other)),
        }
    }

    /// The wire code for this level.
    pub fn code(self) -> i64 {
        match self {
            SkillLevel::Beginner => -1,
            SkillLevel::Average => 0,
            SkillLevel::Pro => 1,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Average => "average",
            SkillLevel::Pro => "pro",
        })
    }
}

/// Recorded rider sex.
///
/// "Unspecified" is not a variant: a missing sex on a record, or a missing
/// sex filter on a request, is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl Sex {
    /// Parse a wire code: 0 female, 1 male, 2 other.
    pub fn from_code(code: i64) -> Result<Self, DomainError> {
        match code {
            0 => Ok(Sex::Female),
            1 => Ok(Sex::Male),
            2 => Ok(Sex::Other),
            other => Err(DomainError::UnknownSex(other)),
        }
    }

    /// The wire code for this category.
    pub fn code(self) -> i64 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
            Sex::Other => 2,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Female => "female",
            Sex::Male => "male",
            Sex::Other => "other",
        })
    }
}
