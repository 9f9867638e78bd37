//! Domain error types.
//!
//! These errors represent values that fail validation when they enter the
//! domain layer, typically from a CSV row or a query string.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude/longitude outside the valid range or not finite
    #[error("invalid coordinate ({lat}, {lng}): {reason}")]
    InvalidCoordinate {
        lat: f64,
        lng: f64,
        reason: &'static str,
    },

    /// Riding level code other than -1, 0 or 1
    #[error("unknown riding level code: {0}")]
    UnknownSkill(i64),

    /// Sex code other than 0, 1 or 2
    #[error("unknown sex code: {0}")]
    UnknownSex(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::UnknownSkill(7);
        assert_eq!(err.to_string(), "unknown riding level code: 7");

        let err = DomainError::UnknownSex(-1);
        assert_eq!(err.to_string(), "unknown sex code: -1");

        let err = DomainError::InvalidCoordinate {
            lat: 91.0,
            lng: 0.0,
            reason: "latitude must be within [-90, 90]",
        };
        assert_eq!(
            err.to_string(),
            "invalid coordinate (91, 0): latitude must be within [-90, 90]"
        );
    }
}
