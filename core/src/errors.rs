//! Error types for the FitIQ calculator core

use thiserror::Error;

/// Errors surfaced by the calculator entry points.
///
/// Validation runs once at the entry-point boundary; the formula functions
/// behind it assume valid input and are total. `Invalid` carries the
/// offending field and a message naming its valid range so the shell can
/// display it directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    #[error("{field}: {message}")]
    Invalid { field: String, message: String },

    #[error("goal weight must be strictly below current weight")]
    GoalWeightNotBelowCurrent,

    #[error("waist circumference must be larger than neck circumference")]
    WaistNotAboveNeck,

    #[error("waist plus hip circumference must be larger than neck circumference")]
    WaistPlusHipNotAboveNeck,

    #[error("hip circumference is required for the female body fat formula")]
    HipRequired,

    #[error("daily energy expenditure is at or below the safe calorie floor; no deficit is possible")]
    DeficitNotPossible,
}

impl MetricError {
    /// Build a validation error for a named field.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        MetricError::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for calculator entry points.
pub type MetricResult<T> = Result<T, MetricError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_error_names_field() {
        let err = MetricError::invalid("weight", "must be between 20 and 500 kg");
        assert_eq!(err.to_string(), "weight: must be between 20 and 500 kg");
    }

    #[test]
    fn test_precondition_messages() {
        assert!(MetricError::GoalWeightNotBelowCurrent
            .to_string()
            .contains("goal weight"));
        assert!(MetricError::WaistNotAboveNeck.to_string().contains("neck"));
    }
}
