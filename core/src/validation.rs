//! Input validation functions
//!
//! Validation happens once, at the calculator entry points, before any
//! formula runs; the formula functions assume valid input and never
//! re-validate. Per-field validators reject NaN/infinite values and
//! out-of-physiological-range magnitudes with a message naming the valid
//! range. Multi-field input records use the `validator` derive instead;
//! [`validate_input`] adapts its errors to [`MetricError`].

use crate::errors::{MetricError, MetricResult};
use validator::Validate;

fn check_range(field: &'static str, value: f64, min: f64, max: f64, unit: &str) -> MetricResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(MetricError::invalid(field, "must be a valid number"));
    }
    if value < min || value > max {
        return Err(MetricError::invalid(
            field,
            format!("must be between {} and {} {}", min, max, unit),
        ));
    }
    Ok(())
}

/// Validate weight in kilograms (20-500 kg).
pub fn validate_weight_kg(weight_kg: f64) -> MetricResult<()> {
    check_range("weight", weight_kg, 20.0, 500.0, "kg")
}

/// Validate weight in pounds (44-1100 lbs).
pub fn validate_weight_lbs(weight_lbs: f64) -> MetricResult<()> {
    check_range("weight", weight_lbs, 44.0, 1100.0, "lbs")
}

/// Validate height in centimeters (50-300 cm).
pub fn validate_height_cm(height_cm: f64) -> MetricResult<()> {
    check_range("height", height_cm, 50.0, 300.0, "cm")
}

/// Validate height in inches for the ideal-weight formulas, which are only
/// defined from 5 feet up (60-96 in).
pub fn validate_height_inches(height_in: f64) -> MetricResult<()> {
    check_range("height", height_in, 60.0, 96.0, "inches")
}

/// Validate age in years (1-119).
pub fn validate_age(age_years: i32) -> MetricResult<()> {
    if !(1..=119).contains(&age_years) {
        return Err(MetricError::invalid(
            "age",
            "must be between 1 and 119 years",
        ));
    }
    Ok(())
}

/// Validate resting heart rate (30-100 bpm).
pub fn validate_resting_hr(bpm: i32) -> MetricResult<()> {
    if !(30..=100).contains(&bpm) {
        return Err(MetricError::invalid(
            "resting heart rate",
            "must be between 30 and 100 bpm",
        ));
    }
    Ok(())
}

/// Validate a TDEE activity multiplier (1.2-1.9).
pub fn validate_activity_multiplier(multiplier: f64) -> MetricResult<()> {
    check_range("activity multiplier", multiplier, 1.2, 1.9, "")
}

/// Validate a body circumference measurement in centimeters (10-300 cm).
pub fn validate_circumference_cm(field: &'static str, value: f64) -> MetricResult<()> {
    check_range(field, value, 10.0, 300.0, "cm")
}

/// Validate a percentage value (0-100).
pub fn validate_percentage(field: &'static str, value: f64) -> MetricResult<()> {
    check_range(field, value, 0.0, 100.0, "")
}

/// Run a `validator`-derived record's checks and adapt the first failure
/// into a [`MetricError::Invalid`] naming the field.
pub fn validate_input<T: Validate>(input: &T) -> MetricResult<()> {
    input.validate().map_err(|errors| {
        let field_errors = errors.field_errors();
        match field_errors.iter().next() {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                MetricError::Invalid {
                    field: field.to_string(),
                    message,
                }
            }
            None => MetricError::invalid("input", "is invalid"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(-10.0).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(30).is_ok());
        assert!(validate_age(1).is_ok());
        assert!(validate_age(119).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(120).is_err());
    }

    #[test]
    fn test_validate_resting_hr() {
        assert!(validate_resting_hr(60).is_ok());
        assert!(validate_resting_hr(30).is_ok());
        assert!(validate_resting_hr(100).is_ok());
        assert!(validate_resting_hr(29).is_err());
        assert!(validate_resting_hr(101).is_err());
    }

    #[test]
    fn test_validate_activity_multiplier() {
        assert!(validate_activity_multiplier(1.55).is_ok());
        assert!(validate_activity_multiplier(1.2).is_ok());
        assert!(validate_activity_multiplier(1.9).is_ok());
        assert!(validate_activity_multiplier(1.0).is_err());
        assert!(validate_activity_multiplier(2.0).is_err());
    }

    #[test]
    fn test_error_names_field_and_range() {
        let err = validate_weight_kg(10.0).unwrap_err();
        assert_eq!(err.to_string(), "weight: must be between 20 and 500 kg");

        let err = validate_circumference_cm("neck", 5.0).unwrap_err();
        assert_eq!(err.to_string(), "neck: must be between 10 and 300 cm");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_valid_percentage_range(pct in 0.0f64..=100.0) {
            prop_assert!(validate_percentage("goal achievement", pct).is_ok());
        }

        #[test]
        fn prop_valid_resting_hr_range(bpm in 30i32..=100) {
            prop_assert!(validate_resting_hr(bpm).is_ok());
        }
    }
}
