//! Body Mass Index
//!
//! BMI = weight(kg) / height(m)^2, reported to 1 decimal with the WHO
//! adult classification and the healthy weight range for the height.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Band, Classification, BMI_BANDS};
use crate::errors::MetricResult;
use crate::units::round_to;
use crate::validation::{validate_height_cm, validate_weight_kg};

/// Healthy BMI bounds used for the weight range.
pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// Complete BMI report for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiReport {
    /// BMI value, 1 decimal.
    pub bmi: f64,
    pub classification: Classification,
    /// Healthy weight range (kg) for this height, BMI 18.5-24.9.
    pub healthy_weight_range_kg: (f64, f64),
}

/// Calculate BMI from weight (kg) and height (cm), rounded to 1 decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 1)
}

/// Calculate BMI directly from imperial measurements:
/// (weight(lbs) / height(in)^2) x 703, rounded to 1 decimal.
pub fn bmi_imperial(weight_lbs: f64, height_in: f64) -> f64 {
    round_to(weight_lbs / (height_in * height_in) * 703.0, 1)
}

/// Classify a BMI value.
pub fn classify_bmi(bmi: f64) -> &'static Band {
    classify(bmi, &BMI_BANDS)
}

/// Healthy weight range (kg) for a height, from the healthy BMI bounds.
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (
        round_to(HEALTHY_BMI_MIN * height_m_sq, 1),
        round_to(HEALTHY_BMI_MAX * height_m_sq, 1),
    )
}

/// Validated entry point: BMI value, classification, and healthy range.
pub fn bmi_report(weight_kg: f64, height_cm: f64) -> MetricResult<BmiReport> {
    validate_weight_kg(weight_kg)?;
    validate_height_cm(height_cm)?;

    let value = bmi(weight_kg, height_cm);
    Ok(BmiReport {
        bmi: value,
        classification: classify_bmi(value).to_classification(),
        healthy_weight_range_kg: healthy_weight_range_kg(height_cm),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_bmi_known_value() {
        // 70kg, 175cm -> 22.9, Normal Weight
        assert_eq!(bmi(70.0, 175.0), 22.9);
        assert_eq!(classify_bmi(22.9).label, "Normal Weight");
    }

    #[test]
    fn test_bmi_imperial_matches_metric() {
        // 165 lbs, 69 in vs the converted metric input
        let imperial = bmi_imperial(165.0, 69.0);
        let metric = bmi(165.0 * 0.453592, 69.0 * 2.54);
        assert!((imperial - metric).abs() <= 0.1);
    }

    #[rstest]
    #[case(18.5, "Normal Weight")]
    #[case(25.0, "Overweight")]
    #[case(30.0, "Obese")]
    fn test_boundary_values_classify_upward(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(classify_bmi(value).label, expected);
    }

    #[test]
    fn test_healthy_weight_range() {
        // For 175cm, range is ~56.7-76.3 kg
        let (min, max) = healthy_weight_range_kg(175.0);
        assert!((min - 56.7).abs() < 0.1);
        assert!((max - 76.3).abs() < 0.1);
    }

    #[test]
    fn test_report_rejects_invalid_input() {
        assert!(bmi_report(0.0, 175.0).is_err());
        assert!(bmi_report(70.0, 0.0).is_err());
        assert!(bmi_report(70.0, f64::NAN).is_err());
    }

    #[test]
    fn test_report_contents() {
        let report = bmi_report(70.0, 175.0).unwrap();
        assert_eq!(report.bmi, 22.9);
        assert_eq!(report.classification.label, "Normal Weight");
        assert_eq!(report.classification.color_tag, "normal");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI is always positive for valid inputs
        #[test]
        fn prop_bmi_positive(weight in 20.0f64..500.0, height in 100.0f64..250.0) {
            prop_assert!(bmi(weight, height) > 0.0);
        }

        /// Property: Heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 110.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            prop_assert!(bmi(weight2, height) > bmi(weight1, height));
        }

        /// Property: identical inputs yield identical outputs
        #[test]
        fn prop_bmi_is_pure(weight in 20.0f64..500.0, height in 100.0f64..250.0) {
            prop_assert_eq!(bmi(weight, height), bmi(weight, height));
        }

        /// Property: the healthy range midpoint lands in the Normal band
        #[test]
        fn prop_healthy_range_midpoint_is_normal(height in 150.0f64..200.0) {
            let (min, max) = healthy_weight_range_kg(height);
            let mid = (min + max) / 2.0;
            prop_assert_eq!(classify_bmi(bmi(mid, height)).label, "Normal Weight");
        }
    }
}
