//! BMR and TDEE
//!
//! Basal Metabolic Rate via Mifflin-St Jeor:
//!
//! Men:   BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
//! Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
//!
//! TDEE = BMR x activity multiplier, both rounded to whole kcal.

use serde::{Deserialize, Serialize};

use crate::errors::MetricResult;
use crate::types::{ActivityLevel, BiologicalSex};
use crate::validation::{
    validate_activity_multiplier, validate_age, validate_height_cm, validate_weight_kg,
};

/// Calorie targets derived from TDEE for common goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieTargets {
    /// TDEE - 500 kcal
    pub aggressive_cut: i32,
    /// TDEE - 250 kcal
    pub moderate_cut: i32,
    pub maintenance: i32,
    /// TDEE + 250 kcal
    pub moderate_bulk: i32,
    /// TDEE + 500 kcal
    pub aggressive_bulk: i32,
}

impl CalorieTargets {
    fn from_tdee(tdee: i32) -> Self {
        Self {
            aggressive_cut: tdee - 500,
            moderate_cut: tdee - 250,
            maintenance: tdee,
            moderate_bulk: tdee + 250,
            aggressive_bulk: tdee + 500,
        }
    }
}

/// Complete energy report for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyReport {
    /// Basal Metabolic Rate, kcal/day.
    pub bmr: i32,
    /// Total Daily Energy Expenditure, kcal/day.
    pub tdee: i32,
    pub activity_multiplier: f64,
    pub targets: CalorieTargets,
}

/// Calculate BMR using the Mifflin-St Jeor equation, rounded to whole kcal.
pub fn bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let bmr = match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    };
    bmr.round() as i32
}

/// Calculate TDEE from a BMR and an activity multiplier.
pub fn tdee(bmr: i32, activity_multiplier: f64) -> i32 {
    (bmr as f64 * activity_multiplier).round() as i32
}

/// Validated entry point: BMR, TDEE, and the goal calorie ladder.
pub fn energy_report(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
    activity: ActivityLevel,
) -> MetricResult<EnergyReport> {
    validate_weight_kg(weight_kg)?;
    validate_height_cm(height_cm)?;
    validate_age(age_years)?;
    let multiplier = activity.multiplier();
    validate_activity_multiplier(multiplier)?;

    let bmr_value = bmr_mifflin(weight_kg, height_cm, age_years, sex);
    let tdee_value = tdee(bmr_value, multiplier);
    Ok(EnergyReport {
        bmr: bmr_value,
        tdee: tdee_value,
        activity_multiplier: multiplier,
        targets: CalorieTargets::from_tdee(tdee_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmr_mifflin_known_values() {
        // 30yo male, 70kg, 175cm: 700 + 1093.75 - 150 + 5 = 1648.75 -> 1649
        assert_eq!(bmr_mifflin(70.0, 175.0, 30, BiologicalSex::Male), 1649);

        // 30yo female, 60kg, 165cm: 600 + 1031.25 - 150 - 161 = 1320.25 -> 1320
        assert_eq!(bmr_mifflin(60.0, 165.0, 30, BiologicalSex::Female), 1320);
    }

    #[test]
    fn test_tdee_known_value() {
        assert_eq!(tdee(1673, 1.55), 2593);
    }

    #[test]
    fn test_energy_report() {
        let report = energy_report(
            70.0,
            175.0,
            30,
            BiologicalSex::Male,
            ActivityLevel::ModeratelyActive,
        )
        .unwrap();
        assert_eq!(report.bmr, 1649);
        assert_eq!(report.tdee, 2556);
        assert_eq!(report.targets.maintenance, 2556);
        assert_eq!(report.targets.aggressive_cut, 2056);
        assert_eq!(report.targets.aggressive_bulk, 3056);
    }

    #[test]
    fn test_energy_report_rejects_invalid_input() {
        assert!(energy_report(
            0.0,
            175.0,
            30,
            BiologicalSex::Male,
            ActivityLevel::Sedentary
        )
        .is_err());
        assert!(energy_report(
            70.0,
            175.0,
            0,
            BiologicalSex::Male,
            ActivityLevel::Sedentary
        )
        .is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMR is always positive for physiological inputs
        #[test]
        fn prop_bmr_positive(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            prop_assert!(bmr_mifflin(weight, height, age, BiologicalSex::Male) > 0);
            prop_assert!(bmr_mifflin(weight, height, age, BiologicalSex::Female) > 0);
        }

        /// Property: Male BMR > Female BMR (same stats)
        #[test]
        fn prop_male_bmr_higher(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20i32..60
        ) {
            let male = bmr_mifflin(weight, height, age, BiologicalSex::Male);
            let female = bmr_mifflin(weight, height, age, BiologicalSex::Female);
            prop_assert!(male > female);
        }

        /// Property: TDEE > BMR (every activity multiplier exceeds 1)
        #[test]
        fn prop_tdee_greater_than_bmr(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20i32..60
        ) {
            let bmr_value = bmr_mifflin(weight, height, age, BiologicalSex::Male);
            for level in ActivityLevel::ALL {
                prop_assert!(tdee(bmr_value, level.multiplier()) > bmr_value);
            }
        }
    }
}
