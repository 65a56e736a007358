//! Daily protein target
//!
//! Grams per pound of body weight, multiplier selected by fitness goal,
//! with a +/-0.1 g/lb band around the target and a per-meal split over
//! three meals.

use serde::{Deserialize, Serialize};

use crate::errors::MetricResult;
use crate::types::ProteinGoal;
use crate::validation::validate_weight_lbs;

/// Width of the recommendation band around the goal multiplier, g/lb.
const BAND_G_PER_LB: f64 = 0.1;

/// Meals the daily target is split across.
const MEALS_PER_DAY: f64 = 3.0;

/// Complete protein report for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinReport {
    /// Daily target in grams.
    pub grams: i32,
    /// Low end of the recommendation band.
    pub min_grams: i32,
    /// High end of the recommendation band.
    pub max_grams: i32,
    /// Target per meal over three meals.
    pub per_meal_grams: i32,
    pub goal: ProteinGoal,
}

/// Daily protein grams for a body weight and goal.
pub fn protein_grams(weight_lbs: f64, goal: ProteinGoal) -> i32 {
    (weight_lbs * goal.grams_per_lb()).round() as i32
}

/// Validated entry point with the recommendation band.
pub fn protein_target(weight_lbs: f64, goal: ProteinGoal) -> MetricResult<ProteinReport> {
    validate_weight_lbs(weight_lbs)?;

    let grams = protein_grams(weight_lbs, goal);
    let multiplier = goal.grams_per_lb();
    Ok(ProteinReport {
        grams,
        min_grams: (weight_lbs * (multiplier - BAND_G_PER_LB)).round() as i32,
        max_grams: (weight_lbs * (multiplier + BAND_G_PER_LB)).round() as i32,
        per_meal_grams: (grams as f64 / MEALS_PER_DAY).round() as i32,
        goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(ProteinGoal::WeightLoss, 132)]
    #[case(ProteinGoal::Maintenance, 165)]
    #[case(ProteinGoal::MuscleGain, 198)]
    #[case(ProteinGoal::Athletic, 231)]
    fn test_targets_at_165_lbs(#[case] goal: ProteinGoal, #[case] expected: i32) {
        assert_eq!(protein_grams(165.0, goal), expected);
    }

    #[test]
    fn test_band_and_meal_split() {
        let report = protein_target(165.0, ProteinGoal::Maintenance).unwrap();
        assert_eq!(report.grams, 165);
        assert_eq!(report.min_grams, 149); // 0.9 g/lb
        assert_eq!(report.max_grams, 182); // 1.1 g/lb
        assert_eq!(report.per_meal_grams, 55);
    }

    #[test]
    fn test_rejects_out_of_range_weight() {
        assert!(protein_target(30.0, ProteinGoal::Maintenance).is_err());
        assert!(protein_target(1200.0, ProteinGoal::Maintenance).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the band brackets the target for every goal
        #[test]
        fn prop_band_brackets_target(weight in 44.0f64..1100.0) {
            for goal in [
                ProteinGoal::WeightLoss,
                ProteinGoal::Maintenance,
                ProteinGoal::MuscleGain,
                ProteinGoal::Athletic,
            ] {
                let report = protein_target(weight, goal).unwrap();
                prop_assert!(report.min_grams <= report.grams);
                prop_assert!(report.grams <= report.max_grams);
            }
        }

        /// Property: a more demanding goal never lowers the target
        #[test]
        fn prop_goal_ordering(weight in 44.0f64..1100.0) {
            let loss = protein_grams(weight, ProteinGoal::WeightLoss);
            let maintain = protein_grams(weight, ProteinGoal::Maintenance);
            let gain = protein_grams(weight, ProteinGoal::MuscleGain);
            let athletic = protein_grams(weight, ProteinGoal::Athletic);
            prop_assert!(loss <= maintain && maintain <= gain && gain <= athletic);
        }
    }
}
