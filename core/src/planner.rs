//! Calorie-deficit planning
//!
//! Builds a weight-loss plan from the energy calculators: TDEE at current
//! and goal weight, a rate-preset daily deficit floored at the sex-specific
//! safe minimum, a timeline from the 3500-kcal-per-pound rule, and a macro
//! split for the target calories. Hitting the calorie floor is a warning
//! carried on the plan, not an error; a floor that leaves no positive
//! deficit is an error.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{MetricError, MetricResult};
use crate::metrics::energy::{bmr_mifflin, tdee};
use crate::types::{ActivityLevel, BiologicalSex, DeficitRate};
use crate::units::kg_to_lbs;
use crate::validation::{validate_age, validate_height_cm, validate_weight_kg};

/// Calories per pound of body fat.
pub const KCAL_PER_LB: f64 = 3500.0;

/// Fraction of target calories allotted to fat.
const FAT_CALORIE_FRACTION: f64 = 0.25;

/// Protein grams per pound of body weight during a deficit.
const PROTEIN_G_PER_LB: f64 = 1.0;

const KCAL_PER_G_PROTEIN: i32 = 4;
const KCAL_PER_G_FAT: i32 = 9;
const KCAL_PER_G_CARB: i32 = 4;

/// Daily macro targets derived from a calorie target and body weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_grams: i32,
    pub fat_grams: i32,
    pub carb_grams: i32,
    /// True when protein and fat calories exceeded the target and the carb
    /// remainder was floored at zero (the calorie identity does not hold).
    pub carbs_floored: bool,
}

/// Complete deficit plan for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeficitPlan {
    /// Daily calorie target, never below the sex floor.
    pub target_calories: i32,
    /// Effective daily deficit after any floor adjustment.
    pub deficit_per_day: i32,
    pub weekly_deficit: i32,
    pub current_tdee: i32,
    pub goal_tdee: i32,
    pub weight_to_lose_kg: f64,
    pub weight_to_lose_lbs: f64,
    /// Display figure from the rate preset; the timeline uses the
    /// effective deficit instead.
    pub expected_loss_lbs_per_week: f64,
    pub weeks_to_goal: i64,
    pub goal_date: NaiveDate,
    /// True when the requested deficit was reduced to respect the calorie
    /// floor; the caller should surface this as a warning.
    pub floor_adjusted: bool,
    pub macros: MacroSplit,
}

/// Split a calorie target into protein/fat/carb grams: 1 g protein per lb
/// of body weight, 25% of calories from fat, carbs take the remainder.
pub fn macro_split(target_calories: i32, weight_kg: f64) -> MacroSplit {
    let weight_lbs = kg_to_lbs(weight_kg);
    let protein_grams = (weight_lbs * PROTEIN_G_PER_LB).round() as i32;
    let protein_calories = protein_grams * KCAL_PER_G_PROTEIN;

    let fat_calories = (target_calories as f64 * FAT_CALORIE_FRACTION).round() as i32;
    let fat_grams = (fat_calories as f64 / KCAL_PER_G_FAT as f64).round() as i32;

    let carb_calories = target_calories - protein_calories - fat_calories;
    let carbs_floored = carb_calories < 0;
    let carb_grams = if carbs_floored {
        0
    } else {
        (carb_calories as f64 / KCAL_PER_G_CARB as f64).round() as i32
    };

    MacroSplit {
        protein_grams,
        fat_grams,
        carb_grams,
        carbs_floored,
    }
}

/// Validated entry point. `today` anchors the goal date so the planner
/// stays a pure function of its arguments.
#[allow(clippy::too_many_arguments)]
pub fn deficit_plan(
    current_weight_kg: f64,
    goal_weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
    activity: ActivityLevel,
    rate: DeficitRate,
    today: NaiveDate,
) -> MetricResult<DeficitPlan> {
    validate_weight_kg(current_weight_kg)?;
    validate_weight_kg(goal_weight_kg)?;
    validate_height_cm(height_cm)?;
    validate_age(age_years)?;

    if goal_weight_kg >= current_weight_kg {
        return Err(MetricError::GoalWeightNotBelowCurrent);
    }

    let multiplier = activity.multiplier();
    let current_tdee = tdee(
        bmr_mifflin(current_weight_kg, height_cm, age_years, sex),
        multiplier,
    );
    let goal_tdee = tdee(
        bmr_mifflin(goal_weight_kg, height_cm, age_years, sex),
        multiplier,
    );

    let mut deficit_per_day = rate.deficit_per_day();
    let mut target_calories = current_tdee - deficit_per_day;
    let floor = sex.calorie_floor();
    let mut floor_adjusted = false;

    if target_calories < floor {
        target_calories = floor;
        deficit_per_day = current_tdee - floor;
        floor_adjusted = true;
        warn!(
            target_calories,
            deficit_per_day, "deficit reduced to respect minimum safe calories"
        );
    }

    if deficit_per_day <= 0 {
        return Err(MetricError::DeficitNotPossible);
    }

    let weight_to_lose_kg = current_weight_kg - goal_weight_kg;
    let weight_to_lose_lbs = kg_to_lbs(weight_to_lose_kg);
    let total_deficit = weight_to_lose_lbs * KCAL_PER_LB;
    let weeks_to_goal = (total_deficit / (deficit_per_day as f64 * 7.0)).ceil() as i64;
    let goal_date = today + Duration::days(weeks_to_goal * 7);

    Ok(DeficitPlan {
        target_calories,
        deficit_per_day,
        weekly_deficit: deficit_per_day * 7,
        current_tdee,
        goal_tdee,
        weight_to_lose_kg,
        weight_to_lose_lbs,
        expected_loss_lbs_per_week: rate.expected_loss_lbs_per_week(),
        weeks_to_goal,
        goal_date,
        floor_adjusted,
        macros: macro_split(target_calories, current_weight_kg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
    }

    #[test]
    fn test_moderate_plan() {
        // Male 30y, 90kg, 180cm, moderately active: BMR 1880, TDEE 2914
        let plan = deficit_plan(
            90.0,
            80.0,
            180.0,
            30,
            BiologicalSex::Male,
            ActivityLevel::ModeratelyActive,
            DeficitRate::Moderate,
            fixed_today(),
        )
        .unwrap();

        assert_eq!(plan.current_tdee, 2914);
        assert_eq!(plan.target_calories, 2414);
        assert_eq!(plan.deficit_per_day, 500);
        assert_eq!(plan.weekly_deficit, 3500);
        assert!(!plan.floor_adjusted);
        // 10kg = 22.05 lbs -> 77,162 kcal -> 23 weeks
        assert_eq!(plan.weeks_to_goal, 23);
        assert_eq!(
            plan.goal_date,
            fixed_today() + Duration::days(23 * 7)
        );
    }

    #[test]
    fn test_macros_for_moderate_plan() {
        let macros = macro_split(2414, 90.0);
        assert_eq!(macros.protein_grams, 198);
        assert_eq!(macros.fat_grams, 67);
        assert_eq!(macros.carb_grams, 255);
        assert!(!macros.carbs_floored);
    }

    #[test]
    fn test_macro_calories_approximately_sum_to_target() {
        let target = 2414;
        let macros = macro_split(target, 90.0);
        let total = macros.protein_grams * 4 + macros.fat_grams * 9 + macros.carb_grams * 4;
        // Per-macro rounding leaves a small residue
        assert!((total - target).abs() <= 15, "total {} vs {}", total, target);
    }

    #[test]
    fn test_carbs_floor_at_zero() {
        // Heavy body weight against a tiny target: protein alone exceeds it
        let macros = macro_split(1200, 180.0);
        assert_eq!(macros.carb_grams, 0);
        assert!(macros.carbs_floored);
    }

    #[test]
    fn test_floor_adjustment() {
        // Female 30y, 55kg, 160cm, sedentary: TDEE 1487; maximum rate would
        // land at 487, below the 1200 floor
        let plan = deficit_plan(
            55.0,
            50.0,
            160.0,
            30,
            BiologicalSex::Female,
            ActivityLevel::Sedentary,
            DeficitRate::Maximum,
            fixed_today(),
        )
        .unwrap();

        assert!(plan.floor_adjusted);
        assert_eq!(plan.target_calories, 1200);
        assert_eq!(plan.deficit_per_day, 287);
        assert_eq!(plan.weeks_to_goal, 20);
    }

    #[test]
    fn test_deficit_not_possible_when_tdee_below_floor() {
        let err = deficit_plan(
            21.0,
            20.0,
            150.0,
            30,
            BiologicalSex::Female,
            ActivityLevel::Sedentary,
            DeficitRate::Moderate,
            fixed_today(),
        )
        .unwrap_err();
        assert_eq!(err, MetricError::DeficitNotPossible);
    }

    #[test]
    fn test_goal_must_be_below_current() {
        let err = deficit_plan(
            80.0,
            80.0,
            180.0,
            30,
            BiologicalSex::Male,
            ActivityLevel::Sedentary,
            DeficitRate::Moderate,
            fixed_today(),
        )
        .unwrap_err();
        assert_eq!(err, MetricError::GoalWeightNotBelowCurrent);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: a successful plan never breaches the sex floor and
        /// always has a positive whole-week timeline
        #[test]
        fn prop_plan_respects_floor_and_timeline(
            current in 50.0f64..150.0,
            lose in 1.0f64..30.0,
            height in 150.0f64..200.0,
            age in 20i32..60,
            rate_idx in 0usize..4,
            male in proptest::bool::ANY
        ) {
            let goal = (current - lose).max(20.0);
            prop_assume!(goal < current);
            let sex = if male { BiologicalSex::Male } else { BiologicalSex::Female };
            let rate = [
                DeficitRate::Conservative,
                DeficitRate::Moderate,
                DeficitRate::Aggressive,
                DeficitRate::Maximum,
            ][rate_idx];

            match deficit_plan(
                current, goal, height, age, sex,
                ActivityLevel::LightlyActive, rate, fixed_today(),
            ) {
                Ok(plan) => {
                    prop_assert!(plan.target_calories >= sex.calorie_floor());
                    prop_assert!(plan.weeks_to_goal >= 1);
                    prop_assert!(plan.deficit_per_day > 0);
                    prop_assert!(plan.goal_date > fixed_today());
                }
                Err(err) => prop_assert_eq!(err, MetricError::DeficitNotPossible),
            }
        }
    }
}
