//! Daily water intake
//!
//! Base intake is 35 mL per kg of body weight; the activity tier adds a
//! percentage of that base and the climate tier scales the total. The
//! result is rounded to the nearest 250 mL (a glass) and clamped to the
//! 1.5-4 liter band.

use serde::{Deserialize, Serialize};

use crate::errors::MetricResult;
use crate::types::{ActivityLevel, Climate};
use crate::units::round_to;
use crate::validation::validate_weight_kg;

/// Base hydration in mL per kg of body weight.
pub const HYDRATION_ML_PER_KG: f64 = 35.0;

/// Output granularity in mL (one glass).
pub const GLASS_ML: f64 = 250.0;

/// Daily floor in mL.
pub const HYDRATION_MIN_ML: i32 = 1500;

/// Daily ceiling in mL.
pub const HYDRATION_MAX_ML: i32 = 4000;

/// Milliliters per US fluid ounce.
const ML_PER_FL_OZ: f64 = 29.5735;

/// Complete hydration report for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationReport {
    /// Daily target in mL, a multiple of 250 within [1500, 4000].
    pub total_ml: i32,
    /// Target in liters, 1 decimal.
    pub liters: f64,
    /// Target in US fluid ounces, whole ounces.
    pub fluid_oz: i32,
    /// Target in 250 mL glasses, 1 decimal.
    pub glasses: f64,
    /// Suggested amount per main meal (a quarter of the target).
    pub per_meal_ml: i32,
    pub activity: ActivityLevel,
    pub climate: Climate,
}

/// Daily water target in mL for a weight and both tiers.
pub fn hydration_target_ml(weight_kg: f64, activity: ActivityLevel, climate: Climate) -> i32 {
    let base = weight_kg * HYDRATION_ML_PER_KG;
    let with_bonus = base + base * activity.hydration_bonus();
    let total = with_bonus * climate.multiplier();

    let rounded = ((total / GLASS_ML).round() * GLASS_ML) as i32;
    rounded.clamp(HYDRATION_MIN_ML, HYDRATION_MAX_ML)
}

/// Validated entry point with display breakdowns.
pub fn hydration_target(
    weight_kg: f64,
    activity: ActivityLevel,
    climate: Climate,
) -> MetricResult<HydrationReport> {
    validate_weight_kg(weight_kg)?;

    let total_ml = hydration_target_ml(weight_kg, activity, climate);
    Ok(HydrationReport {
        total_ml,
        liters: round_to(total_ml as f64 / 1000.0, 1),
        fluid_oz: (total_ml as f64 / ML_PER_FL_OZ).round() as i32,
        glasses: round_to(total_ml as f64 / GLASS_ML, 1),
        per_meal_ml: ((total_ml as f64) / 4.0).round() as i32,
        activity,
        climate,
    })
}
