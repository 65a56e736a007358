//! Combined health insights
//!
//! One profile in, every applicable calculator out — the composition the
//! dashboard page renders. Sub-reports that need measurements the profile
//! does not carry (body fat without tape measurements, ideal weight below
//! the formulas' height domain) are omitted rather than failing the whole
//! report.

use serde::{Deserialize, Serialize};

use crate::errors::MetricResult;
use crate::metrics::bmi::{bmi_report, BmiReport};
use crate::metrics::body_fat::{body_fat_report, BodyFatReport};
use crate::metrics::energy::{energy_report, EnergyReport};
use crate::metrics::hydration::{hydration_target, HydrationReport};
use crate::metrics::ideal_weight::{ideal_weight, IdealWeightReport};
use crate::types::{ActivityLevel, AnthropometricInput, BiologicalSex, Climate, FrameSize};
use crate::units::cm_to_inches;
use crate::validation::validate_input;

/// Everything the insights panel shows for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInsights {
    pub bmi: BmiReport,
    pub energy: EnergyReport,
    pub hydration: HydrationReport,
    /// Omitted when the height is below the formulas' 5-foot domain.
    pub ideal_weight: Option<IdealWeightReport>,
    /// Omitted when the profile has no tape measurements.
    pub body_fat: Option<BodyFatReport>,
}

/// Validated entry point composing the individual calculators.
pub fn health_insights(
    input: &AnthropometricInput,
    activity: ActivityLevel,
    climate: Climate,
    frame: FrameSize,
) -> MetricResult<HealthInsights> {
    validate_input(input)?;

    let bmi = bmi_report(input.weight_kg, input.height_cm)?;
    let energy = energy_report(
        input.weight_kg,
        input.height_cm,
        input.age_years,
        input.sex,
        activity,
    )?;
    let hydration = hydration_target(input.weight_kg, activity, climate)?;

    let height_in = cm_to_inches(input.height_cm);
    let ideal = if height_in >= 60.0 {
        Some(ideal_weight(height_in, input.sex, frame)?)
    } else {
        None
    };

    let body_fat = match (input.sex, input.waist_cm, input.neck_cm) {
        (BiologicalSex::Male, Some(waist), Some(neck)) => Some(body_fat_report(
            input.sex,
            waist,
            neck,
            input.height_cm,
            None,
        )?),
        (BiologicalSex::Female, Some(waist), Some(neck)) => match input.hip_cm {
            Some(hip) => Some(body_fat_report(
                input.sex,
                waist,
                neck,
                input.height_cm,
                Some(hip),
            )?),
            None => None,
        },
        _ => None,
    };

    Ok(HealthInsights {
        bmi,
        energy,
        hydration,
        ideal_weight: ideal,
        body_fat,
    })
}
