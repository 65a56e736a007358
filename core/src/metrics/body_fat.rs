//! Body fat estimation, US Navy circumference method
//!
//! Men:   86.010 x log10(waist - neck) - 70.041 x log10(height) + 36.76
//! Women: 163.205 x log10(waist + hip - neck) - 97.684 x log10(height) - 78.387
//!
//! The published coefficients are defined over measurements in inches;
//! inputs here are centimeters and are converted inside the formula.
//! Results are clamped to the physiological [2, 60] band and reported to
//! 1 decimal with the sex-specific classification.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Band, Classification, BODY_FAT_BANDS_FEMALE, BODY_FAT_BANDS_MALE};
use crate::errors::{MetricError, MetricResult};
use crate::types::BiologicalSex;
use crate::units::{cm_to_inches, round_to};
use crate::validation::{validate_circumference_cm, validate_height_cm};

/// Lower clamp for non-physiological results.
pub const BODY_FAT_MIN_PCT: f64 = 2.0;
/// Upper clamp for non-physiological results.
pub const BODY_FAT_MAX_PCT: f64 = 60.0;

/// Complete body fat report for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatReport {
    /// Body fat percentage, clamped to [2, 60], 1 decimal.
    pub body_fat_pct: f64,
    pub sex: BiologicalSex,
    pub classification: Classification,
}

fn clamp_pct(value: f64) -> f64 {
    round_to(value.clamp(BODY_FAT_MIN_PCT, BODY_FAT_MAX_PCT), 1)
}

/// Male Navy formula. Assumes waist > neck (validated at the entry point).
pub fn body_fat_male(waist_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    let girth_in = cm_to_inches(waist_cm - neck_cm);
    let height_in = cm_to_inches(height_cm);
    clamp_pct(86.010 * girth_in.log10() - 70.041 * height_in.log10() + 36.76)
}

/// Female Navy formula. Assumes waist + hip > neck (validated at the
/// entry point).
pub fn body_fat_female(waist_cm: f64, hip_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    let girth_in = cm_to_inches(waist_cm + hip_cm - neck_cm);
    let height_in = cm_to_inches(height_cm);
    clamp_pct(163.205 * girth_in.log10() - 97.684 * height_in.log10() - 78.387)
}

/// Classification bands for a sex.
pub fn body_fat_bands(sex: BiologicalSex) -> &'static [Band] {
    match sex {
        BiologicalSex::Male => &BODY_FAT_BANDS_MALE,
        BiologicalSex::Female => &BODY_FAT_BANDS_FEMALE,
    }
}

/// Classify a body fat percentage.
pub fn classify_body_fat(body_fat_pct: f64, sex: BiologicalSex) -> &'static Band {
    classify(body_fat_pct, body_fat_bands(sex))
}

/// Validated entry point. `hip_cm` is required for females and ignored for
/// males. The log10 arguments must come out positive: waist must exceed
/// neck (male), waist plus hip must exceed neck (female) — violations are
/// validation failures, never clamped.
pub fn body_fat_report(
    sex: BiologicalSex,
    waist_cm: f64,
    neck_cm: f64,
    height_cm: f64,
    hip_cm: Option<f64>,
) -> MetricResult<BodyFatReport> {
    validate_circumference_cm("waist", waist_cm)?;
    validate_circumference_cm("neck", neck_cm)?;
    validate_height_cm(height_cm)?;

    let pct = match sex {
        BiologicalSex::Male => {
            if waist_cm <= neck_cm {
                return Err(MetricError::WaistNotAboveNeck);
            }
            body_fat_male(waist_cm, neck_cm, height_cm)
        }
        BiologicalSex::Female => {
            let hip_cm = hip_cm.ok_or(MetricError::HipRequired)?;
            validate_circumference_cm("hip", hip_cm)?;
            if waist_cm + hip_cm <= neck_cm {
                return Err(MetricError::WaistPlusHipNotAboveNeck);
            }
            body_fat_female(waist_cm, hip_cm, neck_cm, height_cm)
        }
    };

    Ok(BodyFatReport {
        body_fat_pct: pct,
        sex,
        classification: classify_body_fat(pct, sex).to_classification(),
    })
}
