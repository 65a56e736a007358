//! Ideal body weight
//!
//! Four historical linear estimators (Robinson 1983, Miller 1983, Devine
//! 1974, Hamwi 1964), each base + slope x inches over 5 feet, with
//! sex-specific coefficients, plus the weight range implied by healthy BMI
//! bounds. The displayed recommendation is the four-formula average scaled
//! by a frame-size multiplier pair — a range, not a point estimate.

use serde::{Deserialize, Serialize};

use crate::errors::MetricResult;
use crate::metrics::bmi::{HEALTHY_BMI_MAX, HEALTHY_BMI_MIN};
use crate::types::{BiologicalSex, FrameSize};
use crate::units::{inches_to_cm, round_to};
use crate::validation::validate_height_inches;

/// Base weight (kg at 5 feet) and slope (kg per inch over 5 feet).
#[derive(Debug, Clone, Copy)]
pub struct IbwCoefficients {
    pub base_kg: f64,
    pub kg_per_inch: f64,
}

/// One ideal-weight formula with its sex-specific coefficients.
#[derive(Debug, Clone, Copy)]
pub struct IbwFormula {
    pub name: &'static str,
    pub male: IbwCoefficients,
    pub female: IbwCoefficients,
}

impl IbwFormula {
    /// Evaluate for a sex and height in inches.
    pub fn estimate_kg(&self, height_in: f64, sex: BiologicalSex) -> f64 {
        let c = match sex {
            BiologicalSex::Male => self.male,
            BiologicalSex::Female => self.female,
        };
        c.base_kg + c.kg_per_inch * (height_in - 60.0)
    }
}

/// The four published formulas (8 coefficient pairs total).
pub static IBW_FORMULAS: [IbwFormula; 4] = [
    IbwFormula {
        name: "Robinson",
        male: IbwCoefficients { base_kg: 52.0, kg_per_inch: 1.9 },
        female: IbwCoefficients { base_kg: 49.0, kg_per_inch: 1.7 },
    },
    IbwFormula {
        name: "Miller",
        male: IbwCoefficients { base_kg: 56.2, kg_per_inch: 1.41 },
        female: IbwCoefficients { base_kg: 53.1, kg_per_inch: 1.36 },
    },
    IbwFormula {
        name: "Devine",
        male: IbwCoefficients { base_kg: 50.0, kg_per_inch: 2.3 },
        female: IbwCoefficients { base_kg: 45.5, kg_per_inch: 2.3 },
    },
    IbwFormula {
        name: "Hamwi",
        male: IbwCoefficients { base_kg: 48.0, kg_per_inch: 2.7 },
        female: IbwCoefficients { base_kg: 45.5, kg_per_inch: 2.2 },
    },
];

/// An inclusive weight range in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRangeKg {
    pub min: f64,
    pub max: f64,
}

impl WeightRangeKg {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Complete ideal-weight report for display. All weights in kg, 1 decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightReport {
    pub robinson_kg: f64,
    pub miller_kg: f64,
    pub devine_kg: f64,
    pub hamwi_kg: f64,
    /// Mean of the four formula estimates.
    pub average_kg: f64,
    /// Range implied by healthy BMI bounds at this height.
    pub bmi_range_kg: WeightRangeKg,
    pub frame: FrameSize,
    /// Four-formula average scaled by the frame multiplier pair.
    pub frame_adjusted_kg: WeightRangeKg,
    pub sex: BiologicalSex,
}

/// Weight range implied by the healthy BMI bounds at a height in inches.
pub fn bmi_weight_range_kg(height_in: f64) -> WeightRangeKg {
    let height_m = inches_to_cm(height_in) / 100.0;
    let height_m_sq = height_m * height_m;
    WeightRangeKg {
        min: round_to(HEALTHY_BMI_MIN * height_m_sq, 1),
        max: round_to(HEALTHY_BMI_MAX * height_m_sq, 1),
    }
}

/// Validated entry point. Heights below 5 feet are outside the formulas'
/// published domain and are rejected.
pub fn ideal_weight(
    height_in: f64,
    sex: BiologicalSex,
    frame: FrameSize,
) -> MetricResult<IdealWeightReport> {
    validate_height_inches(height_in)?;

    let estimates: Vec<f64> = IBW_FORMULAS
        .iter()
        .map(|f| f.estimate_kg(height_in, sex))
        .collect();
    let average = estimates.iter().sum::<f64>() / estimates.len() as f64;

    let (low_mult, high_mult) = frame.multipliers();

    Ok(IdealWeightReport {
        robinson_kg: round_to(estimates[0], 1),
        miller_kg: round_to(estimates[1], 1),
        devine_kg: round_to(estimates[2], 1),
        hamwi_kg: round_to(estimates[3], 1),
        average_kg: round_to(average, 1),
        bmi_range_kg: bmi_weight_range_kg(height_in),
        frame,
        frame_adjusted_kg: WeightRangeKg {
            min: round_to(average * low_mult, 1),
            max: round_to(average * high_mult, 1),
        },
        sex,
    })
}
