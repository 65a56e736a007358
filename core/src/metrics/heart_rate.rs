//! Maximum heart rate and training zones
//!
//! Max HR via Tanaka (208 - 0.7 x age) or Fox (220 - age), caller's
//! choice. Two parallel five-band zone sets are always computed: simple
//! percent-of-max bands at 50-100%, and Karvonen bands anchored on heart
//! rate reserve (max - resting). The caller picks which set to display.

use serde::{Deserialize, Serialize};

use crate::errors::MetricResult;
use crate::types::{ActivityLevel, MaxHrFormula};
use crate::validation::{validate_age, validate_resting_hr};

/// Zone boundary percentages, low edge of zone 1 through max.
const ZONE_PERCENTAGES: [f64; 6] = [0.50, 0.60, 0.70, 0.80, 0.90, 1.00];

/// Zone display names, zone 1 through 5.
const ZONE_NAMES: [&str; 5] = ["Recovery", "Aerobic", "Tempo", "VO2 Max", "Anaerobic"];

/// One training zone band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBand {
    /// Zone number, 1-5.
    pub zone: u8,
    pub name: String,
    pub min_bpm: i32,
    pub max_bpm: i32,
}

/// Complete heart rate report: max HR plus both zone sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateZones {
    pub max_hr: i32,
    pub resting_hr: i32,
    /// Max HR minus resting HR.
    pub heart_rate_reserve: i32,
    pub formula: MaxHrFormula,
    /// Carried through for the caller's training-guidance display.
    pub fitness_level: ActivityLevel,
    /// Percent-of-max bands at 50/60/70/80/90-100%.
    pub percent_of_max: Vec<ZoneBand>,
    /// Karvonen bands: resting + reserve x pct at the same percentages.
    pub karvonen: Vec<ZoneBand>,
}

/// Estimated maximum heart rate for an age, rounded to whole bpm.
pub fn max_heart_rate(age_years: i32, formula: MaxHrFormula) -> i32 {
    match formula {
        MaxHrFormula::Tanaka => (208.0 - 0.7 * age_years as f64).round() as i32,
        MaxHrFormula::Fox => 220 - age_years,
    }
}

fn bands_from(anchor: impl Fn(f64) -> f64) -> Vec<ZoneBand> {
    ZONE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| ZoneBand {
            zone: (i + 1) as u8,
            name: (*name).to_string(),
            min_bpm: anchor(ZONE_PERCENTAGES[i]).round() as i32,
            max_bpm: anchor(ZONE_PERCENTAGES[i + 1]).round() as i32,
        })
        .collect()
}

/// Validated entry point: max HR, reserve, and both zone sets.
pub fn heart_rate_zones(
    age_years: i32,
    resting_hr: i32,
    formula: MaxHrFormula,
    fitness_level: ActivityLevel,
) -> MetricResult<HeartRateZones> {
    validate_age(age_years)?;
    validate_resting_hr(resting_hr)?;

    let max_hr = max_heart_rate(age_years, formula);
    let reserve = max_hr - resting_hr;

    let percent_of_max = bands_from(|pct| max_hr as f64 * pct);
    let karvonen = bands_from(|pct| resting_hr as f64 + reserve as f64 * pct);

    Ok(HeartRateZones {
        max_hr,
        resting_hr,
        heart_rate_reserve: reserve,
        formula,
        fitness_level,
        percent_of_max,
        karvonen,
    })
}
