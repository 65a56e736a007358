//! Data-driven classification tables
//!
//! Each metric owns an ordered table of half-open `[low, high)` bands;
//! lookup is first-match-wins. Tables are total: the first band opens at
//! negative infinity and the last closes at positive infinity, so every
//! finite value classifies. A value sitting exactly on a threshold falls
//! into the upper-adjacent band.

use serde::{Deserialize, Serialize};

/// One classification band: a half-open interval with a display label and
/// the CSS color hook the result pages key their styling on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub label: &'static str,
    /// Inclusive lower bound.
    pub low: f64,
    /// Exclusive upper bound.
    pub high: f64,
    pub color_tag: &'static str,
}

impl Band {
    /// Whether a value falls inside this band.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }

    /// Owned, serializable view of this band around a classified value.
    pub fn to_classification(&self) -> Classification {
        Classification {
            label: self.label.to_string(),
            range_low: self.low,
            range_high: self.high,
            color_tag: self.color_tag.to_string(),
        }
    }
}

/// Serializable classification embedded in calculator reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Inclusive lower bound (may be -inf for the bottom band).
    pub range_low: f64,
    /// Exclusive upper bound (may be +inf for the top band).
    pub range_high: f64,
    pub color_tag: String,
}

/// Find the band a value falls into. Tables are constructed total, so a
/// finite value always matches.
pub fn classify(value: f64, bands: &'static [Band]) -> &'static Band {
    bands
        .iter()
        .find(|band| band.contains(value))
        .unwrap_or(&bands[bands.len() - 1])
}

/// BMI categories (WHO adult brackets).
pub static BMI_BANDS: [Band; 4] = [
    Band {
        label: "Underweight",
        low: f64::NEG_INFINITY,
        high: 18.5,
        color_tag: "underweight",
    },
    Band {
        label: "Normal Weight",
        low: 18.5,
        high: 25.0,
        color_tag: "normal",
    },
    Band {
        label: "Overweight",
        low: 25.0,
        high: 30.0,
        color_tag: "overweight",
    },
    Band {
        label: "Obese",
        low: 30.0,
        high: f64::INFINITY,
        color_tag: "obese",
    },
];

/// Body fat categories, male thresholds.
pub static BODY_FAT_BANDS_MALE: [Band; 5] = [
    Band {
        label: "Essential Fat",
        low: f64::NEG_INFINITY,
        high: 6.0,
        color_tag: "underweight",
    },
    Band {
        label: "Athletic",
        low: 6.0,
        high: 14.0,
        color_tag: "normal",
    },
    Band {
        label: "Fit",
        low: 14.0,
        high: 18.0,
        color_tag: "normal",
    },
    Band {
        label: "Average",
        low: 18.0,
        high: 25.0,
        color_tag: "overweight",
    },
    Band {
        label: "Above Average",
        low: 25.0,
        high: f64::INFINITY,
        color_tag: "obese",
    },
];

/// Body fat categories, female thresholds.
pub static BODY_FAT_BANDS_FEMALE: [Band; 5] = [
    Band {
        label: "Essential Fat",
        low: f64::NEG_INFINITY,
        high: 14.0,
        color_tag: "underweight",
    },
    Band {
        label: "Athletic",
        low: 14.0,
        high: 21.0,
        color_tag: "normal",
    },
    Band {
        label: "Fit",
        low: 21.0,
        high: 25.0,
        color_tag: "normal",
    },
    Band {
        label: "Average",
        low: 25.0,
        high: 32.0,
        color_tag: "overweight",
    },
    Band {
        label: "Above Average",
        low: 32.0,
        high: f64::INFINITY,
        color_tag: "obese",
    },
];
