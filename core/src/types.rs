//! Shared calculator enums and input records
//!
//! Tier tables (activity multipliers, deficit-rate presets, protein goals,
//! frame adjustments, climate multipliers) are enum-backed constant tables
//! rather than branching code, so each calculator reads its factors from
//! the same place the tests do.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Biological Sex
// ============================================================================

/// Biological sex for health calculations.
///
/// The underlying formulas (Mifflin-St Jeor, US Navy body fat, the ideal
/// weight coefficient tables) are only defined for two sex categories;
/// this is a property of the published formulas, not a product choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Minimum safe daily calorie target used by the deficit planner.
    pub fn calorie_floor(&self) -> i32 {
        match self {
            BiologicalSex::Male => 1500,
            BiologicalSex::Female => 1200,
        }
    }
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level tier shared by the TDEE and water-intake calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job, or athletic training
    ExtraActive,
}

impl ActivityLevel {
    /// All tiers in ascending order.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Fraction of the hydration base added as an activity bonus.
    pub fn hydration_bonus(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 0.0,
            ActivityLevel::LightlyActive => 0.1,
            ActivityLevel::ModeratelyActive => 0.2,
            ActivityLevel::VeryActive => 0.3,
            ActivityLevel::ExtraActive => 0.4,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or athletic training",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    /// Accepts both the energy form's spellings and the water form's
    /// hyphenated tiers (where the top tier is called "athlete").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" | "lightly-active" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" | "moderately-active" | "moderate" => {
                Ok(ActivityLevel::ModeratelyActive)
            }
            "very_active" | "very-active" | "very" => Ok(ActivityLevel::VeryActive),
            "extra_active" | "extra-active" | "athlete" => Ok(ActivityLevel::ExtraActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

// ============================================================================
// Climate
// ============================================================================

/// Climate tier for the water-intake calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    #[default]
    Cold,
    Warm,
    Hot,
    VeryHot,
}

impl Climate {
    /// All tiers in ascending order.
    pub const ALL: [Climate; 4] = [Climate::Cold, Climate::Warm, Climate::Hot, Climate::VeryHot];

    /// Multiplier applied to base-plus-activity hydration.
    pub fn multiplier(&self) -> f64 {
        match self {
            Climate::Cold => 1.0,
            Climate::Warm => 1.1,
            Climate::Hot => 1.25,
            Climate::VeryHot => 1.4,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Climate::Cold => "Cold/Temperate",
            Climate::Warm => "Warm",
            Climate::Hot => "Hot/Humid",
            Climate::VeryHot => "Very Hot",
        }
    }
}

impl std::str::FromStr for Climate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cold" | "temperate" => Ok(Climate::Cold),
            "warm" => Ok(Climate::Warm),
            "hot" | "humid" => Ok(Climate::Hot),
            "very_hot" | "very-hot" => Ok(Climate::VeryHot),
            _ => Err(format!("Unknown climate: {}", s)),
        }
    }
}

// ============================================================================
// Frame Size
// ============================================================================

/// Body frame size for the ideal-weight adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FrameSize {
    /// (low, high) multipliers applied to the averaged formula estimate.
    pub fn multipliers(&self) -> (f64, f64) {
        match self {
            FrameSize::Small => (0.90, 0.95),
            FrameSize::Medium => (0.95, 1.05),
            FrameSize::Large => (1.05, 1.10),
        }
    }
}

impl std::str::FromStr for FrameSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(FrameSize::Small),
            "medium" => Ok(FrameSize::Medium),
            "large" => Ok(FrameSize::Large),
            _ => Err(format!("Unknown frame size: {}", s)),
        }
    }
}

// ============================================================================
// Max Heart Rate Formula
// ============================================================================

/// Formula used to estimate maximum heart rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaxHrFormula {
    /// Tanaka (2001): 208 - 0.7 x age
    #[default]
    Tanaka,
    /// Fox (1970): 220 - age
    Fox,
}

impl std::str::FromStr for MaxHrFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanaka" => Ok(MaxHrFormula::Tanaka),
            "fox" => Ok(MaxHrFormula::Fox),
            _ => Err(format!("Unknown max heart rate formula: {}", s)),
        }
    }
}

// ============================================================================
// Deficit Rate Preset
// ============================================================================

/// Weight-loss rate preset for the calorie-deficit planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeficitRate {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
    Maximum,
}

impl DeficitRate {
    /// Requested calorie deficit per day.
    pub fn deficit_per_day(&self) -> i32 {
        match self {
            DeficitRate::Conservative => 250,
            DeficitRate::Moderate => 500,
            DeficitRate::Aggressive => 750,
            DeficitRate::Maximum => 1000,
        }
    }

    /// Expected loss rate shown alongside the preset. Display only; the
    /// timeline math uses the effective daily deficit.
    pub fn expected_loss_lbs_per_week(&self) -> f64 {
        match self {
            DeficitRate::Conservative => 0.5,
            DeficitRate::Moderate => 1.0,
            DeficitRate::Aggressive => 1.5,
            DeficitRate::Maximum => 2.0,
        }
    }
}

impl std::str::FromStr for DeficitRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(DeficitRate::Conservative),
            "moderate" => Ok(DeficitRate::Moderate),
            "aggressive" => Ok(DeficitRate::Aggressive),
            "maximum" => Ok(DeficitRate::Maximum),
            _ => Err(format!("Unknown deficit rate: {}", s)),
        }
    }
}

// ============================================================================
// Protein Goal
// ============================================================================

/// Fitness goal driving the daily protein target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProteinGoal {
    WeightLoss,
    #[default]
    Maintenance,
    MuscleGain,
    Athletic,
}

impl ProteinGoal {
    /// Grams of protein per pound of body weight.
    pub fn grams_per_lb(&self) -> f64 {
        match self {
            ProteinGoal::WeightLoss => 0.8,
            ProteinGoal::Maintenance => 1.0,
            ProteinGoal::MuscleGain => 1.2,
            ProteinGoal::Athletic => 1.4,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ProteinGoal::WeightLoss => "Weight Loss",
            ProteinGoal::Maintenance => "Maintenance",
            ProteinGoal::MuscleGain => "Muscle Gain",
            ProteinGoal::Athletic => "Athletic Performance",
        }
    }
}

impl std::str::FromStr for ProteinGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight_loss" | "weight-loss" => Ok(ProteinGoal::WeightLoss),
            "maintenance" => Ok(ProteinGoal::Maintenance),
            "muscle_gain" | "muscle-gain" => Ok(ProteinGoal::MuscleGain),
            "athletic" => Ok(ProteinGoal::Athletic),
            _ => Err(format!("Unknown protein goal: {}", s)),
        }
    }
}

// ============================================================================
// Input Records
// ============================================================================

/// Body measurements collected by the calculator forms, normalized to SI.
///
/// Circumference fields are only required by the body-fat calculator;
/// their cross-field preconditions (waist vs. neck) are checked by that
/// entry point, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnthropometricInput {
    #[validate(range(min = 20.0, max = 500.0, message = "must be between 20 and 500 kg"))]
    pub weight_kg: f64,
    #[validate(range(min = 50.0, max = 300.0, message = "must be between 50 and 300 cm"))]
    pub height_cm: f64,
    #[validate(range(min = 1, max = 119, message = "must be between 1 and 119 years"))]
    pub age_years: i32,
    pub sex: BiologicalSex,
    #[validate(range(min = 10.0, max = 300.0, message = "must be between 10 and 300 cm"))]
    pub neck_cm: Option<f64>,
    #[validate(range(min = 10.0, max = 300.0, message = "must be between 10 and 300 cm"))]
    pub waist_cm: Option<f64>,
    #[validate(range(min = 10.0, max = 300.0, message = "must be between 10 and 300 cm"))]
    pub hip_cm: Option<f64>,
}

/// Year-end progress form input. Weights are in pounds; the badge
/// thresholds are pound-denominated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProgressInput {
    #[validate(range(min = 44.0, max = 1100.0, message = "must be between 44 and 1100 lbs"))]
    pub start_weight_lbs: f64,
    #[validate(range(min = 44.0, max = 1100.0, message = "must be between 44 and 1100 lbs"))]
    pub end_weight_lbs: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub start_body_fat_pct: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub end_body_fat_pct: Option<f64>,
    #[validate(range(min = 0.0, max = 21.0, message = "must be between 0 and 21"))]
    pub start_workouts_per_week: f64,
    #[validate(range(min = 0.0, max = 21.0, message = "must be between 0 and 21"))]
    pub end_workouts_per_week: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub goal_achievement_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biggest_win: Option<String>,
}
