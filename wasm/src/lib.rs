//! FitIQ WASM Module
//!
//! WebAssembly bindings that link the calculator core into the page
//! shell. Scalar fast paths return plain numbers; the report entry points
//! parse the form's string enums, normalize units, run the validated core
//! calculators, and hand structured results back as JSON strings. Dates
//! and timestamps are passed in from the page — the module never reads a
//! clock.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use fitiq_core::consent::{ConsentPreferences, ConsentRecord};
use fitiq_core::units::cm_to_inches;
use fitiq_core::{
    bmi_report, body_fat_report, deficit_plan, energy_report, health_insights, heart_rate_zones,
    hydration_target, ideal_weight, progress_summary, protein_target, ActivityLevel,
    AnthropometricInput, BiologicalSex, Climate, DeficitRate, FrameSize, MaxHrFormula,
    ProgressInput, ProteinGoal, UnitSystem,
};

fn parse<T>(value: &str, label: &str) -> Result<T, JsValue>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| JsValue::from_str(&format!("{}: {}", label, e)))
}

fn parse_date(value: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("date: {}", e)))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, JsValue> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| JsValue::from_str(&format!("timestamp: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn core_err(e: fitiq_core::MetricError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    fitiq_core::bmi(weight_kg, height_cm)
}

/// Calculate TDEE from BMR and an activity multiplier
#[wasm_bindgen]
pub fn calculate_tdee(bmr: i32, activity_multiplier: f64) -> i32 {
    fitiq_core::tdee(bmr, activity_multiplier)
}

/// BMI report: value, classification, healthy weight range
#[wasm_bindgen]
pub fn bmi_report_json(weight: f64, height: f64, unit: &str) -> Result<String, JsValue> {
    let unit: UnitSystem = parse(unit, "unit")?;
    let report = bmi_report(unit.weight_to_kg(weight), unit.length_to_cm(height))
        .map_err(core_err)?;
    to_json(&report)
}

/// Energy report: BMR, TDEE, and the goal calorie ladder
#[wasm_bindgen]
pub fn energy_report_json(
    weight: f64,
    height: f64,
    unit: &str,
    age: i32,
    sex: &str,
    activity: &str,
) -> Result<String, JsValue> {
    let unit: UnitSystem = parse(unit, "unit")?;
    let sex: BiologicalSex = parse(sex, "sex")?;
    let activity: ActivityLevel = parse(activity, "activity")?;
    let report = energy_report(
        unit.weight_to_kg(weight),
        unit.length_to_cm(height),
        age,
        sex,
        activity,
    )
    .map_err(core_err)?;
    to_json(&report)
}

/// Body fat report via the US Navy method. `hip` is required for females.
#[wasm_bindgen]
pub fn body_fat_report_json(
    sex: &str,
    unit: &str,
    waist: f64,
    neck: f64,
    height: f64,
    hip: Option<f64>,
) -> Result<String, JsValue> {
    let sex: BiologicalSex = parse(sex, "sex")?;
    let unit: UnitSystem = parse(unit, "unit")?;
    let report = body_fat_report(
        sex,
        unit.length_to_cm(waist),
        unit.length_to_cm(neck),
        unit.length_to_cm(height),
        hip.map(|h| unit.length_to_cm(h)),
    )
    .map_err(core_err)?;
    to_json(&report)
}

/// Max heart rate plus both training zone sets
#[wasm_bindgen]
pub fn heart_rate_report_json(
    age: i32,
    resting_hr: i32,
    formula: &str,
    fitness_level: &str,
) -> Result<String, JsValue> {
    let formula: MaxHrFormula = parse(formula, "formula")?;
    let fitness_level: ActivityLevel = parse(fitness_level, "fitness level")?;
    let report = heart_rate_zones(age, resting_hr, formula, fitness_level).map_err(core_err)?;
    to_json(&report)
}

/// Ideal weight report: four formulas, BMI range, frame-adjusted range
#[wasm_bindgen]
pub fn ideal_weight_report_json(
    height: f64,
    unit: &str,
    sex: &str,
    frame: &str,
) -> Result<String, JsValue> {
    let unit: UnitSystem = parse(unit, "unit")?;
    let sex: BiologicalSex = parse(sex, "sex")?;
    let frame: FrameSize = parse(frame, "frame")?;
    let height_in = match unit {
        UnitSystem::Metric => cm_to_inches(height),
        UnitSystem::Imperial => height,
    };
    let report = ideal_weight(height_in, sex, frame).map_err(core_err)?;
    to_json(&report)
}

/// Calorie-deficit plan. `today` is an ISO date (YYYY-MM-DD) supplied by
/// the page.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn deficit_plan_json(
    current_weight: f64,
    goal_weight: f64,
    height: f64,
    unit: &str,
    age: i32,
    sex: &str,
    activity: &str,
    rate: &str,
    today: &str,
) -> Result<String, JsValue> {
    let unit: UnitSystem = parse(unit, "unit")?;
    let sex: BiologicalSex = parse(sex, "sex")?;
    let activity: ActivityLevel = parse(activity, "activity")?;
    let rate: DeficitRate = parse(rate, "rate")?;
    let today = parse_date(today)?;
    let plan = deficit_plan(
        unit.weight_to_kg(current_weight),
        unit.weight_to_kg(goal_weight),
        unit.length_to_cm(height),
        age,
        sex,
        activity,
        rate,
        today,
    )
    .map_err(core_err)?;
    to_json(&plan)
}

/// Daily water target with display breakdowns
#[wasm_bindgen]
pub fn hydration_report_json(
    weight: f64,
    unit: &str,
    activity: &str,
    climate: &str,
) -> Result<String, JsValue> {
    let unit: UnitSystem = parse(unit, "unit")?;
    let activity: ActivityLevel = parse(activity, "activity")?;
    let climate: Climate = parse(climate, "climate")?;
    let report = hydration_target(unit.weight_to_kg(weight), activity, climate).map_err(core_err)?;
    to_json(&report)
}

/// Daily protein target with the recommendation band
#[wasm_bindgen]
pub fn protein_report_json(weight: f64, unit: &str, goal: &str) -> Result<String, JsValue> {
    let unit: UnitSystem = parse(unit, "unit")?;
    let goal: ProteinGoal = parse(goal, "goal")?;
    let weight_lbs = match unit {
        UnitSystem::Imperial => weight,
        UnitSystem::Metric => fitiq_core::kg_to_lbs(weight),
    };
    let report = protein_target(weight_lbs, goal).map_err(core_err)?;
    to_json(&report)
}

/// Combined insights for a profile, passed as JSON (SI units)
#[wasm_bindgen]
pub fn health_insights_json(
    profile: &str,
    activity: &str,
    climate: &str,
    frame: &str,
) -> Result<String, JsValue> {
    let profile: AnthropometricInput =
        serde_json::from_str(profile).map_err(|e| JsValue::from_str(&format!("profile: {}", e)))?;
    let activity: ActivityLevel = parse(activity, "activity")?;
    let climate: Climate = parse(climate, "climate")?;
    let frame: FrameSize = parse(frame, "frame")?;
    let insights = health_insights(&profile, activity, climate, frame).map_err(core_err)?;
    to_json(&insights)
}

/// Year-end progress summary over the review form, passed as JSON
#[wasm_bindgen]
pub fn progress_summary_json(input: &str) -> Result<String, JsValue> {
    let input: ProgressInput =
        serde_json::from_str(input).map_err(|e| JsValue::from_str(&format!("input: {}", e)))?;
    let summary = progress_summary(&input).map_err(core_err)?;
    to_json(&summary)
}

/// Analytics payload for a calculator use, for the page's emitter bridge.
/// `now` is an RFC 3339 timestamp supplied by the page.
#[wasm_bindgen]
pub fn calculator_event_json(calculator_name: &str, now: &str) -> Result<String, JsValue> {
    let now = parse_timestamp(now)?;
    to_json(&fitiq_core::analytics::calculator_used(calculator_name, now))
}

/// Analytics payload for a user-facing error
#[wasm_bindgen]
pub fn error_event_json(
    error_type: &str,
    error_message: &str,
    now: &str,
) -> Result<String, JsValue> {
    let now = parse_timestamp(now)?;
    to_json(&fitiq_core::analytics::error_event(error_type, error_message, now))
}

/// Name of the consent cookie
#[wasm_bindgen]
pub fn consent_cookie_name() -> String {
    fitiq_core::consent::CONSENT_COOKIE_NAME.to_string()
}

/// Consent record granting every category, as the stored JSON value.
/// `now` is an RFC 3339 timestamp supplied by the page.
#[wasm_bindgen]
pub fn consent_accept_all(now: &str) -> Result<String, JsValue> {
    let now = parse_timestamp(now)?;
    Ok(ConsentRecord::new(ConsentPreferences::accept_all(), now).to_json())
}

/// Consent record keeping only essential cookies
#[wasm_bindgen]
pub fn consent_reject(now: &str) -> Result<String, JsValue> {
    let now = parse_timestamp(now)?;
    Ok(ConsentRecord::new(ConsentPreferences::reject_non_essential(), now).to_json())
}

/// Consent record with custom category choices
#[wasm_bindgen]
pub fn consent_custom(analytics: bool, advertising: bool, now: &str) -> Result<String, JsValue> {
    let now = parse_timestamp(now)?;
    Ok(ConsentRecord::new(ConsentPreferences::custom(analytics, advertising), now).to_json())
}

/// Whether the banner must be shown for a stored cookie value (missing,
/// unparseable, or expired records all require it)
#[wasm_bindgen]
pub fn consent_banner_required(stored: Option<String>, now: &str) -> Result<bool, JsValue> {
    let now = parse_timestamp(now)?;
    let valid = stored
        .as_deref()
        .and_then(ConsentRecord::from_json)
        .map(|record| !record.is_expired(now))
        .unwrap_or(false);
    Ok(!valid)
}

/// Whether a stored consent value grants analytics
#[wasm_bindgen]
pub fn consent_allows_analytics(stored: &str) -> bool {
    ConsentRecord::from_json(stored)
        .map(|record| record.preferences.analytics)
        .unwrap_or(false)
}
