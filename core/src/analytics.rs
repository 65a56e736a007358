//! Analytics event construction and consent-gated emission
//!
//! Events are plain name + JSON-parameter records with an ISO-8601
//! timestamp parameter, matching the page's event vocabulary. The actual
//! emitter (gtag bridge, test buffer) sits behind [`EventSink`]; the
//! [`Tracker`] forwards events only while analytics consent is granted.
//! The clock is always an explicit argument so construction stays pure.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, trace};

use crate::consent::ConsentPreferences;

/// A single analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    /// New event with the timestamp parameter set.
    pub fn new(name: &str, at: DateTime<Utc>) -> Self {
        let mut params = Map::new();
        params.insert(
            "timestamp".to_string(),
            Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Self {
            name: name.to_string(),
            params,
        }
    }

    /// Add a parameter.
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }
}

/// Track calculator usage.
pub fn calculator_used(calculator_name: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("calculator_used", at).with("calculator_name", json!(calculator_name))
}

/// Track a BMI calculation.
pub fn bmi_calculated(bmi: f64, category: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    calculator_used("BMI Calculator", at)
        .with("bmi_value", json!(bmi))
        .with("bmi_category", json!(category))
}

/// Track a body fat calculation.
pub fn body_fat_calculated(body_fat: f64, category: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    calculator_used("Body Fat Calculator", at)
        .with("body_fat_value", json!(body_fat))
        .with("body_fat_category", json!(category))
}

/// Track a TDEE calculation.
pub fn tdee_calculated(bmr: i32, tdee: i32, at: DateTime<Utc>) -> AnalyticsEvent {
    calculator_used("TDEE Calculator", at)
        .with("bmr_value", json!(bmr))
        .with("tdee_value", json!(tdee))
}

/// Track a tool link click.
pub fn tool_clicked(tool_name: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("tool_clicked", at).with("tool_name", json!(tool_name))
}

/// Track a call-to-action click.
pub fn cta_clicked(cta_text: &str, location: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("cta_clicked", at)
        .with("cta_text", json!(cta_text))
        .with("cta_location", json!(location))
}

/// Track a form submission.
pub fn form_submitted(form_name: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("form_submitted", at).with("form_name", json!(form_name))
}

/// Track a user-facing error.
pub fn error_event(error_type: &str, error_message: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("error", at)
        .with("error_type", json!(error_type))
        .with("error_message", json!(error_message))
}

/// Track a scroll-depth milestone (25/50/75/100%).
pub fn scroll_depth(page_name: &str, percentage: u8, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("scroll_depth", at)
        .with("page_name", json!(page_name))
        .with("scroll_percentage", json!(percentage))
}

/// Track time spent on a page.
pub fn page_engagement(page_name: &str, seconds: u64, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("page_engagement", at)
        .with("page_name", json!(page_name))
        .with("engagement_time_seconds", json!(seconds))
}

/// Track a result share.
pub fn share(platform: &str, calculator: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("share", at)
        .with("platform", json!(platform))
        .with("calculator", json!(calculator))
}

/// Track a conversion (e.g. calculator used then article read).
pub fn conversion(conversion_type: &str, at: DateTime<Utc>) -> AnalyticsEvent {
    AnalyticsEvent::new("conversion", at).with("conversion_type", json!(conversion_type))
}

/// Receives consented events; implemented by the page's emitter bridge.
pub trait EventSink {
    fn emit(&self, event: &AnalyticsEvent);
}

/// Forwards events to a sink while analytics consent is granted and
/// silently drops them otherwise.
pub struct Tracker<S: EventSink> {
    sink: S,
    consent: ConsentPreferences,
}

impl<S: EventSink> Tracker<S> {
    pub fn new(sink: S, consent: ConsentPreferences) -> Self {
        Self { sink, consent }
    }

    /// Update the consent the tracker gates on.
    pub fn set_consent(&mut self, consent: ConsentPreferences) {
        self.consent = consent;
    }

    /// Emit the event if analytics consent is granted. Returns whether the
    /// event was forwarded.
    pub fn track(&self, event: &AnalyticsEvent) -> bool {
        if self.consent.analytics {
            debug!(event = %event.name, "tracked");
            self.sink.emit(event);
            true
        } else {
            trace!(event = %event.name, "dropped without analytics consent");
            false
        }
    }
}
