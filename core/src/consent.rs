//! Cookie-consent preferences
//!
//! The consent record is a small JSON document with a 365-day expiry,
//! stored by the page shell (cookie mechanics — escaping, path, SameSite —
//! live there, behind [`ConsentStore`]). This module owns the preference
//! semantics: essential is always on, expired or unparseable records are
//! discarded, and the banner is required until a valid decision exists.
//! Single-client storage, last writer wins.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cookie under which the consent record is stored.
pub const CONSENT_COOKIE_NAME: &str = "fitiq_cookie_consent";

/// Days a consent decision stays valid.
pub const CONSENT_TTL_DAYS: i64 = 365;

/// Per-category consent choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentPreferences {
    /// Always true; required for the site to function.
    pub essential: bool,
    pub analytics: bool,
    pub advertising: bool,
}

impl Default for ConsentPreferences {
    fn default() -> Self {
        Self {
            essential: true,
            analytics: false,
            advertising: false,
        }
    }
}

impl ConsentPreferences {
    /// Grant every category.
    pub fn accept_all() -> Self {
        Self {
            essential: true,
            analytics: true,
            advertising: true,
        }
    }

    /// Keep only the essential category.
    pub fn reject_non_essential() -> Self {
        Self::default()
    }

    /// Custom per-category choices; essential stays pinned on.
    pub fn custom(analytics: bool, advertising: bool) -> Self {
        Self {
            essential: true,
            analytics,
            advertising,
        }
    }

    /// Re-pin essential, whatever a stored record claimed.
    fn normalized(mut self) -> Self {
        self.essential = true;
        self
    }
}

/// A consent decision with its expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub preferences: ConsentPreferences,
    pub expires_at: DateTime<Utc>,
}

impl ConsentRecord {
    /// New record valid for [`CONSENT_TTL_DAYS`] from `now`.
    pub fn new(preferences: ConsentPreferences, now: DateTime<Utc>) -> Self {
        Self {
            preferences: preferences.normalized(),
            expires_at: now + Duration::days(CONSENT_TTL_DAYS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Serialize to the stored JSON value.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a stored JSON value; `None` for unparseable input. Essential
    /// is re-pinned on load.
    pub fn from_json(value: &str) -> Option<Self> {
        serde_json::from_str::<ConsentRecord>(value)
            .ok()
            .map(|record| Self {
                preferences: record.preferences.normalized(),
                expires_at: record.expires_at,
            })
    }
}

/// Storage seam for the serialized consent record; the page shell backs
/// this with the consent cookie.
pub trait ConsentStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str, expires_at: DateTime<Utc>);
}

/// Consent state machine for a page visit.
pub struct ConsentManager<S: ConsentStore> {
    store: S,
    preferences: ConsentPreferences,
    banner_required: bool,
}

impl<S: ConsentStore> ConsentManager<S> {
    /// Load the stored decision. Missing, unparseable, or expired records
    /// leave the defaults in place and require the banner.
    pub fn init(store: S, now: DateTime<Utc>) -> Self {
        let record = store
            .load()
            .and_then(|value| ConsentRecord::from_json(&value))
            .filter(|record| !record.is_expired(now));

        match record {
            Some(record) => Self {
                store,
                preferences: record.preferences,
                banner_required: false,
            },
            None => {
                debug!("no valid consent record; banner required");
                Self {
                    store,
                    preferences: ConsentPreferences::default(),
                    banner_required: true,
                }
            }
        }
    }

    /// Current effective preferences.
    pub fn preferences(&self) -> ConsentPreferences {
        self.preferences
    }

    /// Whether the banner must be shown.
    pub fn banner_required(&self) -> bool {
        self.banner_required
    }

    /// Record a decision: persist it and dismiss the banner.
    pub fn decide(&mut self, preferences: ConsentPreferences, now: DateTime<Utc>) {
        let record = ConsentRecord::new(preferences, now);
        self.store.save(&record.to_json(), record.expires_at);
        self.preferences = record.preferences;
        self.banner_required = false;
    }
}
