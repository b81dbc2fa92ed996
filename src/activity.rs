//! Activity records and the fixed category set
//!
//! Records are plain values: the store appends and removes them but never
//! edits one in place.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Category labels in selector order. The first entry is the default.
pub const ACTIVITY_TYPES: [&str; 9] = [
    "Education",
    "Recreational",
    "Social",
    "Diy",
    "Charity",
    "Cooking",
    "Relaxation",
    "Music",
    "Busywork",
];

/// Activity category
///
/// Labels outside the fixed set are kept verbatim in `Other` so stored data
/// is never dropped for carrying an unexpected category. Two categories are
/// equal when their labels are, so `Other("Music")` and `Music` compare equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    #[default]
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
    Other(String),
}

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Education => "Education",
            ActivityType::Recreational => "Recreational",
            ActivityType::Social => "Social",
            ActivityType::Diy => "Diy",
            ActivityType::Charity => "Charity",
            ActivityType::Cooking => "Cooking",
            ActivityType::Relaxation => "Relaxation",
            ActivityType::Music => "Music",
            ActivityType::Busywork => "Busywork",
            ActivityType::Other(label) => label,
        }
    }

    /// Parse one of the known labels, spelled exactly as in the selector
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Education" => Some(ActivityType::Education),
            "Recreational" => Some(ActivityType::Recreational),
            "Social" => Some(ActivityType::Social),
            "Diy" => Some(ActivityType::Diy),
            "Charity" => Some(ActivityType::Charity),
            "Cooking" => Some(ActivityType::Cooking),
            "Relaxation" => Some(ActivityType::Relaxation),
            "Music" => Some(ActivityType::Music),
            "Busywork" => Some(ActivityType::Busywork),
            _ => None,
        }
    }

    /// Any label, falling back to `Other` for unknown ones
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label).unwrap_or_else(|| ActivityType::Other(label.to_string()))
    }

    /// The fixed categories in selector order
    pub fn all() -> impl Iterator<Item = ActivityType> {
        ACTIVITY_TYPES.iter().map(|label| Self::from_label(label))
    }
}

impl PartialEq for ActivityType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ActivityType {}

impl Hash for ActivityType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for ActivityType {
    fn from(label: String) -> Self {
        match Self::from_str(&label) {
            Some(known) => known,
            None => ActivityType::Other(label),
        }
    }
}

impl From<ActivityType> for String {
    fn from(kind: ActivityType) -> Self {
        match kind {
            ActivityType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single activity entry
///
/// Field names on the wire match what the page has always stored under
/// `tasks`, so lists written by earlier builds load unchanged. Missing
/// optional fields read as their form defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// What to do
    pub activity: String,
    /// Cost, currency-agnostic
    pub price: f64,
    /// Category
    #[serde(rename = "type", default)]
    pub kind: ActivityType,
    /// Whether the activity has to be booked ahead
    #[serde(default)]
    pub booking_required: bool,
    /// Accessibility score (0.0 - 1.0, step 0.1)
    #[serde(default, deserialize_with = "score_or_zero")]
    pub accessibility: f64,
}

impl ActivityRecord {
    /// Record with booking off and accessibility 0.0
    pub fn new(activity: impl Into<String>, price: f64, kind: ActivityType) -> Self {
        Self {
            activity: activity.into(),
            price,
            kind,
            booking_required: false,
            accessibility: 0.0,
        }
    }

    pub fn with_booking(mut self, booking_required: bool) -> Self {
        self.booking_required = booking_required;
        self
    }

    pub fn with_accessibility(mut self, accessibility: f64) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Check the insertion invariant: non-blank label, positive finite price.
    /// Category and accessibility are taken as supplied.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.activity.trim().is_empty() {
            return Err(ValidationError::EmptyActivity);
        }
        if !(self.price > 0.0 && self.price.is_finite()) {
            return Err(ValidationError::NonPositivePrice(self.price));
        }
        Ok(())
    }
}

/// JSON writes non-finite numbers as `null`; read those back as 0.0
fn score_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
