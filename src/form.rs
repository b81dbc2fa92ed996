//! Entry form state
//!
//! Mirrors the page's input fields. Raw values arrive as strings from the
//! DOM and are read the way the browser reads a number input.

use crate::activity::{ActivityRecord, ActivityType};
use crate::error::StoreError;
use crate::persistence::KeyValueStorage;
use crate::store::ActivityListStore;

/// Read a number input's value: blank is 0, anything unparsable is NaN
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Transient form fields
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub activity: String,
    pub price: f64,
    pub kind: ActivityType,
    pub booking_required: bool,
    pub accessibility: f64,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: 0.0,
            kind: ActivityType::default(),
            booking_required: false,
            accessibility: 0.0,
        }
    }
}

impl ActivityForm {
    pub fn set_activity(&mut self, text: &str) {
        self.activity = text.to_string();
    }

    pub fn set_price_input(&mut self, raw: &str) {
        self.price = parse_number(raw);
    }

    /// Any label is taken; unknown ones are kept verbatim
    pub fn set_type_input(&mut self, label: &str) {
        self.kind = ActivityType::from_label(label);
    }

    pub fn set_booking_required(&mut self, checked: bool) {
        self.booking_required = checked;
    }

    pub fn set_accessibility_input(&mut self, raw: &str) {
        self.accessibility = parse_number(raw);
    }

    /// Record built from the current field values
    pub fn candidate(&self) -> ActivityRecord {
        ActivityRecord::new(self.activity.clone(), self.price, self.kind.clone())
            .with_booking(self.booking_required)
            .with_accessibility(self.accessibility)
    }

    /// Hand the candidate to the store; clear the fields if it was added
    pub fn submit<S: KeyValueStorage>(
        &mut self,
        store: &mut ActivityListStore<S>,
    ) -> Result<(), StoreError> {
        store.add(self.candidate())?;
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
