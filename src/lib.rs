//! Activity List - a browser to-do list of activities
//!
//! Core modules:
//! - `activity`: Activity records and the fixed category set
//! - `store`: The list, hydrated from and persisted to key-value storage
//! - `persistence`: Storage seam, in-memory backend, JSON codec
//! - `platform`: Browser LocalStorage backend
//! - `form`: Entry form state
//! - `view`: Display text

pub mod activity;
pub mod config;
pub mod error;
pub mod form;
pub mod persistence;
pub mod platform;
pub mod store;
pub mod view;

pub use activity::{ACTIVITY_TYPES, ActivityRecord, ActivityType};
pub use config::StoreConfig;
pub use error::{StorageError, StoreError, ValidationError};
pub use form::ActivityForm;
pub use persistence::{KeyValueStorage, MemoryStorage};
pub use store::{ActivityListStore, Hydration};

/// Application constants
pub mod consts {
    /// LocalStorage key holding the activity list
    pub const STORAGE_KEY: &str = "tasks";
    /// Where an unreadable list is copied before it gets overwritten
    pub const CORRUPT_BACKUP_KEY: &str = "tasks.corrupt";

    /// Accessibility slider range and step
    pub const ACCESSIBILITY_MIN: f64 = 0.0;
    pub const ACCESSIBILITY_MAX: f64 = 1.0;
    pub const ACCESSIBILITY_STEP: f64 = 0.1;
}
