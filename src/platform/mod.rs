//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, memory elsewhere)

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

use crate::persistence::KeyValueStorage;

/// Storage backend for the current platform
#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Box<dyn KeyValueStorage> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("LocalStorage unavailable ({e}), changes will not survive a reload");
            Box::new(crate::persistence::MemoryStorage::new())
        }
    }
}

/// Storage backend for the current platform
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Box<dyn KeyValueStorage> {
    Box::new(crate::persistence::MemoryStorage::new())
}
