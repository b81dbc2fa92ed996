//! Key-value persistence for the activity list
//!
//! - `KeyValueStorage`: the seam between the store and a backend
//! - `MemoryStorage`: in-process backend (native builds, tests)
//! - `codec`: JSON snapshot format of the whole list
//!
//! The browser backend lives in `platform`.

pub mod codec;
pub mod memory;

pub use codec::{DecodeError, DecodedList, decode_list, encode_list};
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Minimal string key-value store, shaped like the Web Storage API
pub trait KeyValueStorage {
    /// Read the value under `key`; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
