//! Activity list store
//!
//! Owns the in-memory list and keeps storage in step with it: hydrate once at
//! startup, then write a full snapshot after every successful mutation. The
//! in-memory list is authoritative; a failed write is logged and the store
//! carries on unsynced until the next successful one.

use crate::activity::ActivityRecord;
use crate::config::StoreConfig;
use crate::error::{StorageError, StoreError};
use crate::persistence::{KeyValueStorage, decode_list, encode_list};

/// Store lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreState {
    /// Created, `hydrate` not run yet. Mutations are refused.
    Uninitialized,
    Ready,
}

/// How `hydrate` obtained the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Nothing stored yet
    Fresh,
    /// Stored list loaded
    Restored { count: usize },
    /// Stored list loaded without the elements that were not records
    Salvaged { count: usize, skipped: usize },
    /// Stored data was unreadable; started empty
    Recovered,
}

/// Ordered activity list persisted under a single storage key
pub struct ActivityListStore<S: KeyValueStorage> {
    items: Vec<ActivityRecord>,
    storage: S,
    config: StoreConfig,
    state: StoreState,
    synced: bool,
}

impl<S: KeyValueStorage> ActivityListStore<S> {
    /// Empty, unhydrated store using the default keys
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self {
            items: Vec::new(),
            storage,
            config,
            state: StoreState::Uninitialized,
            synced: false,
        }
    }

    /// Create and hydrate in one step
    pub fn open(storage: S, config: StoreConfig) -> (Self, Hydration) {
        let mut store = Self::with_config(storage, config);
        let hydration = store.load();
        (store, hydration)
    }

    /// Replace the in-memory list with what storage holds.
    ///
    /// Runs once per store. Absent data gives an empty list. Elements that
    /// are not records are dropped from the list, and unreadable data gives an
    /// empty list; either way the raw value is copied to the backup key first.
    /// The primary key is never written here.
    pub fn hydrate(&mut self) -> Result<Hydration, StoreError> {
        if self.state == StoreState::Ready {
            return Err(StoreError::AlreadyHydrated);
        }
        Ok(self.load())
    }

    fn load(&mut self) -> Hydration {
        let key = &self.config.storage_key;
        let (items, hydration) = match self.storage.get_item(key) {
            Ok(None) => {
                log::info!("No stored activities, starting fresh");
                (Vec::new(), Hydration::Fresh)
            }
            Ok(Some(raw)) => match decode_list(&raw) {
                Ok(decoded) if decoded.skipped == 0 => {
                    log::info!("Loaded {} activities", decoded.items.len());
                    let count = decoded.items.len();
                    (decoded.items, Hydration::Restored { count })
                }
                Ok(decoded) => {
                    let count = decoded.items.len();
                    let skipped = decoded.skipped;
                    log::warn!("Loaded {count} activities, skipped {skipped} unreadable ones");
                    self.backup_corrupt(&raw);
                    (decoded.items, Hydration::Salvaged { count, skipped })
                }
                Err(e) => {
                    log::warn!("Stored activities are unreadable ({e}), starting empty");
                    self.backup_corrupt(&raw);
                    (Vec::new(), Hydration::Recovered)
                }
            },
            Err(e) => {
                log::warn!("Could not read stored activities ({e}), starting empty");
                (Vec::new(), Hydration::Recovered)
            }
        };

        self.items = items;
        self.state = StoreState::Ready;
        self.synced = matches!(hydration, Hydration::Fresh | Hydration::Restored { .. });
        hydration
    }

    /// Copy `raw` to the backup key. An existing backup is kept, so the
    /// first unreadable value seen is the one preserved.
    fn backup_corrupt(&mut self, raw: &str) {
        let Some(backup_key) = self.config.corrupt_backup_key.as_deref() else {
            return;
        };
        if let Ok(Some(_)) = self.storage.get_item(backup_key) {
            log::info!("Keeping earlier backup in '{backup_key}'");
            return;
        }
        match self.storage.set_item(backup_key, raw) {
            Ok(()) => log::info!("Unreadable activity data copied to '{backup_key}'"),
            Err(e) => log::warn!("Could not back up unreadable activity data: {e}"),
        }
    }

    /// Write the whole list under the storage key, replacing what was there
    pub fn persist(&mut self) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let result = self.write_snapshot();
        self.synced = result.is_ok();
        match &result {
            Ok(()) => log::info!("Activities saved ({} entries)", self.items.len()),
            Err(e) => log::warn!("Failed to save activities, keeping changes in memory: {e}"),
        }
        result.map_err(StoreError::from)
    }

    fn write_snapshot(&mut self) -> Result<(), StorageError> {
        let json = encode_list(&self.items)?;
        self.storage.set_item(&self.config.storage_key, &json)
    }

    /// Append a record.
    ///
    /// Rejects a blank label or a price that is not a positive number,
    /// leaving the list and storage untouched. `Ok` means the record was
    /// appended; the caller should reset its input fields.
    pub fn add(&mut self, candidate: ActivityRecord) -> Result<(), StoreError> {
        self.ensure_ready()?;
        if let Err(e) = candidate.validate() {
            log::debug!("Activity not added: {e}");
            return Err(e.into());
        }

        self.items.push(candidate);
        // Write failures are already logged; memory stays authoritative
        let _ = self.persist();
        Ok(())
    }

    /// Remove the record at `index`, shifting later records down by one
    pub fn remove(&mut self, index: usize) -> Result<ActivityRecord, StoreError> {
        self.ensure_ready()?;
        let len = self.items.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let removed = self.items.remove(index);
        let _ = self.persist();
        Ok(removed)
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ActivityRecord] {
        &self.items
    }

    /// Whether storage matches the in-memory list as of the last write
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Hand back the backend, e.g. to reopen it as after a page reload
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn ensure_ready(&self) -> Result<(), StoreError> {
        match self.state {
            StoreState::Ready => Ok(()),
            StoreState::Uninitialized => Err(StoreError::NotReady),
        }
    }
}
