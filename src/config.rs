//! Store configuration

use crate::consts;

/// Where the store keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key holding the serialized activity list
    pub storage_key: String,
    /// Key that receives an unreadable blob before it can be overwritten.
    /// `None` disables the backup.
    pub corrupt_backup_key: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_string(),
            corrupt_backup_key: Some(consts::CORRUPT_BACKUP_KEY.to_string()),
        }
    }
}
