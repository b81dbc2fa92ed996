//! JSON snapshot codec
//!
//! The stored value is a bare JSON array of records. There is no envelope or
//! version field, so data written by any earlier build of the page reads back
//! as-is. Records are read one at a time: an element that does not form a
//! record is skipped and counted, and the rest of the list still loads.

use thiserror::Error;

use crate::activity::ActivityRecord;

/// Stored value is not a JSON array at all
#[derive(Debug, Error)]
#[error("malformed activity list: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Records read from a stored list
#[derive(Debug, Default, PartialEq)]
pub struct DecodedList {
    pub items: Vec<ActivityRecord>,
    /// Elements that could not be read as records
    pub skipped: usize,
}

/// Serialize the whole list
pub fn encode_list(items: &[ActivityRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Parse a stored list, keeping every element that reads as a record
pub fn decode_list(json: &str) -> Result<DecodedList, DecodeError> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut decoded = DecodedList::default();
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<ActivityRecord>(element) {
            Ok(record) => decoded.items.push(record),
            Err(e) => {
                log::warn!("Skipping stored activity #{index}: {e}");
                decoded.skipped += 1;
            }
        }
    }
    Ok(decoded)
}
