//! Shared data structures for the gallery state
//!
//! These structs represent the data model that flows between
//! the picker, the store and the UI layer.

use chrono::Utc;
use std::fmt;

/// Unique id of a record within one gallery session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single image in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Opaque reference to the image bytes (a local path for the desktop picker)
    pub uri: String,
    /// Unique id, assigned when the record is created
    pub id: RecordId,
}

impl ImageRecord {
    pub fn new(uri: impl Into<String>, id: RecordId) -> Self {
        Self {
            uri: uri.into(),
            id,
        }
    }
}

/// Issues record ids from millisecond timestamps.
///
/// Two adds inside the same millisecond (or a clock stepping backwards)
/// would collide on a raw timestamp, so every id is at least one greater
/// than the previous one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, stamped with the current wall clock
    pub fn next_id(&mut self) -> RecordId {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> RecordId {
        let stamp = now_millis.max(self.last + 1);
        self.last = stamp;
        RecordId(stamp.to_string())
    }
}
