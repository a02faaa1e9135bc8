use super::data::{ImageRecord, RecordId};

/// The record currently open in the detail overlay, if any.
///
/// Holds a copy of the record; the store stays the only owner.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<ImageRecord>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a record, replacing whatever was open before
    pub fn select(&mut self, record: ImageRecord) {
        self.selected = Some(record);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Whether the detail overlay should be visible
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&ImageRecord> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.as_ref().is_some_and(|record| &record.id == id)
    }
}
