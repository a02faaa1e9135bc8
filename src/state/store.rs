use super::data::{ImageRecord, RecordId};

/// The ImageStore owns every record shown in the gallery.
/// Records keep their insertion order; the list only grows through the
/// picker and only shrinks through an explicit remove.
#[derive(Debug, Default)]
pub struct ImageStore {
    records: Vec<ImageRecord>,
}

impl ImageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the list.
    /// Duplicate ids are not checked; the id generator guarantees uniqueness.
    pub fn add(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    /// Remove the first record with this id and hand it back.
    /// Returns `None` and leaves the list untouched when the id is unknown.
    pub fn remove_by_id(&mut self, id: &RecordId) -> Option<ImageRecord> {
        let index = self.records.iter().position(|record| &record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Current records in insertion order
    pub fn list(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(uri: &str, id: &str) -> ImageRecord {
        ImageRecord::new(uri, RecordId::new(id))
    }

    fn ids(store: &ImageStore) -> Vec<&str> {
        store.list().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_starts_empty() {
        let store = ImageStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_to_empty_store() {
        let mut store = ImageStore::new();
        store.add(record("img://a", "1"));

        assert_eq!(store.list(), &[record("img://a", "1")]);
    }

    #[test]
    fn test_adds_keep_insertion_order() {
        let mut store = ImageStore::new();
        for i in 0..10 {
            store.add(record(&format!("img://{}", i), &i.to_string()));
        }

        assert_eq!(store.len(), 10);
        let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(ids(&store), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_middle_record() {
        let mut store = ImageStore::new();
        store.add(record("img://a", "1"));
        store.add(record("img://b", "2"));
        store.add(record("img://c", "3"));

        let removed = store.remove_by_id(&RecordId::new("2"));

        assert_eq!(removed, Some(record("img://b", "2")));
        assert_eq!(ids(&store), vec!["1", "3"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = ImageStore::new();
        store.add(record("img://a", "1"));
        store.add(record("img://b", "2"));
        let before = store.list().to_vec();

        assert_eq!(store.remove_by_id(&RecordId::new("42")), None);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut store = ImageStore::new();
        store.add(record("img://a", "1"));
        store.add(record("img://b", "1"));

        let removed = store.remove_by_id(&RecordId::new("1"));

        assert_eq!(removed.map(|r| r.uri), Some("img://a".to_string()));
        assert_eq!(store.list(), &[record("img://b", "1")]);
    }

    #[test]
    fn test_list_is_repeatable() {
        let mut store = ImageStore::new();
        store.add(record("img://a", "1"));

        assert_eq!(store.list(), store.list());
        assert!(store.contains(&RecordId::new("1")));
        assert_eq!(store.get(&RecordId::new("1")).map(|r| r.uri.as_str()), Some("img://a"));
    }
}
