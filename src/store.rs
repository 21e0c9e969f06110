//! Immutable in-memory record store.
//!
//! Ownership model:
//! - `RecordStore` is a cheap-to-clone handle over an `Arc`-shared snapshot.
//! - Every query borrows the store; nothing ever mutates loaded records.
//! - Reloading means building a new store; existing handles keep their snapshot.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::data::TransactionRecord;
use crate::errors::EngineError;

/// Read-only collection of transaction records shared by every query.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Arc<Vec<TransactionRecord>>,
}

impl RecordStore {
    /// Create a store from prebuilt records.
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Load a store from a JSON array of dataset rows.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, EngineError> {
        let records: Vec<TransactionRecord> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    /// Load a store from a JSON dataset file.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let file = File::open(path)?;
        let store = Self::from_json_reader(BufReader::new(file)).map_err(|err| match err {
            EngineError::Json(source) => EngineError::Dataset {
                path: path.to_path_buf(),
                details: source.to_string(),
            },
            other => other,
        })?;
        info!(
            path = %path.display(),
            records = store.len(),
            "loaded sales dataset"
        );
        Ok(store)
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow all records in load order.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Iterate records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    /// Name of the first record for `customer_id`, if any.
    pub fn find_customer_name(&self, customer_id: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.customer_id == customer_id)
            .map(|record| record.customer_name.as_str())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TransactionRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::record;

    #[test]
    fn clones_share_one_snapshot() {
        let store = RecordStore::new(vec![record("C1", "CA", "2024-01-05", 1.0)]);
        let clone = store.clone();
        assert!(Arc::ptr_eq(&store.records, &clone.records));
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn finds_first_customer_name() {
        let mut first = record("C1", "CA", "2024-01-05", 1.0);
        first.customer_name = "Ada".into();
        let mut second = record("C1", "NY", "2024-01-06", 1.0);
        second.customer_name = "Ada Later".into();
        let store: RecordStore = vec![first, second].into_iter().collect();
        assert_eq!(store.find_customer_name("C1"), Some("Ada"));
        assert_eq!(store.find_customer_name("C9"), None);
    }

    #[test]
    fn parses_json_array() {
        let raw = r#"[{
            "Customer ID": "C1", "Customer Name": "Ada", "State": "CA", "City": "LA",
            "Product ID": "P1", "Product Name": "Lamp", "Category": "Furniture",
            "Sub-Category": "Furnishings", "Segment": "Consumer",
            "Order Date": "2024-01-05", "Sales": 10.5, "Quantity": 1,
            "Discount": 0.0, "Profit": 2.25
        }]"#;
        let store = RecordStore::from_json_reader(raw.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].city, "LA");
    }

    #[test]
    fn empty_store_is_empty() {
        let store = RecordStore::default();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
