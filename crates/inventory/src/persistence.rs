//! CSV persistence for the inventory store.
//!
//! The file has a fixed header (`itemID,Product,Quantity,First Name,Last
//! Name,Phonenumber,Email`) followed by one row per record. Loading is a
//! trusted bulk path: rows are not validated.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use stockroom_core::Field;

use crate::record::Record;
use crate::store::InventoryStore;

/// Storage file used when nothing else is configured.
pub const DEFAULT_STORAGE_FILE: &str = "ProjectStorage.csv";

/// Failure while reading or writing the storage file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be opened, read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not a well-formed storage CSV (bad row, missing column).
    #[error("malformed storage file: {0}")]
    Csv(csv::Error),
}

impl From<csv::Error> for PersistenceError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return PersistenceError::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => PersistenceError::Io(io),
            kind => PersistenceError::Io(std::io::Error::other(format!("{kind:?}"))),
        }
    }
}

impl InventoryStore {
    /// Merge every row of a storage CSV into the store.
    ///
    /// All rows are parsed before the store is touched, so a failure leaves
    /// it unchanged. Returns the number of rows read.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<usize, PersistenceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let rows = csv_reader
            .deserialize::<Record>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.merge_trusted(rows))
    }

    /// Write the header and every record, in store order.
    ///
    /// Returns the number of records written.
    pub fn save_to_writer<W: Write>(&self, writer: W) -> Result<usize, PersistenceError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(Field::ALL.iter().map(Field::column))?;
        let mut count = 0;
        for record in self.list_all() {
            csv_writer.serialize(record)?;
            count += 1;
        }
        csv_writer.flush()?;
        Ok(count)
    }

    /// [`InventoryStore::load_from_reader`] on a file.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let file = File::open(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "cannot open storage file");
        })?;
        let count = self.load_from_reader(file)?;
        tracing::info!(path = %path.display(), rows = count, total = self.len(), "storage loaded");
        Ok(count)
    }

    /// [`InventoryStore::save_to_writer`] on a file, replacing its content.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let file = File::create(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "cannot create storage file");
        })?;
        let count = self.save_to_writer(file)?;
        tracing::info!(path = %path.display(), rows = count, "storage saved");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NewRecord;
    use proptest::prelude::*;

    const HEADER: &str = "itemID,Product,Quantity,First Name,Last Name,Phonenumber,Email\n";

    fn candidate(id: &str, product: &str) -> NewRecord {
        NewRecord {
            item_id: id.to_string(),
            product: product.to_string(),
            quantity: "5".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "123-456-7890".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    fn saved(store: &InventoryStore) -> String {
        let mut buf = Vec::new();
        store.save_to_writer(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_store_still_writes_header() {
        assert_eq!(saved(&InventoryStore::new()), HEADER);
    }

    #[test]
    fn save_writes_rows_in_store_order() {
        let mut store = InventoryStore::new();
        store.add_record(candidate("2", "Widget")).unwrap();
        store.add_record(candidate("1", "Gadget")).unwrap();

        let expected = format!(
            "{HEADER}2,Widget,5,Jane,Doe,123-456-7890,jane@example.com\n\
             1,Gadget,5,Jane,Doe,123-456-7890,jane@example.com\n"
        );
        assert_eq!(saved(&store), expected);
    }

    #[test]
    fn load_skips_validation() {
        let data = format!("{HEADER}abc,W1dget,lots,J,D,555,not-an-email\n");
        let mut store = InventoryStore::new();
        assert_eq!(store.load_from_reader(data.as_bytes()).unwrap(), 1);
        assert!(store.contains("abc"));
        let record = store.list_all().next().unwrap();
        assert_eq!(record.quantity(), "lots");
        assert_eq!(record.email(), "not-an-email");
    }

    #[test]
    fn load_matches_columns_by_name() {
        let data = "Email,Phonenumber,Last Name,First Name,Quantity,Product,itemID\n\
                    jo@example.com,123-456-7890,Doe,Jo,3,Box,7\n";
        let mut store = InventoryStore::new();
        store.load_from_reader(data.as_bytes()).unwrap();
        let record = store.find_record("7").unwrap().unwrap();
        assert_eq!(record.product(), "Box");
        assert_eq!(record.email(), "jo@example.com");
    }

    #[test]
    fn missing_column_fails_whole_load() {
        let data = "itemID,Product,Quantity,First Name,Last Name,Phonenumber\n\
                    1,Box,3,Jo,Doe,123-456-7890\n";
        let mut store = InventoryStore::new();
        store.add_record(candidate("9", "Widget")).unwrap();

        let err = store.load_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PersistenceError::Csv(_)), "{err:?}");
        assert_eq!(store.len(), 1);
        assert!(!store.contains("1"));
    }

    #[test]
    fn short_row_fails_whole_load() {
        let data = format!(
            "{HEADER}1,Box,3,Jo,Doe,123-456-7890,jo@example.com\n2,Box,3\n"
        );
        let mut store = InventoryStore::new();
        assert!(store.load_from_reader(data.as_bytes()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn load_merges_into_existing_content() {
        let mut store = InventoryStore::new();
        store.add_record(candidate("1", "Widget")).unwrap();
        store.add_record(candidate("2", "Widget")).unwrap();

        let data = format!(
            "{HEADER}3,Crate,1,Al,Bo,111-222-3333,al@bo.com\n1,Gadget,9,Al,Bo,111-222-3333,al@bo.com\n"
        );
        assert_eq!(store.load_from_reader(data.as_bytes()).unwrap(), 2);

        let order: Vec<&str> = store.list_all().map(|r| r.item_id().as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
        assert_eq!(store.find_record("1").unwrap().unwrap().product(), "Gadget");
    }

    #[test]
    fn missing_file_is_an_io_error_and_store_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new();
        store.add_record(candidate("1", "Widget")).unwrap();

        let err = store.load_from_path(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)), "{err:?}");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = InventoryStore::new();
        let err = store
            .save_to_path(dir.path().join("no-such-dir").join("out.csv"))
            .unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)), "{err:?}");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_STORAGE_FILE);

        let mut store = InventoryStore::new();
        store.add_record(candidate("42", "Widget")).unwrap();
        store.add_record(candidate("7", "Gadget")).unwrap();
        assert_eq!(store.save_to_path(&path).unwrap(), 2);

        let mut reloaded = InventoryStore::new();
        assert_eq!(reloaded.load_from_path(&path).unwrap(), 2);
        let before: Vec<&Record> = store.list_all().collect();
        let after: Vec<&Record> = reloaded.list_all().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn quoted_fields_survive_a_round_trip() {
        let data = format!(
            "{HEADER}1,\"Box, large\",\"say \"\"hi\"\"\",\"multi\nline\",Doe,123-456-7890,a@b.com\n"
        );
        let mut store = InventoryStore::new();
        assert_eq!(store.load_from_reader(data.as_bytes()).unwrap(), 1);
        let record = store.list_all().next().unwrap();
        assert_eq!(record.product(), "Box, large");
        assert_eq!(record.quantity(), "say \"hi\"");
        assert_eq!(record.first_name(), "multi\nline");

        let text = saved(&store);
        assert!(text.contains("\"Box, large\""), "{text}");

        let mut reloaded = InventoryStore::new();
        assert_eq!(reloaded.load_from_reader(text.as_bytes()).unwrap(), 1);
        let before: Vec<&Record> = store.list_all().collect();
        let after: Vec<&Record> = reloaded.list_all().collect();
        assert_eq!(before, after);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: save followed by load into an empty store reproduces every record.
        #[test]
        fn save_then_load_reproduces_records(
            rows in prop::collection::btree_map(
                "[0-9]{1,6}",
                ("[A-Za-z]{1,10}", "[0-9]{1,4}", "[A-Za-z]{1,8}", "[A-Za-z]{1,8}"),
                1..15,
            )
        ) {
            let mut store = InventoryStore::new();
            for (id, (product, quantity, first, last)) in &rows {
                store.add_record(NewRecord {
                    item_id: id.clone(),
                    product: product.clone(),
                    quantity: quantity.clone(),
                    first_name: first.clone(),
                    last_name: last.clone(),
                    phone_number: "555-123-4567".to_string(),
                    email: format!("{first}@{last}.com"),
                }).unwrap();
            }

            let mut buf = Vec::new();
            store.save_to_writer(&mut buf).unwrap();
            let mut reloaded = InventoryStore::new();
            reloaded.load_from_reader(buf.as_slice()).unwrap();

            let before: Vec<&Record> = store.list_all().collect();
            let after: Vec<&Record> = reloaded.list_all().collect();
            prop_assert_eq!(before, after);
        }
    }
}
