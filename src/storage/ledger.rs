//! Ledger store for issued receipts
//!
//! Owns the ordered list of saved receipts and its persistence against a
//! single JSON file. The list is most-recent-first: new receipts are
//! prepended, updates replace in place. Every mutation rewrites the whole
//! blob; there is no incremental persistence.

use std::path::PathBuf;

use crate::error::PavatiResult;
use crate::models::{Receipt, ReceiptId};

use super::file_io::{read_json, write_json_atomic};

/// Receipt number proposed for the very first receipt of an empty ledger
pub const RECEIPT_NO_SEED: u32 = 101;

/// In-memory ledger plus its storage slot
pub struct LedgerStore {
    path: PathBuf,
    receipts: Vec<Receipt>,
}

impl LedgerStore {
    /// Create an empty store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            receipts: Vec::new(),
        }
    }

    /// Load the ledger from disk
    ///
    /// A missing file yields an empty ledger. A corrupt or unparseable blob
    /// is recoverable: the store falls back to an empty ledger and reports
    /// the problem on stderr; startup never fails on bad data.
    pub fn load(&mut self) {
        match read_json::<Vec<Receipt>, _>(&self.path) {
            Ok(receipts) => self.receipts = receipts,
            Err(err) => {
                eprintln!("warning: could not read receipt ledger ({err}); starting empty");
                self.receipts = Vec::new();
            }
        }
    }

    /// Persist the full ledger as a single JSON array, atomically
    pub fn save(&self) -> PavatiResult<()> {
        write_json_atomic(&self.path, &self.receipts)
    }

    /// Insert or update a receipt by id
    ///
    /// An existing record is replaced at its current position; a new one is
    /// prepended so the ledger stays most-recent-first. Returns true when an
    /// existing record was replaced.
    pub fn upsert(&mut self, receipt: Receipt) -> bool {
        if let Some(pos) = self.receipts.iter().position(|r| r.id == receipt.id) {
            self.receipts[pos] = receipt;
            true
        } else {
            self.receipts.insert(0, receipt);
            false
        }
    }

    /// Remove the receipt with the given id
    ///
    /// A no-op (not an error) when the id is absent. Returns true when a
    /// record was removed.
    pub fn delete(&mut self, id: ReceiptId) -> bool {
        let before = self.receipts.len();
        self.receipts.retain(|r| r.id != id);
        self.receipts.len() != before
    }

    /// Get a receipt by id
    pub fn get(&self, id: ReceiptId) -> Option<&Receipt> {
        self.receipts.iter().find(|r| r.id == id)
    }

    /// Find the first receipt whose receipt number matches exactly
    ///
    /// Receipt numbers are not unique; the most recent match wins.
    pub fn find_by_receipt_no(&self, receipt_no: &str) -> Option<&Receipt> {
        self.receipts.iter().find(|r| r.receipt_no == receipt_no)
    }

    /// All receipts in ledger order (most recent first)
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Number of saved receipts
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Suggest the next receipt number
    ///
    /// Scans every record, parses its receipt number as an integer (free
    /// text that fails to parse counts as 0) and proposes max + 1, or the
    /// given seed for an empty ledger.
    pub fn next_receipt_no(&self, seed: u32) -> u32 {
        self.receipts
            .iter()
            .map(|r| r.receipt_no.trim().parse::<u32>().unwrap_or(0))
            .max()
            .map(|max| max + 1)
            .unwrap_or(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, DEFAULT_LINE_ITEMS};
    use tempfile::TempDir;

    fn template() -> Vec<String> {
        DEFAULT_LINE_ITEMS.iter().map(|s| s.to_string()).collect()
    }

    fn receipt(no: &str, name: &str, rupees: i64) -> Receipt {
        let mut r = Receipt::draft(no, "06 - 08 - 2026", &template());
        r.name = name.into();
        r.set_row_amount(0, Money::from_rupees(rupees));
        r
    }

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("receipts.json");
        let store = LedgerStore::new(path);
        (temp_dir, store)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut store) = create_test_store();
        store.load();
        assert!(store.is_empty());
        assert_eq!(store.next_receipt_no(RECEIPT_NO_SEED), RECEIPT_NO_SEED);
    }

    #[test]
    fn test_upsert_prepends_new_records() {
        let (_temp_dir, mut store) = create_test_store();

        assert!(!store.upsert(receipt("101", "First", 100)));
        assert!(!store.upsert(receipt("102", "Second", 200)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.receipts()[0].name, "Second");
        assert_eq!(store.receipts()[1].name, "First");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let (_temp_dir, mut store) = create_test_store();

        store.upsert(receipt("101", "First", 100));
        store.upsert(receipt("102", "Second", 200));

        // Edit the older record; it must keep its position and the count
        // must not change
        let mut edited = store.receipts()[1].clone();
        edited.name = "First (edited)".into();
        assert!(store.upsert(edited));

        assert_eq!(store.len(), 2);
        assert_eq!(store.receipts()[0].name, "Second");
        assert_eq!(store.receipts()[1].name, "First (edited)");
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let (_temp_dir, mut store) = create_test_store();
        store.upsert(receipt("101", "First", 100));

        let before = store.receipts().to_vec();
        assert!(!store.delete(ReceiptId::new()));
        assert_eq!(store.receipts(), &before[..]);
    }

    #[test]
    fn test_delete_removes_by_id() {
        let (_temp_dir, mut store) = create_test_store();
        store.upsert(receipt("101", "First", 100));
        let id = store.receipts()[0].id;

        assert!(store.delete(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_next_receipt_no() {
        let (_temp_dir, mut store) = create_test_store();
        store.upsert(receipt("101", "a", 1));
        store.upsert(receipt("205", "b", 1));
        store.upsert(receipt("B-17", "c", 1)); // non-numeric parses as 0

        assert_eq!(store.next_receipt_no(RECEIPT_NO_SEED), 206);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut store) = create_test_store();
        store.upsert(receipt("101", "Ramesh Patel", 1200));
        store.save().unwrap();

        let path = temp_dir.path().join("receipts.json");
        let mut store2 = LedgerStore::new(path);
        store2.load();

        assert_eq!(store2.len(), 1);
        assert_eq!(store2.receipts()[0].name, "Ramesh Patel");
        assert_eq!(store2.receipts()[0].total, Money::from_rupees(1200));
    }

    #[test]
    fn test_corrupt_blob_recovers_to_empty() {
        let (temp_dir, _) = create_test_store();
        let path = temp_dir.path().join("receipts.json");
        std::fs::write(&path, "{ this is not a ledger").unwrap();

        let mut store = LedgerStore::new(path);
        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_persist_is_idempotent() {
        let (temp_dir, mut store) = create_test_store();
        store.upsert(receipt("101", "a", 10));
        store.upsert(receipt("102", "b", 20));
        store.save().unwrap();

        let path = temp_dir.path().join("receipts.json");
        let first = std::fs::read_to_string(&path).unwrap();

        let mut store2 = LedgerStore::new(path.clone());
        store2.load();
        store2.save().unwrap();

        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }
}
