//! Storage layer for pavati-cli
//!
//! Provides JSON file storage with atomic writes and the ledger store that
//! owns the saved receipts.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::{LedgerStore, RECEIPT_NO_SEED};
