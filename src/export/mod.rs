//! Export functionality
//!
//! The core produces export text; writing it to a chosen destination is the
//! caller's concern.

pub mod csv;

pub use csv::{export_filename, write_receipts_csv};
