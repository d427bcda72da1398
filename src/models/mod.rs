//! Core data models for pavati-cli
//!
//! This module contains the data structures for the receipt domain: the
//! receipt record itself, its charge rows, and the money type they share.

pub mod ids;
pub mod money;
pub mod receipt;

pub use ids::ReceiptId;
pub use money::Money;
pub use receipt::{LineItem, Receipt, DEFAULT_LINE_ITEMS};
