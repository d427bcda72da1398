//! Ledger statistics
//!
//! Derived totals over the whole ledger. Always recomputed from scratch so
//! the numbers cannot drift from the records they summarize.

use crate::models::{Money, Receipt};

/// Summary figures for the ledger header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerStats {
    /// Sum of every receipt's total
    pub total_collection: Money,
    /// Number of issued receipts
    pub total_receipts: usize,
}

/// Compute the collection total and receipt count
pub fn compute_stats(receipts: &[Receipt]) -> LedgerStats {
    LedgerStats {
        total_collection: receipts.iter().map(|r| r.total).sum(),
        total_receipts: receipts.len(),
    }
}
