//! Multi-field substring filter over the ledger
//!
//! All three query terms are case-insensitive substring matches joined with
//! AND; empty terms match everything. Results keep ledger order and are
//! never paginated.

use crate::models::Receipt;

/// A search query over the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptQuery {
    /// Substring of the member name
    pub name: String,
    /// Substring of the house/block number
    pub house: String,
    /// Substring of the receipt number
    pub receipt_no: String,
}

impl ReceiptQuery {
    /// Whether every term is empty (matches the whole ledger)
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.house.is_empty() && self.receipt_no.is_empty()
    }

    /// Whether a receipt satisfies all three terms
    pub fn matches(&self, receipt: &Receipt) -> bool {
        contains_ci(&receipt.name, &self.name)
            && contains_ci(&receipt.house_no, &self.house)
            && contains_ci(&receipt.receipt_no, &self.receipt_no)
    }
}

/// Filter the ledger, preserving its order
pub fn filter<'a>(receipts: &'a [Receipt], query: &ReceiptQuery) -> Vec<&'a Receipt> {
    receipts.iter().filter(|r| query.matches(r)).collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
