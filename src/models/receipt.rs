//! Receipt record model
//!
//! A receipt is a fixed-cardinality table of society charge rows plus the
//! member details written on the slip. `total` and `words` are derived from
//! the rows and must never be observed stale relative to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::words::amount_in_words;

use super::ids::ReceiptId;
use super::money::Money;

/// Charge categories printed on every receipt, in row order
///
/// This is the default line-item template; the effective template is carried
/// in settings and injected when a draft is created. Each draft gets its own
/// deep copy so row edits never alias another receipt.
pub const DEFAULT_LINE_ITEMS: [&str; 6] = [
    "Maintenance Charges",
    "Water Charges",
    "Common Electricity",
    "Repair Fund",
    "Festival Fund",
    "Other Charges",
];

/// One charge row on a receipt
///
/// The label comes from the template and is fixed; only the amount is edited.
/// Rows are never added or removed individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Charge category label
    pub label: String,

    /// Amount for this charge, non-negative
    pub amount: Money,
}

impl LineItem {
    /// Create a zero-amount line item for a template label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: Money::zero(),
        }
    }
}

/// A single issued (or in-progress) receipt
///
/// Serialized with camelCase field names; the ledger file is a JSON array of
/// these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique identity, the sole upsert/delete key
    pub id: ReceiptId,

    /// User-editable receipt number; numeric-ish free text, not unique
    pub receipt_no: String,

    /// Display date as free text in the configured format
    pub date: String,

    /// Block/house number
    #[serde(default)]
    pub house_no: String,

    /// Member name the receipt is issued to
    #[serde(default)]
    pub name: String,

    /// Person who handed over the payment
    #[serde(default)]
    pub payer: String,

    /// Cheque details, if paid by cheque
    #[serde(default)]
    pub check_details: String,

    /// Charge rows; length is fixed by the template
    pub rows: Vec<LineItem>,

    /// Derived: sum of all row amounts
    pub total: Money,

    /// Derived: English words for the whole-rupee total
    #[serde(default)]
    pub words: String,

    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Create a fresh draft receipt
    ///
    /// The template labels are deep-copied into zero-amount rows; total is
    /// zero and words empty until a row amount is entered.
    pub fn draft(receipt_no: impl Into<String>, date: impl Into<String>, template: &[String]) -> Self {
        Self {
            id: ReceiptId::new(),
            receipt_no: receipt_no.into(),
            date: date.into(),
            house_no: String::new(),
            name: String::new(),
            payer: String::new(),
            check_details: String::new(),
            rows: template
                .iter()
                .map(|label| LineItem::new(label.as_str()))
                .collect(),
            total: Money::zero(),
            words: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Replace one row's amount and refresh the derived fields in the same
    /// call
    ///
    /// Out-of-range indexes are ignored. Negative amounts coerce to zero;
    /// row amounts are non-negative by contract.
    pub fn set_row_amount(&mut self, index: usize, amount: Money) {
        if let Some(row) = self.rows.get_mut(index) {
            row.amount = if amount.is_negative() {
                Money::zero()
            } else {
                amount
            };
            self.recalculate();
        }
    }

    /// Recompute `total` and `words` from the current rows
    pub fn recalculate(&mut self) {
        self.total = self.rows.iter().map(|r| r.amount).sum();
        self.words = amount_in_words(self.total);
    }

    /// Validate the receipt before it may be saved
    ///
    /// The name check runs first; the first violated check wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.total.is_positive() {
            return Err(ValidationError::NonPositiveTotal);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Vec<String> {
        DEFAULT_LINE_ITEMS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_draft_starts_empty() {
        let r = Receipt::draft("101", "06 - 08 - 2026", &template());
        assert_eq!(r.receipt_no, "101");
        assert_eq!(r.rows.len(), DEFAULT_LINE_ITEMS.len());
        assert!(r.rows.iter().all(|row| row.amount.is_zero()));
        assert!(r.total.is_zero());
        assert_eq!(r.words, "");
    }

    #[test]
    fn test_drafts_do_not_share_rows() {
        let mut a = Receipt::draft("101", "x", &template());
        let b = Receipt::draft("102", "x", &template());

        a.set_row_amount(0, Money::from_rupees(500));
        assert!(b.rows[0].amount.is_zero());
    }

    #[test]
    fn test_total_tracks_rows() {
        let mut r = Receipt::draft("101", "x", &template());
        r.set_row_amount(0, Money::from_rupees(1200));
        r.set_row_amount(1, Money::from_paise(5050));
        assert_eq!(r.total, Money::from_paise(125050));

        r.set_row_amount(0, Money::zero());
        assert_eq!(r.total, Money::from_paise(5050));
    }

    #[test]
    fn test_words_never_stale() {
        let mut r = Receipt::draft("101", "x", &template());
        r.set_row_amount(0, Money::from_rupees(1234));
        assert_eq!(r.words, "One Thousand Two Hundred Thirty Four Only");

        r.set_row_amount(0, Money::zero());
        assert_eq!(r.words, "");
    }

    #[test]
    fn test_negative_row_amount_coerces_to_zero() {
        let mut r = Receipt::draft("101", "x", &template());
        r.set_row_amount(0, Money::from_rupees(-50));
        assert!(r.rows[0].amount.is_zero());
        assert!(r.total.is_zero());
    }

    #[test]
    fn test_out_of_range_row_ignored() {
        let mut r = Receipt::draft("101", "x", &template());
        r.set_row_amount(99, Money::from_rupees(50));
        assert!(r.total.is_zero());
    }

    #[test]
    fn test_validate_name_first() {
        let mut r = Receipt::draft("101", "x", &template());
        // Both checks fail; the name check wins
        assert_eq!(r.validate(), Err(ValidationError::EmptyName));

        r.name = "   ".into();
        assert_eq!(r.validate(), Err(ValidationError::EmptyName));

        r.name = "Ramesh Patel".into();
        assert_eq!(r.validate(), Err(ValidationError::NonPositiveTotal));

        r.set_row_amount(0, Money::from_rupees(100));
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let r = Receipt::draft("101", "06 - 08 - 2026", &template());
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"receiptNo\""));
        assert!(json.contains("\"houseNo\""));
        assert!(json.contains("\"checkDetails\""));
        assert!(json.contains("\"createdAt\""));

        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
