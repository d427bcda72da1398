//! Receipt editor controller
//!
//! Holds the single in-progress draft receipt. Row edits recompute the
//! derived total and words in the same call, the validation gate runs on
//! every save attempt, and saves go through the ledger store's upsert
//! contract so the editor never touches the ledger list directly.

use chrono::Local;

use crate::error::PavatiResult;
use crate::models::{Money, Receipt};
use crate::storage::LedgerStore;

/// Free-text fields of the draft addressable by name
///
/// `Words` is listed because the words line on the slip is hand-editable;
/// any later row edit overwrites it with the recomputed transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptField {
    ReceiptNo,
    Date,
    HouseNo,
    Name,
    Payer,
    CheckDetails,
    Words,
}

/// Outcome of a successful save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The draft was new and was prepended to the ledger
    Created,
    /// A ledger record with the draft's id was replaced in place
    Updated,
}

/// The single mutable draft slot
pub struct ReceiptEditor {
    draft: Receipt,
    template: Vec<String>,
    date_format: String,
}

impl ReceiptEditor {
    /// Create an editor with a fresh draft
    ///
    /// The template is the ordered list of charge labels; it is deep-copied
    /// into every draft so no two drafts share rows.
    pub fn new(template: Vec<String>, date_format: impl Into<String>, suggested_no: u32) -> Self {
        let date_format = date_format.into();
        let draft = Receipt::draft(
            suggested_no.to_string(),
            Local::now().format(&date_format).to_string(),
            &template,
        );
        Self {
            draft,
            template,
            date_format,
        }
    }

    /// Replace the draft with a freshly constructed receipt
    ///
    /// New identity, the suggested number, today's date, empty text fields,
    /// zero-amount template rows.
    pub fn new_draft(&mut self, suggested_no: u32) {
        self.draft = Receipt::draft(
            suggested_no.to_string(),
            Local::now().format(&self.date_format).to_string(),
            &self.template,
        );
    }

    /// The current draft
    pub fn draft(&self) -> &Receipt {
        &self.draft
    }

    /// Replace one row amount from raw user input
    ///
    /// Input that fails to parse as a number counts as zero. The total and
    /// words refresh in the same call; there is no state in which they are
    /// stale relative to the rows.
    pub fn update_row_amount(&mut self, index: usize, input: &str) {
        let amount = Money::parse(input).unwrap_or_else(|_| Money::zero());
        self.draft.set_row_amount(index, amount);
    }

    /// Replace exactly the named free-text field
    ///
    /// Does not touch the rows, total, or (except for the `Words` field
    /// itself) the words line.
    pub fn update_field(&mut self, field: ReceiptField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ReceiptField::ReceiptNo => self.draft.receipt_no = value,
            ReceiptField::Date => self.draft.date = value,
            ReceiptField::HouseNo => self.draft.house_no = value,
            ReceiptField::Name => self.draft.name = value,
            ReceiptField::Payer => self.draft.payer = value,
            ReceiptField::CheckDetails => self.draft.check_details = value,
            ReceiptField::Words => self.draft.words = value,
        }
    }

    /// Read the named free-text field of the draft
    pub fn field_value(&self, field: ReceiptField) -> &str {
        match field {
            ReceiptField::ReceiptNo => &self.draft.receipt_no,
            ReceiptField::Date => &self.draft.date,
            ReceiptField::HouseNo => &self.draft.house_no,
            ReceiptField::Name => &self.draft.name,
            ReceiptField::Payer => &self.draft.payer,
            ReceiptField::CheckDetails => &self.draft.check_details,
            ReceiptField::Words => &self.draft.words,
        }
    }

    /// Load an existing ledger record into the draft for editing
    ///
    /// The id is preserved, so a subsequent save replaces the record in
    /// place instead of inserting a new one.
    pub fn load_for_edit(&mut self, receipt: &Receipt) {
        self.draft = receipt.clone();
    }

    /// Validate and commit the draft to the ledger
    ///
    /// On a validation failure nothing changes: the draft stays editable and
    /// the ledger is untouched. On success the ledger is upserted and
    /// persisted synchronously as a whole.
    pub fn save(&self, store: &mut LedgerStore) -> PavatiResult<SaveOutcome> {
        self.draft.validate()?;

        let replaced = store.upsert(self.draft.clone());
        store.save()?;

        Ok(if replaced {
            SaveOutcome::Updated
        } else {
            SaveOutcome::Created
        })
    }
}
