//! TUI application state
//!
//! Owns the ledger store, the draft editor, the search query, and the
//! transient UI state (focus, toast, pending delete confirmation).

use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::Local;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::{PavatiPaths, Settings};
use crate::error::PavatiError;
use crate::export::{export_filename, write_receipts_csv};
use crate::models::Receipt;
use crate::services::{compute_stats, filter, LedgerStats, ReceiptEditor, ReceiptField, ReceiptQuery, SaveOutcome};
use crate::storage::LedgerStore;

use super::widgets::Toast;

/// Which panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The receipt form (draft editing)
    Form,
    /// The ledger panel (search, select, edit/delete)
    Ledger,
}

/// Which search input is being edited, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    House,
    ReceiptNo,
}

impl SearchField {
    /// Cycle to the next search input
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::House,
            Self::House => Self::ReceiptNo,
            Self::ReceiptNo => Self::Name,
        }
    }
}

/// One focusable slot on the receipt form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    /// A free-text field of the draft
    Field(ReceiptField),
    /// The amount input of one charge row
    Row(usize),
}

/// TUI application state
pub struct App {
    pub settings: Settings,
    pub store: LedgerStore,
    pub editor: ReceiptEditor,
    pub audit: AuditLogger,
    pub query: ReceiptQuery,
    pub pane: Pane,
    /// Index into [`App::form_slots`]
    pub form_index: usize,
    /// Raw amount text per charge row; parsed on every keystroke
    pub row_inputs: Vec<String>,
    pub search_field: Option<SearchField>,
    /// Selected index into the filtered ledger view
    pub selected: usize,
    /// Single toast slot. Replacing it retires the previous dismissal
    /// deadline, so at most one auto-dismiss is pending at any time.
    pub toast: Option<Toast>,
    /// Receipt awaiting delete confirmation
    pub pending_delete: Option<Receipt>,
    pub should_quit: bool,
}

impl App {
    /// Create the app state around a loaded ledger store
    pub fn new(settings: Settings, paths: &PavatiPaths, store: LedgerStore) -> Self {
        let editor = ReceiptEditor::new(
            settings.line_items.clone(),
            settings.date_format.clone(),
            store.next_receipt_no(settings.receipt_no_seed),
        );
        let audit = AuditLogger::new(paths.audit_log());

        let mut app = Self {
            settings,
            store,
            editor,
            audit,
            query: ReceiptQuery::default(),
            pane: Pane::Form,
            form_index: 0,
            row_inputs: Vec::new(),
            search_field: None,
            selected: 0,
            toast: None,
            pending_delete: None,
            should_quit: false,
        };
        app.reset_row_inputs();
        app
    }

    /// The focus order of the form: header fields, charge rows, then the
    /// words and cheque lines
    pub fn form_slots(&self) -> Vec<FormSlot> {
        let mut slots = vec![
            FormSlot::Field(ReceiptField::ReceiptNo),
            FormSlot::Field(ReceiptField::Date),
            FormSlot::Field(ReceiptField::HouseNo),
            FormSlot::Field(ReceiptField::Name),
            FormSlot::Field(ReceiptField::Payer),
        ];
        slots.extend((0..self.editor.draft().rows.len()).map(FormSlot::Row));
        slots.push(FormSlot::Field(ReceiptField::Words));
        slots.push(FormSlot::Field(ReceiptField::CheckDetails));
        slots
    }

    /// The currently focused form slot
    pub fn current_slot(&self) -> FormSlot {
        let slots = self.form_slots();
        slots[self.form_index.min(slots.len() - 1)]
    }

    /// Move form focus forward or backward, wrapping
    pub fn move_form_focus(&mut self, forward: bool) {
        let len = self.form_slots().len();
        self.form_index = if forward {
            (self.form_index + 1) % len
        } else {
            (self.form_index + len - 1) % len
        };
    }

    /// The ledger filtered by the current query, in ledger order
    pub fn filtered(&self) -> Vec<&Receipt> {
        filter(self.store.receipts(), &self.query)
    }

    /// Stats over the whole ledger (not the filtered view)
    pub fn stats(&self) -> LedgerStats {
        compute_stats(self.store.receipts())
    }

    /// The receipt currently selected in the ledger panel
    pub fn selected_receipt(&self) -> Option<&Receipt> {
        self.filtered().get(self.selected).copied()
    }

    /// Keep the selection inside the filtered view
    pub fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Move the ledger selection
    pub fn move_selection(&mut self, down: bool) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        if down {
            self.selected = (self.selected + 1).min(len - 1);
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Show a toast, replacing any message still on screen
    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Periodic housekeeping: drop an expired toast
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Insert a character into the focused form slot
    pub fn apply_char(&mut self, c: char) {
        match self.current_slot() {
            FormSlot::Field(field) => {
                let mut value = self.editor.field_value(field).to_string();
                value.push(c);
                self.editor.update_field(field, value);
            }
            FormSlot::Row(index) => {
                self.row_inputs[index].push(c);
                let input = self.row_inputs[index].clone();
                self.editor.update_row_amount(index, &input);
            }
        }
    }

    /// Delete the last character of the focused form slot
    pub fn apply_backspace(&mut self) {
        match self.current_slot() {
            FormSlot::Field(field) => {
                let mut value = self.editor.field_value(field).to_string();
                value.pop();
                self.editor.update_field(field, value);
            }
            FormSlot::Row(index) => {
                self.row_inputs[index].pop();
                let input = self.row_inputs[index].clone();
                self.editor.update_row_amount(index, &input);
            }
        }
    }

    /// Re-derive the raw row inputs from the draft (after a draft swap)
    pub fn reset_row_inputs(&mut self) {
        self.row_inputs = self
            .editor
            .draft()
            .rows
            .iter()
            .map(|row| {
                if row.amount.is_zero() {
                    String::new()
                } else {
                    row.amount.to_decimal_string()
                }
            })
            .collect();
    }

    /// Start a fresh draft with the next suggested receipt number
    pub fn new_draft(&mut self) {
        self.editor
            .new_draft(self.store.next_receipt_no(self.settings.receipt_no_seed));
        self.reset_row_inputs();
        self.form_index = 0;
        self.pane = Pane::Form;
        self.show_toast(Toast::info("Ready for a new receipt."));
    }

    /// Validate and save the draft
    pub fn save(&mut self) {
        match self.editor.save(&mut self.store) {
            Ok(outcome) => {
                let op = match outcome {
                    SaveOutcome::Created => Operation::Create,
                    SaveOutcome::Updated => Operation::Update,
                };
                // A failing audit write must not block the save itself
                let _ = self
                    .audit
                    .log(&AuditEntry::for_receipt(op, self.editor.draft()));

                let message = match outcome {
                    SaveOutcome::Created => "Receipt saved.",
                    SaveOutcome::Updated => "Receipt updated.",
                };
                self.show_toast(Toast::success(message));
                self.clamp_selection();
            }
            Err(err) => self.show_toast(Toast::error(err.to_string())),
        }
    }

    /// Load the selected ledger record into the form for editing
    pub fn edit_selected(&mut self) {
        if let Some(receipt) = self.selected_receipt().cloned() {
            let no = receipt.receipt_no.clone();
            self.editor.load_for_edit(&receipt);
            self.reset_row_inputs();
            self.form_index = 0;
            self.pane = Pane::Form;
            self.show_toast(Toast::info(format!("Editing receipt #{}.", no)));
        }
    }

    /// Ask for confirmation before deleting the selected receipt
    pub fn request_delete(&mut self) {
        self.pending_delete = self.selected_receipt().cloned();
    }

    /// Delete the receipt awaiting confirmation
    pub fn confirm_delete(&mut self) {
        if let Some(receipt) = self.pending_delete.take() {
            if self.store.delete(receipt.id) {
                match self.store.save() {
                    Ok(()) => {
                        let _ = self
                            .audit
                            .log(&AuditEntry::for_receipt(Operation::Delete, &receipt));
                        self.show_toast(Toast::success("Receipt deleted."));
                    }
                    Err(err) => self.show_toast(Toast::error(err.to_string())),
                }
            }
            self.clamp_selection();
        }
    }

    /// Drop the pending delete without touching the ledger
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Export the full ledger as CSV into the current directory
    pub fn export_csv(&mut self) {
        let filename = export_filename(&self.settings.export_prefix, Local::now().date_naive());

        let result = File::create(&filename)
            .map_err(|e| PavatiError::Export(e.to_string()))
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                write_receipts_csv(self.store.receipts(), &mut writer)?;
                writer.flush().map_err(|e| PavatiError::Export(e.to_string()))
            });

        match result {
            Ok(()) => self.show_toast(Toast::success(format!("Exported to {}.", filename))),
            Err(err) => self.show_toast(Toast::error(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::tui::widgets::ToastKind;
    use tempfile::TempDir;

    fn app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PavatiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut store = LedgerStore::new(paths.receipts_file());
        store.load();
        let app = App::new(Settings::default(), &paths, store);
        (temp_dir, app)
    }

    fn fill_valid_draft(app: &mut App) {
        app.editor.update_field(ReceiptField::Name, "Ramesh Patel");
        app.editor.update_row_amount(0, "1200");
    }

    #[test]
    fn test_form_slots_cover_fields_and_rows() {
        let (_tmp, app) = app();
        let slots = app.form_slots();
        let rows = app.editor.draft().rows.len();
        assert_eq!(slots.len(), 7 + rows);
        assert_eq!(slots[0], FormSlot::Field(ReceiptField::ReceiptNo));
        assert_eq!(slots[5], FormSlot::Row(0));
    }

    #[test]
    fn test_typed_chars_flow_into_draft() {
        let (_tmp, mut app) = app();
        app.form_index = 3; // Name field
        for c in "Ramesh".chars() {
            app.apply_char(c);
        }
        assert_eq!(app.editor.draft().name, "Ramesh");

        app.apply_backspace();
        assert_eq!(app.editor.draft().name, "Rames");
    }

    #[test]
    fn test_row_input_updates_total() {
        let (_tmp, mut app) = app();
        app.form_index = 5; // first charge row
        for c in "1200".chars() {
            app.apply_char(c);
        }
        assert_eq!(app.editor.draft().total, Money::from_rupees(1200));
        assert_eq!(
            app.editor.draft().words,
            "One Thousand Two Hundred Only"
        );
    }

    #[test]
    fn test_save_success_and_toast() {
        let (_tmp, mut app) = app();
        fill_valid_draft(&mut app);
        app.save();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_save_invalid_leaves_ledger_alone() {
        let (_tmp, mut app) = app();
        app.save();
        assert!(app.store.is_empty());
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_toast_replacement_is_cancel_on_replace() {
        let (_tmp, mut app) = app();
        app.show_toast(Toast::info("first"));
        app.show_toast(Toast::info("second"));

        // Only the newest message is live; the first one's deadline died
        // with its slot
        assert_eq!(app.toast.as_ref().unwrap().message, "second");
        app.tick();
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_delete_flow_with_confirmation() {
        let (_tmp, mut app) = app();
        fill_valid_draft(&mut app);
        app.save();

        app.request_delete();
        assert!(app.pending_delete.is_some());

        app.cancel_delete();
        assert_eq!(app.store.len(), 1);

        app.request_delete();
        app.confirm_delete();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_new_draft_after_save_suggests_next_no() {
        let (_tmp, mut app) = app();
        fill_valid_draft(&mut app);
        app.save();
        app.new_draft();

        assert_eq!(app.editor.draft().receipt_no, "102");
        assert!(app.editor.draft().total.is_zero());
    }
}
