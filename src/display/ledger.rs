//! Ledger table formatting
//!
//! Renders the (possibly filtered) ledger as a table for the `list`
//! subcommand.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Receipt;

use super::format_inr;

#[derive(Tabled)]
struct ReceiptRow {
    #[tabled(rename = "Receipt No")]
    receipt_no: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "House")]
    house_no: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Payer")]
    payer: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&Receipt> for ReceiptRow {
    fn from(r: &Receipt) -> Self {
        Self {
            receipt_no: r.receipt_no.clone(),
            date: r.date.clone(),
            house_no: r.house_no.clone(),
            name: r.name.clone(),
            payer: r.payer.clone(),
            total: format_inr(r.total),
        }
    }
}

/// Format receipts as a table, preserving the given order
pub fn format_receipt_table(receipts: &[&Receipt]) -> String {
    if receipts.is_empty() {
        return "No receipts found.".to_string();
    }

    let rows: Vec<ReceiptRow> = receipts.iter().map(|r| ReceiptRow::from(*r)).collect();
    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, DEFAULT_LINE_ITEMS};

    fn receipt(no: &str, name: &str) -> Receipt {
        let template: Vec<String> = DEFAULT_LINE_ITEMS.iter().map(|s| s.to_string()).collect();
        let mut r = Receipt::draft(no, "06 - 08 - 2026", &template);
        r.name = name.into();
        r.set_row_amount(0, Money::from_rupees(100));
        r
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(format_receipt_table(&[]), "No receipts found.");
    }

    #[test]
    fn test_table_includes_rows() {
        let a = receipt("101", "Ramesh Patel");
        let b = receipt("102", "Suresh Shah");
        let table = format_receipt_table(&[&a, &b]);

        assert!(table.contains("Receipt No"));
        assert!(table.contains("Ramesh Patel"));
        assert!(table.contains("Suresh Shah"));
        assert!(table.contains("₹ 100.00"));
    }
}
