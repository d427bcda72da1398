//! CSV export of the receipt ledger
//!
//! One row per ledger record in a fixed column order. The free-text columns
//! (Name, House No, Payer) are always quoted with embedded quotes doubled;
//! the numeric total stays unquoted so spreadsheets read it as a number.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::{PavatiError, PavatiResult};
use crate::models::Receipt;

/// Header row, fixed column order
pub const CSV_HEADER: &str = "Date,Receipt No,Name,House No,Total Amount,Payer";

/// Write the ledger as CSV
pub fn write_receipts_csv<W: Write>(receipts: &[Receipt], writer: &mut W) -> PavatiResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| PavatiError::Export(e.to_string()))?;

    for r in receipts {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            r.date,
            r.receipt_no,
            quote(&r.name),
            quote(&r.house_no),
            r.total.to_decimal_string(),
            quote(&r.payer)
        )
        .map_err(|e| PavatiError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Default export filename, embedding the given date
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_receipts_{}.csv", prefix, date.format("%Y-%m-%d"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
