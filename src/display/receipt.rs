//! Printable receipt rendering
//!
//! Renders one receipt as a fixed-layout text document: society header,
//! numbered charge table, total, amount in words, cheque details and a
//! signature line. This is the terminal stand-in for the printed slip.

use crate::config::Settings;
use crate::models::Receipt;

use super::format_inr;

const WIDTH: usize = 58;

/// Render a receipt as a printable text block
pub fn format_receipt(receipt: &Receipt, settings: &Settings) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let thin_rule = "-".repeat(WIDTH);

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&center(&settings.society_name));
    out.push_str(&center("PAYMENT RECEIPT"));
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&format!(
        "Receipt No: {:<20} Date: {}\n",
        receipt.receipt_no, receipt.date
    ));
    out.push_str(&format!("House/Block No: {}\n", receipt.house_no));
    out.push_str(&format!("Received from: {}\n", receipt.name));
    if !receipt.payer.is_empty() {
        out.push_str(&format!("By the hands of: {}\n", receipt.payer));
    }

    out.push_str(&thin_rule);
    out.push('\n');
    out.push_str(&format!("{:>3}  {:<36} {:>14}\n", "#", "Particulars", "Amount"));
    out.push_str(&thin_rule);
    out.push('\n');

    for (idx, row) in receipt.rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<36} {:>14}\n",
            idx + 1,
            row.label,
            row.amount.to_decimal_string()
        ));
    }

    out.push_str(&thin_rule);
    out.push('\n');
    out.push_str(&format!(
        "{:>3}  {:<36} {:>14}\n",
        "",
        "Total",
        format_inr(receipt.total)
    ));

    if !receipt.words.is_empty() {
        out.push_str(&format!("Amount in words: {}\n", receipt.words));
    }
    if !receipt.check_details.is_empty() {
        out.push_str(&format!("Cheque details: {}\n", receipt.check_details));
    }

    out.push('\n');
    out.push_str(&format!("{:>width$}\n", "Receiver's signature", width = WIDTH));
    out.push_str(&rule);
    out.push('\n');

    out
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return format!("{}\n", text);
    }
    let pad = (WIDTH - len) / 2;
    format!("{}{}\n", " ".repeat(pad), text)
}
