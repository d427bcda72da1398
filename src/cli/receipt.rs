//! CLI commands for issuing and managing receipts

use std::io::{self, BufRead, Write};

use clap::Args;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::Settings;
use crate::display::{format_inr, format_receipt, format_receipt_table};
use crate::error::{PavatiError, PavatiResult};
use crate::models::{Receipt, ReceiptId};
use crate::services::{filter, ReceiptEditor, ReceiptField, ReceiptQuery};
use crate::storage::LedgerStore;

/// Arguments for `pavati add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Member name the receipt is issued to
    #[arg(long)]
    pub name: String,

    /// House/block number
    #[arg(long, default_value = "")]
    pub house: String,

    /// Person who handed over the payment
    #[arg(long, default_value = "")]
    pub payer: String,

    /// Cheque details, if paid by cheque
    #[arg(long, default_value = "")]
    pub check: String,

    /// Receipt number (defaults to the next suggested number)
    #[arg(long)]
    pub no: Option<String>,

    /// Receipt date (defaults to today in the configured format)
    #[arg(long)]
    pub date: Option<String>,

    /// Charge row amount as INDEX=AMOUNT, repeatable (e.g. --amount 0=1200.50)
    #[arg(long = "amount", value_name = "INDEX=AMOUNT")]
    pub amounts: Vec<String>,
}

/// Arguments for `pavati list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by member name (case-insensitive substring)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Filter by house/block number (case-insensitive substring)
    #[arg(long, default_value = "")]
    pub house: String,

    /// Filter by receipt number (case-insensitive substring)
    #[arg(long = "no", default_value = "")]
    pub receipt_no: String,
}

/// Handle `pavati add`
pub fn handle_add(
    store: &mut LedgerStore,
    settings: &Settings,
    audit: &AuditLogger,
    args: AddArgs,
) -> PavatiResult<()> {
    let mut editor = ReceiptEditor::new(
        settings.line_items.clone(),
        settings.date_format.clone(),
        store.next_receipt_no(settings.receipt_no_seed),
    );

    if let Some(no) = args.no {
        editor.update_field(ReceiptField::ReceiptNo, no);
    }
    if let Some(date) = args.date {
        editor.update_field(ReceiptField::Date, date);
    }
    editor.update_field(ReceiptField::Name, args.name);
    editor.update_field(ReceiptField::HouseNo, args.house);
    editor.update_field(ReceiptField::Payer, args.payer);
    editor.update_field(ReceiptField::CheckDetails, args.check);

    for spec in &args.amounts {
        let (index, amount) = parse_amount_spec(spec)?;
        editor.update_row_amount(index, amount);
    }

    editor.save(store)?;
    audit.log(&AuditEntry::for_receipt(Operation::Create, editor.draft()))?;

    let draft = editor.draft();
    println!(
        "Saved receipt #{} for {} ({}).",
        draft.receipt_no,
        draft.name,
        format_inr(draft.total)
    );
    Ok(())
}

/// Handle `pavati list`
pub fn handle_list(store: &LedgerStore, args: ListArgs) -> PavatiResult<()> {
    let query = ReceiptQuery {
        name: args.name,
        house: args.house,
        receipt_no: args.receipt_no,
    };

    let matches = filter(store.receipts(), &query);
    println!("{}", format_receipt_table(&matches));
    if !matches.is_empty() {
        println!("{} receipt(s).", matches.len());
    }
    Ok(())
}

/// Handle `pavati show`
///
/// Prints the printable text rendering of one receipt, looked up by receipt
/// number first and by full id as a fallback.
pub fn handle_show(store: &LedgerStore, settings: &Settings, receipt: &str) -> PavatiResult<()> {
    let found = resolve(store, receipt)?;
    print!("{}", format_receipt(found, settings));
    Ok(())
}

/// Handle `pavati delete`
pub fn handle_delete(
    store: &mut LedgerStore,
    audit: &AuditLogger,
    receipt: &str,
    yes: bool,
) -> PavatiResult<()> {
    let target = resolve(store, receipt)?.clone();

    if !yes && !confirm_on_stdin(&target)? {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete(target.id);
    store.save()?;
    audit.log(&AuditEntry::for_receipt(Operation::Delete, &target))?;

    println!("Deleted receipt #{}.", target.receipt_no);
    Ok(())
}

fn resolve<'a>(store: &'a LedgerStore, receipt: &str) -> PavatiResult<&'a Receipt> {
    if let Some(found) = store.find_by_receipt_no(receipt) {
        return Ok(found);
    }
    if let Ok(id) = ReceiptId::parse(receipt) {
        if let Some(found) = store.get(id) {
            return Ok(found);
        }
    }
    Err(PavatiError::NotFound(receipt.to_string()))
}

fn confirm_on_stdin(receipt: &Receipt) -> PavatiResult<bool> {
    print!(
        "Delete receipt #{} issued to {}? [y/N] ",
        receipt.receipt_no, receipt.name
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

fn parse_amount_spec(spec: &str) -> PavatiResult<(usize, &str)> {
    let (index, amount) = spec.split_once('=').ok_or_else(|| {
        PavatiError::Config(format!(
            "Invalid --amount '{}': expected INDEX=AMOUNT",
            spec
        ))
    })?;

    let index: usize = index.trim().parse().map_err(|_| {
        PavatiError::Config(format!(
            "Invalid --amount '{}': row index must be a number",
            spec
        ))
    })?;

    Ok((index, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_spec() {
        assert_eq!(parse_amount_spec("0=1200.50").unwrap(), (0, "1200.50"));
        assert_eq!(parse_amount_spec("3=0").unwrap(), (3, "0"));
        assert!(parse_amount_spec("1200").is_err());
        assert!(parse_amount_spec("x=10").is_err());
    }
}
