//! CLI command for CSV export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::error::{PavatiError, PavatiResult};
use crate::export::{export_filename, write_receipts_csv};
use crate::storage::LedgerStore;

/// Arguments for `pavati export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to a date-stamped name in the current
    /// directory)
    pub output: Option<PathBuf>,
}

/// Handle `pavati export`
pub fn handle_export(store: &LedgerStore, settings: &Settings, args: ExportArgs) -> PavatiResult<()> {
    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(export_filename(
            &settings.export_prefix,
            Local::now().date_naive(),
        ))
    });

    let file =
        File::create(&output).map_err(|e| PavatiError::Export(format!("{}: {}", output.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_receipts_csv(store.receipts(), &mut writer)?;
    writer
        .flush()
        .map_err(|e| PavatiError::Export(e.to_string()))?;

    println!(
        "Exported {} receipt(s) to {}.",
        store.len(),
        output.display()
    );
    Ok(())
}
