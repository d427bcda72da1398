//! CLI command for ledger statistics

use crate::display::format_inr;
use crate::error::PavatiResult;
use crate::services::compute_stats;
use crate::storage::LedgerStore;

/// Handle `pavati stats`
pub fn handle_stats(store: &LedgerStore) -> PavatiResult<()> {
    let stats = compute_stats(store.receipts());

    println!("Total collection: {}", format_inr(stats.total_collection));
    println!("Receipts issued:  {}", stats.total_receipts);
    Ok(())
}
