use anyhow::Result;
use clap::{Parser, Subcommand};

use pavati::audit::AuditLogger;
use pavati::cli::{
    handle_add, handle_delete, handle_export, handle_list, handle_show, handle_stats, AddArgs,
    ExportArgs, ListArgs,
};
use pavati::config::{PavatiPaths, Settings};
use pavati::storage::LedgerStore;
use pavati::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "pavati",
    version,
    about = "Terminal-based receipt ledger for housing societies",
    long_about = "pavati keeps a housing society's receipt book in the terminal: \
                  fill in a receipt, save it to the ledger, search and edit past \
                  receipts, and export the ledger as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default when no command is given)
    #[command(alias = "ui")]
    Tui,

    /// Issue a new receipt from the command line
    Add(AddArgs),

    /// List receipts, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),

    /// Print one receipt as a text document
    Show {
        /// Receipt number (or full receipt id)
        receipt: String,
    },

    /// Delete a receipt
    Delete {
        /// Receipt number (or full receipt id)
        receipt: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export the ledger as CSV
    Export(ExportArgs),

    /// Show collection totals
    Stats,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PavatiPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    let mut store = LedgerStore::new(paths.receipts_file());
    store.load();

    match cli.command {
        None | Some(Commands::Tui) => run_tui(settings, &paths, store)?,
        Some(Commands::Add(args)) => handle_add(&mut store, &settings, &audit, args)?,
        Some(Commands::List(args)) => handle_list(&store, args)?,
        Some(Commands::Show { receipt }) => handle_show(&store, &settings, &receipt)?,
        Some(Commands::Delete { receipt, yes }) => {
            handle_delete(&mut store, &audit, &receipt, yes)?
        }
        Some(Commands::Export(args)) => handle_export(&store, &settings, args)?,
        Some(Commands::Stats) => handle_stats(&store)?,
        Some(Commands::Config) => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.receipts_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Society name:   {}", settings.society_name);
            println!("Receipt seed:   {}", settings.receipt_no_seed);
        }
    }

    Ok(())
}
