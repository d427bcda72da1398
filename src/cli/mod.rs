//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod export;
pub mod receipt;
pub mod stats;

pub use export::{handle_export, ExportArgs};
pub use receipt::{handle_add, handle_delete, handle_list, handle_show, AddArgs, ListArgs};
pub use stats::handle_stats;
