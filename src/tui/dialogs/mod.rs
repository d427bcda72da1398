//! TUI dialogs

pub mod confirm;
