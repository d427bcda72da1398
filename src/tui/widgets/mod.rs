//! Reusable TUI widgets

pub mod notification;

pub use notification::{Toast, ToastKind, ToastWidget};
