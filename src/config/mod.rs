//! Configuration module for pavati-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PavatiPaths;
pub use settings::Settings;
