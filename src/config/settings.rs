//! User settings for pavati-cli
//!
//! Society identity, display formats, the receipt numbering seed, and the
//! charge-row template injected into every new draft.

use serde::{Deserialize, Serialize};

use super::paths::PavatiPaths;
use crate::error::PavatiError;
use crate::models::DEFAULT_LINE_ITEMS;
use crate::storage::RECEIPT_NO_SEED;

/// User settings for pavati-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Society name printed on receipts and reports
    #[serde(default = "default_society_name")]
    pub society_name: String,

    /// Currency symbol used in display output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for the receipt date line (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Receipt number proposed when the ledger is empty
    #[serde(default = "default_receipt_no_seed")]
    pub receipt_no_seed: u32,

    /// Filename prefix for CSV exports
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,

    /// Ordered charge labels copied into every new draft
    #[serde(default = "default_line_items")]
    pub line_items: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_society_name() -> String {
    "Co-operative Housing Society".to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%d - %m - %Y".to_string()
}

fn default_receipt_no_seed() -> u32 {
    RECEIPT_NO_SEED
}

fn default_export_prefix() -> String {
    "society".to_string()
}

fn default_line_items() -> Vec<String> {
    DEFAULT_LINE_ITEMS.iter().map(|s| s.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            society_name: default_society_name(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            receipt_no_seed: default_receipt_no_seed(),
            export_prefix: default_export_prefix(),
            line_items: default_line_items(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't
    /// exist
    pub fn load_or_create(paths: &PavatiPaths) -> Result<Self, PavatiError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PavatiError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| PavatiError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PavatiPaths) -> Result<(), PavatiError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PavatiError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PavatiError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.receipt_no_seed, 101);
        assert_eq!(settings.date_format, "%d - %m - %Y");
        assert_eq!(settings.line_items.len(), DEFAULT_LINE_ITEMS.len());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PavatiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.society_name = "Nilkanth Apartment Section-1".to_string();
        settings.receipt_no_seed = 500;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.society_name, "Nilkanth Apartment Section-1");
        assert_eq!(loaded.receipt_no_seed, 500);
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PavatiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.society_name, default_society_name());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PavatiPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.settings_file(),
            r#"{"societyName": "ignored-wrong-case", "society_name": "Shree Society"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.society_name, "Shree Society");
        assert_eq!(loaded.receipt_no_seed, 101);
    }
}
