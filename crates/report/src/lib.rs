// In crates/report/src/lib.rs

pub mod console;
pub mod error;
pub mod json;
pub mod types;

pub use console::render;
pub use error::{Error, Result};
pub use json::{json_filename, save_json};
pub use types::ReportSettings;

use chrono::Local;
use core_types::TradingOpportunity;
use std::path::PathBuf;

/// Renders scan results to the terminal and persists them as JSON.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    settings: ReportSettings,
}

impl Reporter {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    /// Prints the console report to stdout.
    pub fn print(&self, opportunities: &[TradingOpportunity]) {
        println!("{}", render(opportunities, self.settings.max_levels_shown, Local::now()));
    }

    /// Writes the JSON artifact if enabled. Returns the path written, if any.
    pub fn save(&self, opportunities: &[TradingOpportunity]) -> Result<Option<PathBuf>> {
        if !self.settings.write_json {
            tracing::debug!("JSON output disabled.");
            return Ok(None);
        }
        save_json(&self.settings.output_dir, opportunities, Local::now()).map(Some)
    }
}
