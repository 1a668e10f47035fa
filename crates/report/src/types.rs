// In crates/report/src/types.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Directory the JSON artifact is written to.
    pub output_dir: PathBuf,
    pub write_json: bool,
    /// Key levels printed per opportunity on the console.
    pub max_levels_shown: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            write_json: true,
            max_levels_shown: 3,
        }
    }
}
