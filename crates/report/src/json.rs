// In crates/report/src/json.rs

use crate::{Error, Result};
use chrono::{DateTime, TimeZone};
use core_types::TradingOpportunity;
use std::fmt;
use std::path::{Path, PathBuf};

/// `smc_trading_opportunities_YYYYMMDD_HHMMSS.json`
pub fn json_filename<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("smc_trading_opportunities_{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Writes the opportunities as a pretty-printed JSON array into `dir`.
pub fn save_json<Tz: TimeZone>(
    dir: &Path,
    opportunities: &[TradingOpportunity],
    at: DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: fmt::Display,
{
    let write_failed = |path: &Path, source| Error::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(|e| write_failed(dir, e))?;

    let path = dir.join(json_filename(&at));
    let body = serde_json::to_string_pretty(opportunities)?;
    std::fs::write(&path, body).map_err(|e| write_failed(&path, e))?;

    tracing::info!(path = %path.display(), count = opportunities.len(), "Results saved.");
    Ok(path)
}
