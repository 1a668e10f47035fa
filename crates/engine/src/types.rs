// In crates/engine/src/types.rs

use core_types::{Symbol, TradingOpportunity};
use serde::Serialize;

/// A candidate whose analysis failed. The rest of the batch is unaffected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateFailure {
    pub symbol: Symbol,
    pub reason: String,
}

/// The outcome of one screening pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Number of assets received.
    pub screened: usize,
    /// Number of assets that passed the pre-analysis screen.
    pub candidates: usize,
    /// Valid opportunities, best first.
    pub opportunities: Vec<TradingOpportunity>,
    pub failures: Vec<CandidateFailure>,
}
