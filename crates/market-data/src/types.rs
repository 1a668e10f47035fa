// In crates/market-data/src/types.rs

use serde::{Deserialize, Serialize};

/// Settings for the simulated price-series provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataSettings {
    /// Number of observations per generated series.
    pub series_length: usize,
    /// Base RNG seed. `None` draws a fresh seed for every run.
    pub seed: Option<u64>,
}

impl Default for MarketDataSettings {
    fn default() -> Self {
        Self {
            series_length: 50,
            seed: None,
        }
    }
}
