// In crates/screener/src/types.rs

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerSettings {
    // Pre-analysis screen
    /// 24h volume must be strictly above this.
    pub min_volume_24h: Decimal,
    /// Absolute 24h change, in percent, must be strictly above this.
    pub min_abs_change_24h: Decimal,
    /// Market cap must be strictly above this.
    pub min_market_cap: Decimal,
    /// Price must be at least this.
    pub min_price: Decimal,

    // Post-analysis filter and ranking
    pub min_confidence: Decimal,
    pub max_results: usize,
}

impl Default for ScreenerSettings {
    fn default() -> Self {
        Self {
            min_volume_24h: dec!(10_000_000),
            min_abs_change_24h: dec!(2),
            min_market_cap: dec!(100_000_000),
            min_price: dec!(0.01),
            min_confidence: dec!(0.3),
            max_results: 20,
        }
    }
}
