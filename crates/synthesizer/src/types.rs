// In crates/synthesizer/src/types.rs

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Weights and multipliers used to turn signals and levels into an opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    // Confidence weights
    pub bos_weight: Decimal,
    pub choch_weight: Decimal,
    pub retest_weight: Decimal,
    pub imbalance_weight: Decimal,
    /// Applied to every key level's strength.
    pub level_strength_weight: Decimal,
    pub max_confidence: Decimal,

    // Trading levels, as fractions of the current price
    pub entry_adjustment: Decimal,
    pub long_stop_loss: Decimal,
    pub long_take_profit: Decimal,
    pub short_stop_loss: Decimal,
    pub short_take_profit: Decimal,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            bos_weight: dec!(0.3),
            choch_weight: dec!(0.25),
            retest_weight: dec!(0.2),
            imbalance_weight: dec!(0.15),
            level_strength_weight: dec!(0.1),
            max_confidence: dec!(1.0),
            entry_adjustment: dec!(0.005),
            long_stop_loss: dec!(0.95),
            long_take_profit: dec!(1.06),
            short_stop_loss: dec!(1.05),
            short_take_profit: dec!(0.94),
        }
    }
}

/// Entry, stop and target prices for one opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeLevels {
    pub entry: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
}
