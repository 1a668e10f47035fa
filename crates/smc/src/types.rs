// In crates/smc/src/types.rs

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DetectorSettings {
    /// Series shorter than this produce no levels at all.
    pub min_series_len: usize,

    // Order blocks
    /// Minimum reversal move relative to the block bar (0.02 = 2%).
    pub order_block_threshold: Decimal,
    /// Decimal places kept on computed order block strengths.
    pub strength_scale: u32,

    // Supply / demand zones
    /// Bars skipped at both ends of the series before looking for extrema.
    pub zone_edge_margin: usize,
    /// Neighbours on each side a bar must strictly exceed to count as an extremum.
    pub zone_window: usize,
    /// Placeholder zone strength until a magnitude/volume weighted score exists.
    pub zone_strength: Decimal,

    // Support / resistance
    /// Relative band around a price that counts as a touch (0.01 = 1%).
    pub touch_tolerance: Decimal,
    pub min_touches: usize,
    pub touch_strength_step: Decimal,
    pub max_touch_strength: Decimal,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            min_series_len: 10,
            order_block_threshold: dec!(0.02),
            strength_scale: 4,
            zone_edge_margin: 5,
            zone_window: 2,
            zone_strength: dec!(0.5),
            touch_tolerance: dec!(0.01),
            min_touches: 2,
            touch_strength_step: dec!(0.2),
            max_touch_strength: dec!(1.0),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SignalSettings {
    // Break of Structure
    /// Number of trailing observations that define the recent high/low.
    pub bos_lookback: usize,
    pub bos_threshold: Decimal,

    // Change of Character
    pub choch_min_len: usize,
    pub choch_short_window: usize,
    pub choch_medium_window: usize,
    pub choch_threshold: Decimal,

    /// Adjacent-bar move that counts as a supply/demand imbalance (0.025 = 2.5%).
    pub imbalance_threshold: Decimal,

    /// Placeholder liquidity reading until volume data is wired in.
    pub liquidity_level: Decimal,
}

impl Default for SignalSettings {
    fn default() -> Self {
        Self {
            bos_lookback: 10,
            bos_threshold: dec!(0.015),
            choch_min_len: 20,
            choch_short_window: 5,
            choch_medium_window: 15,
            choch_threshold: dec!(0.01),
            imbalance_threshold: dec!(0.025),
            liquidity_level: dec!(0.75),
        }
    }
}
