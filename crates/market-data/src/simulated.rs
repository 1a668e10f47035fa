// In crates/market-data/src/simulated.rs

use crate::types::MarketDataSettings;
use crate::{Error, PriceSeriesProvider, Result};
use core_types::Asset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Step factors are drawn in basis points from [9500, 10500), i.e. [0.95, 1.05).
const STEP_MIN_BP: i64 = 9_500;
const STEP_MAX_BP: i64 = 10_500;
const PRICE_DP: u32 = 8;

/// Generates a random-walk history ending at the asset's current price.
///
/// Each symbol gets its own RNG stream derived from the base seed, so the
/// series for an asset does not depend on which other assets are analyzed or
/// in what order.
#[derive(Debug, Clone)]
pub struct SimulatedSeriesProvider {
    series_length: usize,
    seed: u64,
}

impl SimulatedSeriesProvider {
    pub fn new(settings: &MarketDataSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, series_length = settings.series_length, "Simulated series provider ready.");
        Self {
            series_length: settings.series_length,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Base seed XOR the first eight bytes of the symbol's blake3 hash.
    fn symbol_seed(&self, symbol: &str) -> u64 {
        let hash = blake3::hash(symbol.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        self.seed ^ u64::from_le_bytes(head)
    }
}

impl PriceSeriesProvider for SimulatedSeriesProvider {
    fn name(&self) -> &'static str {
        "SimulatedSeriesProvider"
    }

    fn price_series(&self, asset: &Asset) -> Result<Vec<Decimal>> {
        let mut rng = StdRng::seed_from_u64(self.symbol_seed(&asset.symbol.0));

        let mut price = asset.current_price;
        let mut series: Vec<Decimal> = (0..self.series_length)
            .map(|_| {
                let factor = Decimal::new(rng.gen_range(STEP_MIN_BP..STEP_MAX_BP), 4);
                price = (price * factor).round_dp(PRICE_DP);
                price
            })
            .collect();

        if let Some(last) = series.last_mut() {
            *last = asset.current_price;
        }
        Ok(series)
    }
}

/// Serves fixed series from memory, keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct StaticSeriesProvider {
    series: HashMap<String, Vec<Decimal>>,
}

impl StaticSeriesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, series: Vec<Decimal>) -> Self {
        self.series.insert(symbol.to_string(), series);
        self
    }
}

impl PriceSeriesProvider for StaticSeriesProvider {
    fn name(&self) -> &'static str {
        "StaticSeriesProvider"
    }

    fn price_series(&self, asset: &Asset) -> Result<Vec<Decimal>> {
        self.series
            .get(&asset.symbol.0)
            .cloned()
            .ok_or_else(|| Error::SeriesUnavailable {
                symbol: asset.symbol.0.clone(),
            })
    }
}
