// In crates/market-data/src/lib.rs

use core_types::Asset;
use rust_decimal::Decimal;

pub mod error;
pub mod sample;
pub mod simulated;
pub mod source;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use sample::sample_assets;
pub use simulated::{SimulatedSeriesProvider, StaticSeriesProvider};
pub use source::{JsonFileSource, SampleAssetSource, dedup_by_symbol};
pub use types::MarketDataSettings;

/// Supplies the ordered price history (older to newer) analyzed for an asset.
///
/// Implementations must end the series at the asset's current price. Providers
/// are shared across worker threads when analysis runs in parallel.
pub trait PriceSeriesProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn price_series(&self, asset: &Asset) -> Result<Vec<Decimal>>;
}

/// Supplies the batch of assets to screen.
pub trait AssetSource {
    fn name(&self) -> &'static str;

    fn fetch_assets(&self) -> Result<Vec<Asset>>;
}
