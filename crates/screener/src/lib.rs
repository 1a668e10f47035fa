// In crates/screener/src/lib.rs

use core_types::{Asset, TradingOpportunity};

pub mod error;
pub mod threshold;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use threshold::ThresholdScreener;
pub use types::ScreenerSettings;

/// The universal interface for candidate screening and opportunity ranking.
///
/// A `Screener` sits on both sides of the analysis: it decides which assets are
/// worth analyzing at all, and which of the resulting opportunities make the
/// final, ranked list.
pub trait Screener {
    /// The name of the screening policy.
    fn name(&self) -> &'static str;

    /// Checks an asset against the market-quality criteria.
    ///
    /// # Returns
    ///
    /// * `Ok(())`: The asset should be analyzed.
    /// * `Err(Error)`: The asset was rejected; the error names the failed criterion.
    fn screen(&self, asset: &Asset) -> Result<()>;

    /// Pure predicate form of [`Screener::screen`].
    fn meets_criteria(&self, asset: &Asset) -> bool {
        self.screen(asset).is_ok()
    }

    /// Keeps the assets that pass [`Screener::screen`], in their original order.
    fn filter_candidates(&self, assets: Vec<Asset>) -> Vec<Asset> {
        let total = assets.len();
        let candidates: Vec<Asset> = assets
            .into_iter()
            .filter(|asset| match self.screen(asset) {
                Ok(()) => true,
                Err(reason) => {
                    tracing::debug!(symbol = %asset.symbol, %reason, "Asset screened out.");
                    false
                }
            })
            .collect();

        tracing::info!(screener = self.name(), total, candidates = candidates.len(), "Filtered candidates.");
        candidates
    }

    /// Decides whether an analyzed opportunity is worth reporting.
    fn is_valid_opportunity(&self, opportunity: &TradingOpportunity) -> bool;

    /// Filters out invalid opportunities and orders the rest best-first.
    fn rank(&self, opportunities: Vec<TradingOpportunity>) -> Vec<TradingOpportunity>;
}
