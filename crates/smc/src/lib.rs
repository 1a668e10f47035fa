// In crates/smc/src/lib.rs

use core_types::{PriceLevel, SmcSignals};
use rust_decimal::Decimal;

pub mod levels;
pub mod signals;
pub mod types;

pub use levels::SmcLevelDetector;
pub use signals::SmcSignalAnalyzer;
pub use types::{DetectorSettings, SignalSettings};

/// The universal interface for a structural level detector.
///
/// A detector scans an ordered price series (oldest first, ending at the current
/// price) and emits the price levels it considers structurally relevant.
/// Series that are too short yield an empty result, never an error.
pub trait LevelDetector {
    /// The name of the detector.
    fn name(&self) -> &'static str;

    fn detect(&self, series: &[Decimal], current_price: Decimal) -> Vec<PriceLevel>;
}

/// The universal interface for an SMC signal analyzer.
pub trait SignalAnalyzer {
    /// The name of the analyzer.
    fn name(&self) -> &'static str;

    fn analyze(&self, series: &[Decimal], current_price: Decimal) -> SmcSignals;
}
