// In crates/engine/src/lib.rs

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{CandidateFailure, ScanReport};

use app_config::{EngineSettings, Settings};
use core_types::{Asset, TradingOpportunity};
use market_data::PriceSeriesProvider;
use rayon::prelude::*;
use screener::{Screener, ThresholdScreener};
use smc::{LevelDetector, SignalAnalyzer, SmcLevelDetector, SmcSignalAnalyzer};
use synthesizer::OpportunitySynthesizer;

/// The screen -> analyze -> rank pipeline.
///
/// Each candidate is analyzed independently. A candidate whose price series
/// cannot be obtained or is inconsistent is recorded as a failure and skipped.
pub struct Engine {
    settings: EngineSettings,
    provider: Box<dyn PriceSeriesProvider>,
    detector: Box<dyn LevelDetector + Send + Sync>,
    analyzer: Box<dyn SignalAnalyzer + Send + Sync>,
    synthesizer: OpportunitySynthesizer,
    screener: Box<dyn Screener + Send + Sync>,
}

impl Engine {
    /// Builds the pipeline components from the application settings.
    pub fn new(settings: &Settings, provider: Box<dyn PriceSeriesProvider>) -> Self {
        tracing::info!(
            provider = provider.name(),
            parallel = settings.engine.parallel,
            "Initializing scan engine..."
        );
        Self {
            settings: settings.engine.clone(),
            provider,
            detector: Box::new(SmcLevelDetector::new(settings.detector.clone())),
            analyzer: Box::new(SmcSignalAnalyzer::new(settings.signals.clone())),
            synthesizer: OpportunitySynthesizer::new(settings.synthesis.clone()),
            screener: Box::new(ThresholdScreener::new(settings.screener.clone())),
        }
    }

    /// Runs one full pass over `assets`.
    pub fn scan(&self, assets: Vec<Asset>) -> ScanReport {
        let screened = assets.len();
        let candidates = self.screener.filter_candidates(assets);
        if candidates.is_empty() {
            tracing::info!(screened, "No candidates passed the screen.");
            return ScanReport {
                screened,
                ..ScanReport::default()
            };
        }

        // Both branches keep input order, so ranking ties resolve identically.
        let results: Vec<Result<TradingOpportunity>> = if self.settings.parallel {
            candidates.par_iter().map(|a| self.analyze_candidate(a)).collect()
        } else {
            candidates.iter().map(|a| self.analyze_candidate(a)).collect()
        };

        let mut analyzed = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (asset, result) in candidates.iter().zip(results) {
            match result {
                Ok(opportunity) => analyzed.push(opportunity),
                Err(e) => {
                    tracing::warn!(symbol = %asset.symbol, error = %e, "Candidate analysis failed. Skipping.");
                    failures.push(CandidateFailure {
                        symbol: asset.symbol.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let opportunities = self.screener.rank(analyzed);
        tracing::info!(
            screened,
            candidates = candidates.len(),
            opportunities = opportunities.len(),
            failures = failures.len(),
            "Scan complete."
        );

        ScanReport {
            screened,
            candidates: candidates.len(),
            opportunities,
            failures,
        }
    }

    /// Fetches the series for one asset and runs detection, signals and synthesis on it.
    pub fn analyze_candidate(&self, asset: &Asset) -> Result<TradingOpportunity> {
        let series = self.provider.price_series(asset)?;
        validate_series(asset, &series)?;

        let price = asset.current_price;
        let levels = self.detector.detect(&series, price);
        let signals = self.analyzer.analyze(&series, price);

        tracing::debug!(
            symbol = %asset.symbol,
            observations = series.len(),
            levels = levels.len(),
            "Analyzed candidate."
        );

        Ok(self.synthesizer.synthesize(asset, levels, signals))
    }
}

/// The series must end at the asset's current price.
fn validate_series(asset: &Asset, series: &[rust_decimal::Decimal]) -> core_types::Result<()> {
    match series.last() {
        None => Err(core_types::Error::EmptySeries {
            symbol: asset.symbol.0.clone(),
        }),
        Some(last) if *last != asset.current_price => Err(core_types::Error::SeriesMismatch {
            symbol: asset.symbol.0.clone(),
            last: *last,
            current: asset.current_price,
        }),
        Some(_) => Ok(()),
    }
}
