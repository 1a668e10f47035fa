// In crates/screener/src/threshold.rs

use crate::types::ScreenerSettings;
use crate::{Error, Result, Screener};
use core_types::{Asset, TradingOpportunity};
use rust_decimal::Decimal;

/// A screener driven entirely by fixed thresholds.
///
/// This screener implements three rules:
/// 1. Rejects assets whose volume, volatility, market cap or price fall short.
/// 2. Drops opportunities below the confidence floor or without any SMC signal.
/// 3. Ranks survivors by confidence (stable for ties) and keeps the top N.
#[derive(Debug, Clone, Default)]
pub struct ThresholdScreener {
    settings: ScreenerSettings,
}

impl ThresholdScreener {
    /// Creates a new `ThresholdScreener` instance from its settings.
    pub fn new(settings: ScreenerSettings) -> Self {
        Self { settings }
    }
}

impl Screener for ThresholdScreener {
    fn name(&self) -> &'static str {
        "ThresholdScreener"
    }

    fn screen(&self, asset: &Asset) -> Result<()> {
        let s = &self.settings;

        let volume = required(asset.volume_24h, "volume24h")?;
        above(volume, s.min_volume_24h, "volume24h")?;

        let change = required(asset.percent_change_24h, "percentChange24h")?;
        above(change.abs(), s.min_abs_change_24h, "percentChange24h")?;

        let market_cap = required(asset.market_cap, "marketCap")?;
        above(market_cap, s.min_market_cap, "marketCap")?;

        if asset.current_price < s.min_price {
            return Err(Error::BelowThreshold {
                field: "currentPrice",
                value: asset.current_price,
                threshold: s.min_price,
            });
        }

        Ok(())
    }

    fn is_valid_opportunity(&self, opportunity: &TradingOpportunity) -> bool {
        opportunity.confidence >= self.settings.min_confidence
            && opportunity.smc_signals.has_structural_signal()
    }

    fn rank(&self, opportunities: Vec<TradingOpportunity>) -> Vec<TradingOpportunity> {
        let mut ranked: Vec<TradingOpportunity> = opportunities
            .into_iter()
            .filter(|o| self.is_valid_opportunity(o))
            .collect();

        // `sort_by` is stable: equal confidences keep their input order.
        ranked.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        ranked.truncate(self.settings.max_results);

        tracing::info!(count = ranked.len(), "Ranked opportunities.");
        ranked
    }
}

fn required(value: Option<Decimal>, field: &'static str) -> Result<Decimal> {
    value.ok_or(Error::MissingField { field })
}

fn above(value: Decimal, threshold: Decimal, field: &'static str) -> Result<()> {
    if value > threshold {
        Ok(())
    } else {
        Err(Error::BelowThreshold {
            field,
            value,
            threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_types::{OpportunityKind, SmcSignals};
    use rust_decimal_macros::dec;

    fn solana() -> Asset {
        let mut asset = Asset::new("SOL", "Solana", dec!(120));
        asset.market_cap = Some(dec!(45000000000));
        asset.volume_24h = Some(dec!(2500000000));
        asset.percent_change_24h = Some(dec!(7.2));
        asset.percent_change_7d = Some(dec!(15.8));
        asset
    }

    fn opportunity(symbol: &str, confidence: Decimal, has_bos: bool) -> TradingOpportunity {
        let asset = Asset::new(symbol, symbol, dec!(10));
        TradingOpportunity {
            current_price: asset.current_price,
            asset,
            suggested_entry: dec!(9.95),
            stop_loss: dec!(9.5),
            take_profit: dec!(10.6),
            kind: OpportunityKind::BreakoutLong,
            confidence,
            key_levels: Vec::new(),
            analysis_text: String::new(),
            identified_at: Utc::now(),
            smc_signals: SmcSignals {
                has_bos,
                ..SmcSignals::default()
            },
        }
    }

    fn symbols(opportunities: &[TradingOpportunity]) -> Vec<String> {
        opportunities.iter().map(|o| o.asset.symbol.0.clone()).collect()
    }

    #[test]
    fn sample_asset_passes_the_screen() {
        assert_eq!(ThresholdScreener::default().screen(&solana()), Ok(()));
    }

    #[test]
    fn low_volume_never_passes() {
        let mut asset = solana();
        asset.volume_24h = Some(dec!(5_000_000));
        let screener = ThresholdScreener::default();

        assert_eq!(
            screener.screen(&asset),
            Err(Error::BelowThreshold {
                field: "volume24h",
                value: dec!(5_000_000),
                threshold: dec!(10_000_000),
            })
        );
        assert!(screener.filter_candidates(vec![asset]).is_empty());
    }

    #[test]
    fn thresholds_are_strict_except_price() {
        let screener = ThresholdScreener::default();

        let mut asset = solana();
        asset.volume_24h = Some(dec!(10_000_000));
        assert!(!screener.meets_criteria(&asset));

        let mut asset = solana();
        asset.percent_change_24h = Some(dec!(-2));
        assert!(!screener.meets_criteria(&asset));

        let mut asset = solana();
        asset.market_cap = Some(dec!(100_000_000));
        assert!(!screener.meets_criteria(&asset));

        let mut asset = solana();
        asset.current_price = dec!(0.01);
        assert!(screener.meets_criteria(&asset));
        asset.current_price = dec!(0.0099);
        assert!(!screener.meets_criteria(&asset));
    }

    #[test]
    fn negative_change_counts_by_magnitude() {
        let mut asset = solana();
        asset.percent_change_24h = Some(dec!(-3.2));
        assert!(ThresholdScreener::default().meets_criteria(&asset));
    }

    #[test]
    fn missing_fields_fail_the_screen() {
        let screener = ThresholdScreener::default();

        let mut asset = solana();
        asset.market_cap = None;
        assert_eq!(
            screener.screen(&asset),
            Err(Error::MissingField { field: "marketCap" })
        );

        let mut asset = solana();
        asset.percent_change_24h = None;
        assert!(!screener.meets_criteria(&asset));

        assert!(!screener.meets_criteria(&Asset::new("X", "Bare", dec!(5))));
    }

    #[test]
    fn screening_is_repeatable() {
        let screener = ThresholdScreener::default();
        let mut rejected = solana();
        rejected.volume_24h = Some(dec!(1));

        for _ in 0..3 {
            assert!(screener.meets_criteria(&solana()));
            assert!(!screener.meets_criteria(&rejected));
        }
    }

    #[test]
    fn candidates_keep_input_order() {
        let mut low = solana();
        low.symbol = "LOW".into();
        low.volume_24h = Some(dec!(5_000_000));
        let mut eth = solana();
        eth.symbol = "ETH".into();

        let candidates = ThresholdScreener::default().filter_candidates(vec![solana(), low, eth]);
        let names: Vec<_> = candidates.iter().map(|a| a.symbol.0.as_str()).collect();
        assert_eq!(names, vec!["SOL", "ETH"]);
    }

    #[test]
    fn confidence_floor_is_inclusive() {
        let screener = ThresholdScreener::default();
        assert!(!screener.is_valid_opportunity(&opportunity("A", dec!(0.29), true)));
        assert!(screener.is_valid_opportunity(&opportunity("A", dec!(0.3), true)));
    }

    #[test]
    fn opportunity_needs_a_structural_signal() {
        let screener = ThresholdScreener::default();
        assert!(!screener.is_valid_opportunity(&opportunity("A", dec!(0.9), false)));
    }

    #[test]
    fn ranking_is_stable_for_equal_confidence() {
        let ranked = ThresholdScreener::default().rank(vec![
            opportunity("A", dec!(0.5), true),
            opportunity("B", dec!(0.7), true),
            opportunity("C", dec!(0.5), true),
            opportunity("D", dec!(0.29), true),
            opportunity("E", dec!(0.50), true),
        ]);
        assert_eq!(symbols(&ranked), vec!["B", "A", "C", "E"]);
    }

    #[test]
    fn ranking_keeps_the_top_twenty() {
        let opportunities: Vec<_> = (0..30)
            .map(|i| opportunity(&format!("S{i}"), Decimal::new(30 + i, 2), true))
            .collect();

        let ranked = ThresholdScreener::default().rank(opportunities);

        assert_eq!(ranked.len(), 20);
        assert_eq!(ranked[0].asset.symbol.0, "S29");
        assert_eq!(ranked[19].asset.symbol.0, "S10");
    }

    #[test]
    fn empty_input_ranks_to_empty_output() {
        assert!(ThresholdScreener::default().rank(Vec::new()).is_empty());
    }
}
