// In crates/synthesizer/src/engine.rs

use crate::confidence::{score_confidence, select_kind, trading_levels};
use crate::types::SynthesisSettings;
use chrono::{DateTime, Utc};
use core_types::{Asset, PriceLevel, SmcSignals, TradingOpportunity};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// The engine responsible for turning levels and signals into a trading opportunity.
#[derive(Debug, Clone, Default)]
pub struct OpportunitySynthesizer {
    settings: SynthesisSettings,
}

impl OpportunitySynthesizer {
    pub fn new(settings: SynthesisSettings) -> Self {
        Self { settings }
    }

    /// Builds the opportunity for `asset`, stamped with the current time.
    pub fn synthesize(
        &self,
        asset: &Asset,
        levels: Vec<PriceLevel>,
        signals: SmcSignals,
    ) -> TradingOpportunity {
        self.synthesize_at(asset, levels, signals, Utc::now())
    }

    pub fn synthesize_at(
        &self,
        asset: &Asset,
        levels: Vec<PriceLevel>,
        signals: SmcSignals,
        identified_at: DateTime<Utc>,
    ) -> TradingOpportunity {
        let current_price = asset.current_price;

        let confidence = score_confidence(&signals, &levels, &self.settings);
        let kind = select_kind(&signals);
        let trade = trading_levels(kind, current_price, &self.settings);
        let analysis_text = analysis_text(&signals, confidence, levels.len());

        tracing::debug!(
            symbol = %asset.symbol,
            %kind,
            %confidence,
            levels = levels.len(),
            "Synthesized opportunity."
        );

        TradingOpportunity {
            asset: asset.clone(),
            current_price,
            suggested_entry: trade.entry,
            stop_loss: trade.stop_loss,
            take_profit: trade.take_profit,
            kind,
            confidence,
            key_levels: levels,
            analysis_text,
            identified_at,
            smc_signals: signals,
        }
    }
}

/// Renders the fixed-phrase rationale for an opportunity.
pub fn analysis_text(signals: &SmcSignals, confidence: Decimal, level_count: usize) -> String {
    let mut parts: Vec<String> = [
        (signals.has_bos, "Break of Structure detected."),
        (signals.has_choch, "Change of Character identified."),
        (signals.has_order_block_retest, "Order block retest opportunity."),
        (signals.has_supply_demand_imbalance, "Supply/demand imbalance present."),
    ]
    .iter()
    .filter(|(fired, _)| *fired)
    .map(|(_, phrase)| phrase.to_string())
    .collect();

    let mut percent = (confidence * dec!(100))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(1);
    parts.push(format!("Confidence: {}%.", percent));
    parts.push(format!("Key levels identified: {}.", level_count));

    parts.join(" ")
}
