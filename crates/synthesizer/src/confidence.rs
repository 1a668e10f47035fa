// In crates/synthesizer/src/confidence.rs

use crate::types::{SynthesisSettings, TradeLevels};
use core_types::{OpportunityKind, PriceLevel, SmcSignals};
use rust_decimal::Decimal;

/// Pairs each boolean signal with its confidence weight.
fn weighted_flags(signals: &SmcSignals, settings: &SynthesisSettings) -> [(bool, Decimal); 4] {
    [
        (signals.has_bos, settings.bos_weight),
        (signals.has_choch, settings.choch_weight),
        (signals.has_order_block_retest, settings.retest_weight),
        (signals.has_supply_demand_imbalance, settings.imbalance_weight),
    ]
}

/// The confidence score: weights of the signals that fired plus the weighted
/// strength of every key level, capped at `max_confidence`.
///
/// Order block strengths are unclamped, so the sum saturates at the cap
/// instead of overflowing. There is no lower clamp; with non-negative
/// strengths the sum cannot go below zero.
pub fn score_confidence(
    signals: &SmcSignals,
    levels: &[PriceLevel],
    settings: &SynthesisSettings,
) -> Decimal {
    let cap = settings.max_confidence;

    let signal_terms = weighted_flags(signals, settings)
        .into_iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, weight)| Some(weight));
    let level_terms = levels
        .iter()
        .map(|level| level.strength.checked_mul(settings.level_strength_weight));

    let mut total = Decimal::ZERO;
    for term in signal_terms.chain(level_terms) {
        match term.and_then(|t| total.checked_add(t)) {
            Some(sum) if sum < cap => total = sum,
            _ => return cap,
        }
    }
    total
}

/// Picks the opportunity kind. Rules apply in order and the later one wins,
/// so an order block retest overrides a breakout.
pub fn select_kind(signals: &SmcSignals) -> OpportunityKind {
    let mut kind = OpportunityKind::WaitRetest;
    if signals.has_bos {
        kind = OpportunityKind::BreakoutLong;
    }
    if signals.has_order_block_retest {
        kind = OpportunityKind::BuyLong;
    }
    kind
}

/// Entry slightly better than the current price, with a fixed-percentage stop and target.
pub fn trading_levels(
    kind: OpportunityKind,
    current_price: Decimal,
    settings: &SynthesisSettings,
) -> TradeLevels {
    let adjustment = current_price * settings.entry_adjustment;

    if kind.is_long() {
        TradeLevels {
            entry: current_price - adjustment,
            stop_loss: current_price * settings.long_stop_loss,
            take_profit: current_price * settings.long_take_profit,
        }
    } else {
        TradeLevels {
            entry: current_price + adjustment,
            stop_loss: current_price * settings.short_stop_loss,
            take_profit: current_price * settings.short_take_profit,
        }
    }
}
