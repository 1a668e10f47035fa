// In crates/report/src/console.rs

use chrono::{DateTime, TimeZone};
use core_types::TradingOpportunity;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 80;
const SEPARATOR_WIDTH: usize = 50;

/// Rounds half away from zero and always shows `dp` decimal places.
fn fixed(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

fn mark(fired: bool) -> &'static str {
    if fired { "✓" } else { "✗" }
}

/// Renders the human-readable report.
///
/// Only the first `max_levels` key levels of each opportunity are listed, in
/// detection order.
pub fn render<Tz: TimeZone>(
    opportunities: &[TradingOpportunity],
    max_levels: usize,
    generated_at: DateTime<Tz>,
) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, opportunities, max_levels, generated_at);
    out
}

fn write_report<Tz: TimeZone>(
    out: &mut String,
    opportunities: &[TradingOpportunity],
    max_levels: usize,
    generated_at: DateTime<Tz>,
) -> fmt::Result
where
    Tz::Offset: fmt::Display,
{
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "SMC TRADING OPPORTUNITIES ANALYSIS RESULTS")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Analysis Time: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Total Opportunities Found: {}", opportunities.len())?;
    writeln!(out)?;

    if opportunities.is_empty() {
        writeln!(out, "No trading opportunities found meeting SMC criteria.")?;
        return Ok(());
    }

    for (i, opp) in opportunities.iter().enumerate() {
        writeln!(out, "--- OPPORTUNITY #{} ---", i + 1)?;
        writeln!(out, "Coin: {} ({})", opp.asset.name, opp.asset.symbol)?;
        writeln!(out, "Current Price: ${}", opp.current_price)?;
        writeln!(out, "Opportunity Type: {}", opp.kind)?;
        writeln!(out, "Confidence Score: {}%", fixed(opp.confidence * Decimal::ONE_HUNDRED, 1))?;
        writeln!(out, "Suggested Entry: ${}", opp.suggested_entry)?;
        writeln!(out, "Stop Loss: ${}", opp.stop_loss)?;
        writeln!(out, "Take Profit: ${}", opp.take_profit)?;

        let signals = &opp.smc_signals;
        writeln!(out, "\nSMC Signals:")?;
        writeln!(out, "  - Break of Structure (BOS): {}", mark(signals.has_bos))?;
        writeln!(out, "  - Change of Character (CHOCH): {}", mark(signals.has_choch))?;
        writeln!(out, "  - Order Block Retest: {}", mark(signals.has_order_block_retest))?;
        writeln!(out, "  - Supply/Demand Imbalance: {}", mark(signals.has_supply_demand_imbalance))?;

        if !opp.key_levels.is_empty() && max_levels > 0 {
            writeln!(out, "\nKey Price Levels:")?;
            for level in opp.key_levels.iter().take(max_levels) {
                writeln!(
                    out,
                    "  - {}: ${} (Strength: {})",
                    level.kind,
                    level.price,
                    fixed(level.strength, 2)
                )?;
            }
        }

        writeln!(out, "\nAnalysis: {}", opp.analysis_text)?;
        writeln!(out, "\n{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    write!(out, "\n{rule}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_types::{Asset, OpportunityKind, PriceLevel, PriceLevelKind, SmcSignals};
    use rust_decimal_macros::dec;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap()
    }

    fn opportunity(levels: usize) -> TradingOpportunity {
        let key_levels = (0..levels)
            .map(|i| {
                PriceLevel::new(Decimal::from(110 + i as i64), PriceLevelKind::Support, at())
                    .with_strength(dec!(0.125))
            })
            .collect();
        TradingOpportunity {
            asset: Asset::new("SOL", "Solana", dec!(120)),
            current_price: dec!(120),
            suggested_entry: dec!(119.400),
            stop_loss: dec!(114.00),
            take_profit: dec!(127.20),
            kind: OpportunityKind::BreakoutLong,
            confidence: dec!(0.3905),
            key_levels,
            analysis_text: "Break of Structure detected.".to_string(),
            identified_at: at(),
            smc_signals: SmcSignals {
                has_bos: true,
                ..SmcSignals::default()
            },
        }
    }

    #[test]
    fn empty_report_says_nothing_was_found() {
        let text = render(&[], 3, at());
        assert!(text.contains("Analysis Time: 2024-05-01 12:30:05"));
        assert!(text.contains("Total Opportunities Found: 0"));
        assert!(text.contains("No trading opportunities found meeting SMC criteria."));
        assert!(!text.contains("OPPORTUNITY #"));
    }

    #[test]
    fn opportunity_block_lists_prices_and_signals() {
        let text = render(&[opportunity(1)], 3, at());

        assert!(text.contains("--- OPPORTUNITY #1 ---"));
        assert!(text.contains("Coin: Solana (SOL)"));
        assert!(text.contains("Opportunity Type: BREAKOUT_LONG"));
        assert!(text.contains("Confidence Score: 39.1%"));
        assert!(text.contains("Suggested Entry: $119.400"));
        assert!(text.contains("  - Break of Structure (BOS): ✓"));
        assert!(text.contains("  - Change of Character (CHOCH): ✗"));
        assert!(text.contains("  - SUPPORT: $110 (Strength: 0.13)"));
        assert!(text.contains("Analysis: Break of Structure detected."));
    }

    #[test]
    fn only_the_first_levels_are_shown() {
        let text = render(&[opportunity(5)], 3, at());

        assert!(text.contains("$110 "));
        assert!(text.contains("$112 "));
        assert!(!text.contains("$113 "));
        assert!(!text.contains("$114 "));
    }

    #[test]
    fn level_section_is_omitted_without_levels() {
        let text = render(&[opportunity(0)], 3, at());
        assert!(!text.contains("Key Price Levels:"));
    }
}
