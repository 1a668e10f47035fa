// In crates/smc/src/signals.rs

use crate::SignalAnalyzer;
use crate::types::SignalSettings;
use core_types::SmcSignals;
use rust_decimal::Decimal;

/// Computes the SMC signal set (BOS, CHOCH, retest, imbalance, liquidity).
#[derive(Debug, Clone, Default)]
pub struct SmcSignalAnalyzer {
    settings: SignalSettings,
}

impl SmcSignalAnalyzer {
    /// Creates a new `SmcSignalAnalyzer` from its settings.
    pub fn new(settings: SignalSettings) -> Self {
        Self { settings }
    }

    /// Break of Structure: the current price clears the recent high or low by
    /// more than the configured threshold.
    pub fn detect_break_of_structure(&self, series: &[Decimal], current_price: Decimal) -> bool {
        let lookback = self.settings.bos_lookback;
        if lookback == 0 || series.len() < lookback {
            return false;
        }

        let recent = &series[series.len() - lookback..];
        let (Some(high), Some(low)) = (recent.iter().max(), recent.iter().min()) else {
            return false;
        };

        // A band that overflows cannot be broken.
        let threshold = self.settings.bos_threshold;
        let above = high
            .checked_mul(Decimal::ONE + threshold)
            .is_some_and(|band| current_price > band);
        let below = low
            .checked_mul(Decimal::ONE - threshold)
            .is_some_and(|band| current_price < band);
        above || below
    }

    /// Change of Character: the short-term trend turns against the medium-term
    /// trend with a move larger than the threshold.
    pub fn detect_change_of_character(&self, series: &[Decimal]) -> bool {
        if series.len() < self.settings.choch_min_len {
            return false;
        }

        let short = trend(series, self.settings.choch_short_window);
        let medium = trend(series, self.settings.choch_medium_window);

        match (short, medium) {
            (Some(short), Some(medium)) => {
                let opposed = (short > Decimal::ZERO && medium < Decimal::ZERO)
                    || (short < Decimal::ZERO && medium > Decimal::ZERO);
                opposed && short.abs() > self.settings.choch_threshold
            }
            _ => false,
        }
    }

    /// Extension point, always `false` for now.
    ///
    /// The real check should test whether `current_price` sits inside a
    /// tolerance band around a previously detected order block.
    pub fn detect_order_block_retest(&self, _series: &[Decimal], _current_price: Decimal) -> bool {
        false
    }

    /// True when any two adjacent observations are further apart than the
    /// imbalance threshold, relative to the older one.
    pub fn detect_supply_demand_imbalance(&self, series: &[Decimal]) -> bool {
        series.windows(2).any(|pair| {
            (pair[1] - pair[0])
                .abs()
                .checked_div(pair[0])
                .is_some_and(|gap| gap > self.settings.imbalance_threshold)
        })
    }

    /// Extension point returning the configured placeholder. Meant to reflect
    /// relative liquidity from volume and price action.
    pub fn liquidity_level(&self, _series: &[Decimal], _current_price: Decimal) -> Decimal {
        self.settings.liquidity_level
    }
}

impl SignalAnalyzer for SmcSignalAnalyzer {
    fn name(&self) -> &'static str {
        "SmcSignalAnalyzer"
    }

    fn analyze(&self, series: &[Decimal], current_price: Decimal) -> SmcSignals {
        let signals = SmcSignals {
            has_bos: self.detect_break_of_structure(series, current_price),
            has_choch: self.detect_change_of_character(series),
            has_order_block_retest: self.detect_order_block_retest(series, current_price),
            has_supply_demand_imbalance: self.detect_supply_demand_imbalance(series),
            liquidity_level: self.liquidity_level(series, current_price),
        };

        tracing::debug!(
            bos = signals.has_bos,
            choch = signals.has_choch,
            imbalance = signals.has_supply_demand_imbalance,
            "Computed SMC signals."
        );

        signals
    }
}

/// Relative change from the first to the last of the trailing `window` observations.
fn trend(series: &[Decimal], window: usize) -> Option<Decimal> {
    if window < 2 || series.len() < window {
        return None;
    }
    let first = series[series.len() - window];
    let last = series[series.len() - 1];
    (last - first).checked_div(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn analyzer() -> SmcSignalAnalyzer {
        SmcSignalAnalyzer::new(SignalSettings::default())
    }

    fn series_of(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|v| Decimal::from(*v)).collect()
    }

    fn choch_series(last: i64) -> Vec<Decimal> {
        // s[-15] = 100, s[-5] = 120, s[-1] = `last`
        let mut values = vec![100; 6];
        values.extend([102, 104, 106, 108, 110, 112, 114, 116, 118, 120, 119, 118, 117]);
        values.push(last);
        series_of(&values)
    }

    #[test]
    fn break_above_recent_high() {
        let series = series_of(&[100, 98, 97, 99, 103, 102, 101, 100, 99, 98, 97, 96]);
        // Last ten are [97, 99, 103, 102, 101, 100, 99, 98, 97, 96]; 103 * 1.015 = 104.545
        assert!(analyzer().detect_break_of_structure(&series, dec!(110)));
        assert!(!analyzer().detect_break_of_structure(&series, dec!(104.545)));
        assert!(!analyzer().detect_break_of_structure(&series, dec!(104)));
    }

    #[test]
    fn break_below_recent_low() {
        let series = series_of(&[97, 99, 103, 102, 101, 100, 99, 98, 97, 96]);
        // 96 * 0.985 = 94.56
        assert!(analyzer().detect_break_of_structure(&series, dec!(94.5)));
        assert!(!analyzer().detect_break_of_structure(&series, dec!(94.56)));
    }

    #[test]
    fn no_break_of_structure_on_short_series() {
        let series = series_of(&[97, 99, 103, 102, 101, 100, 99, 98, 97]);
        assert!(!analyzer().detect_break_of_structure(&series, dec!(1000)));
        assert!(!analyzer().detect_break_of_structure(&series, dec!(1)));
    }

    #[test]
    fn change_of_character_on_reversal() {
        // short = (115 - 120) / 120 < -0.01, medium = (115 - 100) / 100 > 0
        assert!(analyzer().detect_change_of_character(&choch_series(115)));
    }

    #[test]
    fn small_reversal_is_not_a_change_of_character() {
        // short = (119 - 120) / 120 is under 1%
        assert!(!analyzer().detect_change_of_character(&choch_series(119)));
    }

    #[test]
    fn aligned_trends_are_not_a_change_of_character() {
        assert!(!analyzer().detect_change_of_character(&choch_series(130)));
    }

    #[test]
    fn change_of_character_needs_twenty_observations() {
        let mut series = choch_series(115);
        series.remove(0);
        assert_eq!(series.len(), 19);
        assert!(!analyzer().detect_change_of_character(&series));
    }

    #[test]
    fn tiny_prices_do_not_overflow_the_analysis() {
        let tiny = Decimal::new(1, 28);
        let mut series = Vec::new();
        for _ in 0..15 {
            series.extend([dec!(7.9), tiny, dec!(1), tiny]);
        }
        series.push(dec!(1));

        let signals = analyzer().analyze(&series, dec!(1));
        assert!(signals.has_supply_demand_imbalance);
        assert!(!analyzer().detect_break_of_structure(&[Decimal::MAX; 10], Decimal::MAX));
    }

    #[test]
    fn imbalance_threshold_is_strict() {
        assert!(!analyzer().detect_supply_demand_imbalance(&[dec!(100), dec!(102.5)]));
        assert!(analyzer().detect_supply_demand_imbalance(&[dec!(100), dec!(102.6)]));
        assert!(analyzer().detect_supply_demand_imbalance(&[dec!(100), dec!(97.4), dec!(97.4)]));
    }

    #[test]
    fn constant_series_has_no_signals() {
        let series = vec![dec!(42); 40];
        let signals = analyzer().analyze(&series, dec!(42));

        assert!(!signals.has_bos);
        assert!(!signals.has_choch);
        assert!(!signals.has_order_block_retest);
        assert!(!signals.has_supply_demand_imbalance);
        assert!(!signals.has_structural_signal());
    }

    #[test]
    fn placeholders_come_from_settings() {
        let settings = SignalSettings {
            liquidity_level: dec!(0.4),
            ..SignalSettings::default()
        };
        let signals = SmcSignalAnalyzer::new(settings).analyze(&[dec!(1); 12], dec!(1));
        assert_eq!(signals.liquidity_level, dec!(0.4));
        assert!(!signals.has_order_block_retest);
    }
}
