// In crates/smc/src/levels.rs

use crate::LevelDetector;
use crate::types::DetectorSettings;
use chrono::{DateTime, Duration, Utc};
use core_types::{PriceLevel, PriceLevelKind};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

/// Detects order blocks, supply/demand zones and support/resistance levels.
///
/// The three passes run independently and their results are concatenated in
/// that order. The same price can show up under several kinds; each kind
/// answers a different question, so nothing is deduplicated.
#[derive(Debug, Clone, Default)]
pub struct SmcLevelDetector {
    settings: DetectorSettings,
}

impl SmcLevelDetector {
    /// Creates a new `SmcLevelDetector` from its settings.
    pub fn new(settings: DetectorSettings) -> Self {
        Self { settings }
    }

    /// Same as [`LevelDetector::detect`] but with an explicit anchor time for
    /// the synthetic level timestamps.
    pub fn detect_at(
        &self,
        series: &[Decimal],
        current_price: Decimal,
        anchor: DateTime<Utc>,
    ) -> Vec<PriceLevel> {
        if series.len() < self.settings.min_series_len {
            return Vec::new();
        }

        let order_blocks = self.detect_order_blocks(series, anchor);
        let zones = self.detect_supply_demand_zones(series, anchor);
        let support_resistance = self.detect_support_resistance(series, current_price, anchor);

        tracing::debug!(
            order_blocks = order_blocks.len(),
            zones = zones.len(),
            support_resistance = support_resistance.len(),
            "Detected key levels."
        );

        let mut levels = order_blocks;
        levels.extend(zones);
        levels.extend(support_resistance);
        levels
    }

    /// Scans every bar in `[2, len-3]` for a sharp reversal on the following bar.
    pub fn detect_order_blocks(&self, series: &[Decimal], anchor: DateTime<Utc>) -> Vec<PriceLevel> {
        let len = series.len();
        let mut blocks = Vec::new();

        for i in 2..len.saturating_sub(2) {
            let (prev, bar, next) = (series[i - 1], series[i], series[i + 1]);

            let kind = if self.is_bullish_block(prev, bar, next) {
                PriceLevelKind::OrderBlockBullish
            } else if self.is_bearish_block(prev, bar, next) {
                PriceLevelKind::OrderBlockBearish
            } else {
                continue;
            };

            blocks.push(
                PriceLevel::new(bar, kind, synthetic_timestamp(anchor, len, i))
                    .with_strength(self.order_block_strength(series, i)),
            );
        }

        blocks
    }

    /// Local highs become supply zones, local lows become demand zones.
    pub fn detect_supply_demand_zones(
        &self,
        series: &[Decimal],
        anchor: DateTime<Utc>,
    ) -> Vec<PriceLevel> {
        let len = series.len();
        let margin = self.settings.zone_edge_margin;
        let window = self.settings.zone_window;
        let mut zones = Vec::new();

        for i in margin..len.saturating_sub(margin) {
            let kind = if is_local_extreme(series, i, window, Ordering::Greater) {
                PriceLevelKind::SupplyZone
            } else if is_local_extreme(series, i, window, Ordering::Less) {
                PriceLevelKind::DemandZone
            } else {
                continue;
            };

            let strength = self.zone_strength(series, i, kind);
            zones.push(
                PriceLevel::new(series[i], kind, synthetic_timestamp(anchor, len, i))
                    .with_strength(strength),
            );
        }

        zones
    }

    /// Clusters of observations within the touch tolerance form support below
    /// the current price and resistance above it.
    pub fn detect_support_resistance(
        &self,
        series: &[Decimal],
        current_price: Decimal,
        anchor: DateTime<Utc>,
    ) -> Vec<PriceLevel> {
        let len = series.len();
        let mut levels = Vec::new();

        for i in 1..len.saturating_sub(1) {
            let price = series[i];
            let touches = self.count_touches(series, price);
            if touches < self.settings.min_touches {
                continue;
            }

            let kind = if price > current_price {
                PriceLevelKind::Resistance
            } else {
                PriceLevelKind::Support
            };
            let strength = (Decimal::from(touches) * self.settings.touch_strength_step)
                .min(self.settings.max_touch_strength);
            let touch_count = u32::try_from(touches).unwrap_or(u32::MAX);

            levels.push(
                PriceLevel::new(price, kind, synthetic_timestamp(anchor, len, i))
                    .with_strength(strength)
                    .with_touch_count(touch_count),
            );
        }

        levels
    }

    fn is_bullish_block(&self, prev: Decimal, bar: Decimal, next: Decimal) -> bool {
        bar < prev
            && next > bar
            && relative_move(bar, next).is_some_and(|m| m > self.settings.order_block_threshold)
    }

    fn is_bearish_block(&self, prev: Decimal, bar: Decimal, next: Decimal) -> bool {
        bar > prev
            && next < bar
            && relative_move(bar, next).is_some_and(|m| m > self.settings.order_block_threshold)
    }

    /// `|series[i+1] - series[i-1]| / series[i]`, deliberately left unclamped.
    fn order_block_strength(&self, series: &[Decimal], index: usize) -> Decimal {
        (series[index + 1] - series[index - 1])
            .abs()
            .checked_div(series[index])
            .map(|s| {
                s.round_dp_with_strategy(
                    self.settings.strength_scale,
                    RoundingStrategy::MidpointAwayFromZero,
                )
            })
            .unwrap_or(Decimal::ZERO)
    }

    /// Extension point: zones currently share one fixed placeholder strength.
    /// A real score would weigh the swing magnitude and traded volume around `index`.
    fn zone_strength(&self, _series: &[Decimal], _index: usize, _kind: PriceLevelKind) -> Decimal {
        self.settings.zone_strength
    }

    fn count_touches(&self, series: &[Decimal], level: Decimal) -> usize {
        let upper = level
            .checked_mul(Decimal::ONE + self.settings.touch_tolerance)
            .unwrap_or(Decimal::MAX);
        let lower = level
            .checked_mul(Decimal::ONE - self.settings.touch_tolerance)
            .unwrap_or(Decimal::MIN);
        series.iter().filter(|p| **p >= lower && **p <= upper).count()
    }
}

impl LevelDetector for SmcLevelDetector {
    fn name(&self) -> &'static str {
        "SmcLevelDetector"
    }

    fn detect(&self, series: &[Decimal], current_price: Decimal) -> Vec<PriceLevel> {
        self.detect_at(series, current_price, Utc::now())
    }
}

/// `|to - from| / from`, or `None` when `from` is zero.
fn relative_move(from: Decimal, to: Decimal) -> Option<Decimal> {
    (to - from).abs().checked_div(from)
}

/// True if `series[index]` compares as `ordering` against every neighbour
/// within `window` bars on either side.
fn is_local_extreme(series: &[Decimal], index: usize, window: usize, ordering: Ordering) -> bool {
    if window == 0 || index < window || index + window >= series.len() {
        return false;
    }
    let price = series[index];
    (index - window..=index + window)
        .filter(|&j| j != index)
        .all(|j| price.cmp(&series[j]) == ordering)
}

// Synthetic recency marker: bar `index` of a `len` long series sits `len - index` hours back.
fn synthetic_timestamp(anchor: DateTime<Utc>, len: usize, index: usize) -> DateTime<Utc> {
    anchor - Duration::hours((len - index) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn detector() -> SmcLevelDetector {
        SmcLevelDetector::new(DetectorSettings::default())
    }

    fn kinds(levels: &[PriceLevel]) -> Vec<PriceLevelKind> {
        levels.iter().map(|l| l.kind).collect()
    }

    fn is_order_block(kind: PriceLevelKind) -> bool {
        matches!(
            kind,
            PriceLevelKind::OrderBlockBullish | PriceLevelKind::OrderBlockBearish
        )
    }

    fn is_zone(kind: PriceLevelKind) -> bool {
        matches!(kind, PriceLevelKind::SupplyZone | PriceLevelKind::DemandZone)
    }

    #[test]
    fn short_series_yields_no_levels() {
        let series = vec![dec!(100), dec!(90), dec!(110), dec!(80), dec!(120), dec!(70), dec!(130), dec!(60), dec!(140)];
        assert!(detector().detect_at(&series, dec!(140), anchor()).is_empty());
    }

    #[test]
    fn constant_series_has_no_blocks_or_zones() {
        let series = vec![dec!(100); 30];
        let levels = detector().detect_at(&series, dec!(100), anchor());

        assert!(levels.iter().all(|l| !is_order_block(l.kind) && !is_zone(l.kind)));
        // Every interior bar touches all 30 observations and sits at (not above) the price.
        assert_eq!(levels.len(), 28);
        assert!(levels.iter().all(|l| l.kind == PriceLevelKind::Support));
        assert!(levels.iter().all(|l| l.strength == dec!(1.0) && l.touch_count() == 30));
    }

    #[test]
    fn detects_bullish_and_bearish_order_blocks() {
        let mut series = vec![dec!(100), dec!(101), dec!(105), dec!(100), dec!(104)];
        series.extend(vec![dec!(103); 7]);

        let blocks = detector().detect_order_blocks(&series, anchor());

        assert_eq!(
            kinds(&blocks),
            vec![PriceLevelKind::OrderBlockBearish, PriceLevelKind::OrderBlockBullish]
        );
        assert_eq!(blocks[0].price, dec!(105));
        // |100 - 101| / 105 rounded to four places
        assert_eq!(blocks[0].strength, dec!(0.0095));
        assert_eq!(blocks[1].price, dec!(100));
        assert_eq!(blocks[1].strength, dec!(0.01));
        assert!(!blocks[1].is_tested());
    }

    #[test]
    fn order_block_threshold_is_strict() {
        let mut exact = vec![dec!(110), dec!(110), dec!(110), dec!(100), dec!(102)];
        exact.extend(vec![dec!(102); 7]);
        assert!(detector().detect_order_blocks(&exact, anchor()).is_empty());

        let mut above = vec![dec!(110), dec!(110), dec!(110), dec!(100), dec!(102.01)];
        above.extend(vec![dec!(102); 7]);
        let blocks = detector().detect_order_blocks(&above, anchor());
        assert_eq!(kinds(&blocks), vec![PriceLevelKind::OrderBlockBullish]);
    }

    #[test]
    fn order_block_strength_is_not_clamped() {
        let mut series = vec![dec!(10), dec!(10), dec!(100), dec!(10), dec!(250)];
        series.extend(vec![dec!(250); 7]);

        let blocks = detector().detect_order_blocks(&series, anchor());
        let bullish = blocks
            .iter()
            .find(|b| b.kind == PriceLevelKind::OrderBlockBullish)
            .unwrap();
        // |250 - 100| / 10
        assert_eq!(bullish.strength, dec!(15));
    }

    #[test]
    fn detects_supply_and_demand_zones() {
        let mut series = vec![dec!(10); 14];
        series[5] = dec!(15);
        series[8] = dec!(5);

        let zones = detector().detect_supply_demand_zones(&series, anchor());

        assert_eq!(
            kinds(&zones),
            vec![PriceLevelKind::SupplyZone, PriceLevelKind::DemandZone]
        );
        assert_eq!(zones[0].price, dec!(15));
        assert_eq!(zones[1].price, dec!(5));
        assert!(zones.iter().all(|z| z.strength == dec!(0.5)));
    }

    #[test]
    fn zones_ignore_extrema_near_the_edges() {
        let mut series = vec![dec!(10); 12];
        series[4] = dec!(20);
        series[7] = dec!(1);
        assert!(detector().detect_supply_demand_zones(&series, anchor()).is_empty());
    }

    #[test]
    fn classifies_support_and_resistance_by_current_price() {
        let series = vec![
            dec!(50), dec!(200), dec!(201), dec!(60), dec!(70),
            dec!(80), dec!(90), dec!(99.5), dec!(99.9), dec!(100),
        ];

        let levels = detector().detect_support_resistance(&series, dec!(100), anchor());

        let summary: Vec<_> = levels
            .iter()
            .map(|l| (l.price, l.kind, l.touch_count(), l.strength))
            .collect();
        assert_eq!(
            summary,
            vec![
                (dec!(200), PriceLevelKind::Resistance, 2, dec!(0.4)),
                (dec!(201), PriceLevelKind::Resistance, 2, dec!(0.4)),
                (dec!(99.5), PriceLevelKind::Support, 3, dec!(0.6)),
                (dec!(99.9), PriceLevelKind::Support, 3, dec!(0.6)),
            ]
        );
        assert!(levels.iter().all(|l| l.is_tested()));
    }

    #[test]
    fn emits_order_blocks_then_zones_then_levels() {
        let mut series = vec![dec!(100); 16];
        series[7] = dec!(120);

        let levels = detector().detect_at(&series, dec!(100), anchor());

        let first_zone = levels.iter().position(|l| is_zone(l.kind)).unwrap();
        let first_sr = levels
            .iter()
            .position(|l| matches!(l.kind, PriceLevelKind::Support | PriceLevelKind::Resistance))
            .unwrap();
        assert!(is_order_block(levels[0].kind));
        assert!(first_zone < first_sr);
        assert!(levels[first_zone..first_sr].iter().all(|l| is_zone(l.kind)));
    }

    #[test]
    fn extreme_prices_do_not_overflow_touch_bands() {
        let series = vec![Decimal::MAX; 12];

        let levels = detector().detect_support_resistance(&series, Decimal::MAX, anchor());

        assert_eq!(levels.len(), 10);
        assert!(levels.iter().all(|l| l.touch_count() == 12));
    }

    #[test]
    fn timestamps_count_back_from_the_anchor() {
        let mut series = vec![dec!(100), dec!(101), dec!(105), dec!(100), dec!(104)];
        series.extend(vec![dec!(103); 5]);

        let blocks = detector().detect_order_blocks(&series, anchor());

        // Bearish block at index 2 of a 10-bar series.
        assert_eq!(blocks[0].timestamp, anchor() - Duration::hours(8));
        assert_eq!(blocks[1].timestamp, anchor() - Duration::hours(7));
    }
}
