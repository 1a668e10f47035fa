// In crates/core-types/src/types.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticker symbol such as "BTC" or "SOL".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol(value.to_string())
    }
}

/// A snapshot of a tradable asset's market statistics.
///
/// Only `current_price` is mandatory. The remaining market stats are optional
/// because data sources regularly leave them blank; an asset with a missing
/// stat simply fails the candidate screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub symbol: Symbol,
    pub name: String,
    pub current_price: Decimal,
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    #[serde(default)]
    pub volume_24h: Option<Decimal>,
    /// 24h change in percent (e.g. `2.5` for +2.5%).
    #[serde(default)]
    pub percent_change_24h: Option<Decimal>,
    #[serde(default)]
    pub percent_change_7d: Option<Decimal>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Asset {
    /// Creates an asset with only a symbol, name and price. Market stats start empty.
    pub fn new(symbol: &str, name: &str, current_price: Decimal) -> Self {
        Self {
            symbol: Symbol::from(symbol),
            name: name.to_string(),
            current_price,
            ..Self::default()
        }
    }
}

/// The structural role a detected price level plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceLevelKind {
    Support,
    Resistance,
    OrderBlockBullish,
    OrderBlockBearish,
    SupplyZone,
    DemandZone,
}

impl PriceLevelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceLevelKind::Support => "SUPPORT",
            PriceLevelKind::Resistance => "RESISTANCE",
            PriceLevelKind::OrderBlockBullish => "ORDER_BLOCK_BULLISH",
            PriceLevelKind::OrderBlockBearish => "ORDER_BLOCK_BEARISH",
            PriceLevelKind::SupplyZone => "SUPPLY_ZONE",
            PriceLevelKind::DemandZone => "DEMAND_ZONE",
        }
    }
}

impl fmt::Display for PriceLevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural price level emitted by the level detector.
///
/// `tested` always equals `touch_count > 0`. Both fields are private and can
/// only be changed together through [`PriceLevel::with_touch_count`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PriceLevelRecord")]
pub struct PriceLevel {
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub kind: PriceLevelKind,
    /// Relative strength. Order block strengths are not clamped and may exceed 1.
    pub strength: Decimal,
    tested: bool,
    touch_count: u32,
}

impl PriceLevel {
    /// Creates an untested level with zero strength.
    pub fn new(price: Decimal, kind: PriceLevelKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            price,
            timestamp,
            kind,
            strength: Decimal::ZERO,
            tested: false,
            touch_count: 0,
        }
    }

    pub fn with_strength(mut self, strength: Decimal) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_touch_count(mut self, touch_count: u32) -> Self {
        self.touch_count = touch_count;
        self.tested = touch_count > 0;
        self
    }

    pub fn touch_count(&self) -> u32 {
        self.touch_count
    }

    pub fn is_tested(&self) -> bool {
        self.tested
    }
}

// Wire shape of a level. `tested` is accepted but recomputed from the touch count.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceLevelRecord {
    price: Decimal,
    timestamp: DateTime<Utc>,
    kind: PriceLevelKind,
    #[serde(default)]
    strength: Decimal,
    #[serde(default, rename = "tested")]
    _tested: bool,
    #[serde(default)]
    touch_count: u32,
}

impl From<PriceLevelRecord> for PriceLevel {
    fn from(record: PriceLevelRecord) -> Self {
        PriceLevel::new(record.price, record.kind, record.timestamp)
            .with_strength(record.strength)
            .with_touch_count(record.touch_count)
    }
}

/// The SMC signal set computed once per analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmcSignals {
    /// Break of Structure.
    #[serde(rename = "hasBOS")]
    pub has_bos: bool,
    /// Change of Character.
    #[serde(rename = "hasCHOCH")]
    pub has_choch: bool,
    pub has_order_block_retest: bool,
    pub has_supply_demand_imbalance: bool,
    pub liquidity_level: Decimal,
}

impl SmcSignals {
    /// True if at least one of the four boolean SMC signals fired.
    pub fn has_structural_signal(&self) -> bool {
        self.has_bos
            || self.has_choch
            || self.has_order_block_retest
            || self.has_supply_demand_imbalance
    }
}

/// The classification of a trading opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityKind {
    BuyLong,
    SellShort,
    WaitRetest,
    BreakoutLong,
    BreakoutShort,
}

impl OpportunityKind {
    /// Long-biased kinds get entries below and targets above the current price.
    pub fn is_long(&self) -> bool {
        matches!(self, OpportunityKind::BuyLong | OpportunityKind::BreakoutLong)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityKind::BuyLong => "BUY_LONG",
            OpportunityKind::SellShort => "SELL_SHORT",
            OpportunityKind::WaitRetest => "WAIT_RETEST",
            OpportunityKind::BreakoutLong => "BREAKOUT_LONG",
            OpportunityKind::BreakoutShort => "BREAKOUT_SHORT",
        }
    }
}

impl fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully analyzed trading opportunity for a single asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingOpportunity {
    pub asset: Asset,
    pub current_price: Decimal,
    pub suggested_entry: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub kind: OpportunityKind,
    /// Heuristic score in `[0, 1]`, not a probability.
    pub confidence: Decimal,
    /// Levels in detection order.
    pub key_levels: Vec<PriceLevel>,
    pub analysis_text: String,
    pub identified_at: DateTime<Utc>,
    pub smc_signals: SmcSignals,
}
