// In crates/market-data/src/sample.rs

use chrono::Utc;
use core_types::Asset;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builds one fully populated sample asset.
fn sample(
    symbol: &str,
    name: &str,
    price: Decimal,
    market_cap: Decimal,
    volume_24h: Decimal,
    change_24h: Decimal,
    change_7d: Decimal,
) -> Asset {
    Asset {
        market_cap: Some(market_cap),
        volume_24h: Some(volume_24h),
        percent_change_24h: Some(change_24h),
        percent_change_7d: Some(change_7d),
        last_updated: Some(Utc::now()),
        ..Asset::new(symbol, name, price)
    }
}

/// The built-in dataset used when no live asset list can be fetched.
pub fn sample_assets() -> Vec<Asset> {
    vec![
        sample("BTC", "Bitcoin", dec!(45000), dec!(850000000000), dec!(25000000000), dec!(2.5), dec!(8.2)),
        sample("ETH", "Ethereum", dec!(2800), dec!(320000000000), dec!(15000000000), dec!(-1.8), dec!(5.4)),
        sample("SOL", "Solana", dec!(120), dec!(45000000000), dec!(2500000000), dec!(7.2), dec!(15.8)),
        sample("ADA", "Cardano", dec!(0.85), dec!(28000000000), dec!(800000000), dec!(-3.2), dec!(2.1)),
        sample("MATIC", "Polygon", dec!(1.25), dec!(12000000000), dec!(600000000), dec!(4.8), dec!(12.3)),
    ]
}
