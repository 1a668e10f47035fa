// In crates/core-types/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Price series for {symbol} is empty")]
    EmptySeries { symbol: String },

    #[error("Price series for {symbol} ends at {last}, expected current price {current}")]
    SeriesMismatch {
        symbol: String,
        last: Decimal,
        current: Decimal,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
