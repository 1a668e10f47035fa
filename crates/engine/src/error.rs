// In crates/engine/src/error.rs

use thiserror::Error;

/// Why a single candidate could not be analyzed.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    MarketData(#[from] market_data::Error),

    #[error(transparent)]
    InvalidSeries(#[from] core_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
