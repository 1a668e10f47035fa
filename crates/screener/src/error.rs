// In crates/screener/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

/// Why an asset was kept out of the candidate list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Asset rejected by screen: {field} is missing")]
    MissingField { field: &'static str },

    #[error("Asset rejected by screen: {field} ({value}) does not clear {threshold}")]
    BelowThreshold {
        field: &'static str,
        value: Decimal,
        threshold: Decimal,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
