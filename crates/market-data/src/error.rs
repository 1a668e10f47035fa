// In crates/market-data/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No price series available for {symbol}")]
    SeriesUnavailable { symbol: String },
    #[error("Failed to read asset file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Asset source returned no assets")]
    NoAssets,
}

pub type Result<T> = std::result::Result<T, Error>;
