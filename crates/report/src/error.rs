// In crates/report/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write report to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize opportunities: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
