// In crates/market-data/src/source.rs

use crate::sample::sample_assets;
use crate::{AssetSource, Error, Result};
use core_types::Asset;
use std::collections::HashSet;
use std::path::PathBuf;

/// Reads a JSON array of assets from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AssetSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "JsonFileSource"
    }

    fn fetch_assets(&self) -> Result<Vec<Asset>> {
        let path = self.path.display().to_string();
        let text = std::fs::read_to_string(&self.path).map_err(|source| Error::ReadFailed {
            path: path.clone(),
            source,
        })?;

        let assets: Vec<Asset> = serde_json::from_str(&text)?;
        if assets.is_empty() {
            return Err(Error::NoAssets);
        }

        let assets = dedup_by_symbol(assets);
        tracing::info!(%path, count = assets.len(), "Loaded assets from file.");
        Ok(assets)
    }
}

/// Serves the built-in sample dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleAssetSource;

impl AssetSource for SampleAssetSource {
    fn name(&self) -> &'static str {
        "SampleAssetSource"
    }

    fn fetch_assets(&self) -> Result<Vec<Asset>> {
        Ok(sample_assets())
    }
}

/// Drops repeated symbols, keeping the first occurrence and the original order.
pub fn dedup_by_symbol(assets: Vec<Asset>) -> Vec<Asset> {
    let mut seen = HashSet::new();
    assets
        .into_iter()
        .filter(|asset| {
            let fresh = seen.insert(asset.symbol.clone());
            if !fresh {
                tracing::debug!(symbol = %asset.symbol, "Dropping duplicate asset.");
            }
            fresh
        })
        .collect()
}
