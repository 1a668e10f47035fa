// In crates/app-config/src/types.rs

use market_data::MarketDataSettings;
use report::ReportSettings;
use screener::ScreenerSettings;
use serde::{Deserialize, Serialize};
use smc::{DetectorSettings, SignalSettings};
use synthesizer::SynthesisSettings;

/// The complete application configuration.
///
/// Every section falls back to its defaults, so an empty configuration is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    pub detector: DetectorSettings,
    pub signals: SignalSettings,
    pub synthesis: SynthesisSettings,
    pub screener: ScreenerSettings,
    pub market_data: MarketDataSettings,
    pub engine: EngineSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Analyze candidates on the rayon thread pool.
    pub parallel: bool,
}
