// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, EngineSettings, Settings};

/// Loads the application settings from `config/` and the environment.
///
/// The environment name comes from `APP_ENVIRONMENT` and defaults to "development".
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    load_settings_from(Path::new("config"), &environment)
}

/// Loads the layered configuration rooted at `dir`:
/// 1. `base.toml`.
/// 2. The environment-specific file (e.g., `development.toml`).
/// 3. Environment variables prefixed with `APP` (e.g., `APP__SCREENER__MAX_RESULTS=10`).
///
/// Every layer is optional.
pub fn load_settings_from(dir: &Path, environment: &str) -> Result<Settings> {
    let base = dir.join("base");
    let env_file = dir.join(environment);

    let settings = Config::builder()
        .add_source(File::with_name(&base.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
        // The prefix is `APP`, separator is `__`.
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    Ok(settings)
}

/// Renders the effective settings as TOML.
pub fn to_toml(settings: &Settings) -> Result<String> {
    Ok(toml::to_string_pretty(settings)?)
}
