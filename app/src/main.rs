// In app/src/main.rs

use anyhow::{Context, Result};
use app_config::Settings;
use clap::{Args, Parser, Subcommand};
use core_types::Asset;
use engine::Engine;
use market_data::{
    AssetSource, JsonFileSource, SampleAssetSource, SimulatedSeriesProvider, sample_assets,
};
use report::Reporter;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::prelude::*;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Screens assets for Smart Money Concept setups.")]
struct Cli {
    /// Overrides `app.log_level` (e.g. "debug").
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Screens, analyzes and ranks the asset list, then prints and saves the results.
    Scan(ScanArgs),

    /// Prints the effective settings as TOML.
    Config,
}

#[derive(Args, Debug, Default)]
struct ScanArgs {
    /// JSON file holding an array of assets. Defaults to the built-in sample set.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Seed for the simulated price series.
    #[arg(long)]
    seed: Option<u64>,

    /// Analyze candidates in parallel.
    #[arg(long)]
    parallel: bool,

    /// Directory for the JSON results file.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip writing the JSON results file.
    #[arg(long)]
    no_json: bool,
}

impl ScanArgs {
    /// Command-line flags take precedence over the configuration files.
    fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.market_data.seed = Some(seed);
        }
        if self.parallel {
            settings.engine.parallel = true;
        }
        if let Some(dir) = &self.output_dir {
            settings.report.output_dir = dir.clone();
        }
        if self.no_json {
            settings.report.write_json = false;
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut settings = app_config::load_settings().context("Failed to load settings")?;

    init_tracing(cli.log_level.as_deref().unwrap_or(&settings.app.log_level));
    tracing::info!(environment = %settings.app.environment, "Application settings loaded successfully.");

    match cli.command {
        Commands::Scan(args) => {
            args.apply(&mut settings);
            run_scan(&settings, args.assets)?;
        }
        Commands::Config => {
            println!("{}", app_config::to_toml(&settings)?);
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = tracing::Level::from_str(log_level).unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn run_scan(settings: &Settings, assets_path: Option<PathBuf>) -> Result<()> {
    let assets = load_assets(assets_path);

    let provider = SimulatedSeriesProvider::new(&settings.market_data);
    tracing::info!(seed = provider.seed(), assets = assets.len(), "Starting SMC scan.");

    let engine = Engine::new(settings, Box::new(provider));
    let report = engine.scan(assets);

    let reporter = Reporter::new(settings.report.clone());
    reporter.print(&report.opportunities);

    if let Some(path) = reporter
        .save(&report.opportunities)
        .context("Failed to save results")?
    {
        println!("\nResults saved to: {}", path.display());
    }

    Ok(())
}

/// Fetches the asset list, substituting the sample data when the source fails.
fn load_assets(path: Option<PathBuf>) -> Vec<Asset> {
    let source: Box<dyn AssetSource> = match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleAssetSource),
    };

    match source.fetch_assets() {
        Ok(assets) => assets,
        Err(e) => {
            tracing::error!(source = source.name(), error = %e, "Failed to fetch assets. Using sample data.");
            sample_assets()
        }
    }
}
