// In crates/synthesizer/src/lib.rs

pub mod confidence;
pub mod engine;
pub mod types;

pub use confidence::{score_confidence, select_kind, trading_levels};
pub use engine::{OpportunitySynthesizer, analysis_text};
pub use types::{SynthesisSettings, TradeLevels};
