use crate::config::toml_config::TomlConfig;
use crate::config::ResolvedConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Flags left unset fall back to the config file, then to the built-in
/// `0, 1, 0.005` range and `dropdownOptions.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "dropdown-options")]
#[command(about = "Generate a fixed-step list of dropdown options and write it as a JSON array")]
pub struct CliConfig {
    /// Lower bound of the sequence [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub lower: Option<f64>,

    /// Upper bound of the sequence [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub upper: Option<f64>,

    /// Increment between consecutive values [default: 0.005]
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<f64>,

    /// Output file, overwritten on every run [default: dropdownOptions.json]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        Ok(self.apply_overrides(ResolvedConfig::from(&file_config)))
    }

    fn apply_overrides(&self, mut resolved: ResolvedConfig) -> ResolvedConfig {
        if let Some(lower) = self.lower {
            resolved.range.lower = lower;
            tracing::debug!("🔧 lower overridden to: {}", lower);
        }
        if let Some(upper) = self.upper {
            resolved.range.upper = upper;
            tracing::debug!("🔧 upper overridden to: {}", upper);
        }
        if let Some(step) = self.step {
            resolved.range.step = step;
            tracing::debug!("🔧 step overridden to: {}", step);
        }
        if let Some(output) = &self.output {
            resolved.output_path = output.clone();
            tracing::debug!("🔧 output overridden to: {}", output);
        }
        resolved
    }
}
