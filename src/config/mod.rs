#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::{RangeSpec, DEFAULT_OUTPUT_PATH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// Final parameters after layering flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub range: RangeSpec,
    pub output_path: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            range: RangeSpec::default(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl From<&TomlConfig> for ResolvedConfig {
    fn from(config: &TomlConfig) -> Self {
        Self {
            range: config.range(),
            output_path: config.output_path().to_string(),
        }
    }
}

impl ConfigProvider for ResolvedConfig {
    fn range(&self) -> RangeSpec {
        self.range
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for ResolvedConfig {
    // 數值參數刻意不驗證，只檢查輸出路徑
    fn validate(&self) -> Result<()> {
        validate_path("output.path", &self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolved_config() {
        let config = ResolvedConfig::default();
        assert_eq!(config.range(), RangeSpec::new(0.0, 1.0, 0.005));
        assert_eq!(config.output_path(), "dropdownOptions.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_degenerate_numbers_pass_validation() {
        let config = ResolvedConfig {
            range: RangeSpec::new(1.0, 0.0, -0.5),
            output_path: "options.json".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_path_fails_validation() {
        let config = ResolvedConfig {
            output_path: String::new(),
            ..ResolvedConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
