use crate::domain::model::{RangeSpec, DEFAULT_OUTPUT_PATH};
use crate::utils::error::{Result, SequenceError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔結構；所有欄位皆可省略，缺少的值使用內建預設
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub range: Option<RangeSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeSection {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub step: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| SequenceError::ReadError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SequenceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SequenceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn range(&self) -> RangeSpec {
        let defaults = RangeSpec::default();
        let section = self.range.clone().unwrap_or_default();
        RangeSpec::new(
            section.lower.unwrap_or(defaults.lower),
            section.upper.unwrap_or(defaults.upper),
            section.step.unwrap_or(defaults.step),
        )
    }

    pub fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}
