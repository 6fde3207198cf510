pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{toml_config::TomlConfig, ResolvedConfig};
pub use crate::core::{engine::SequenceEngine, generator::generate, writer::OutputWriter};
pub use crate::domain::model::{RangeSpec, RunSummary, Sequence};
pub use crate::utils::error::{Result, SequenceError};
