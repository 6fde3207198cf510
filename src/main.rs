use anyhow::{Context, Result};
use clap::Parser;
use dropdown_options::utils::{logger, validation::Validate};
use dropdown_options::{CliConfig, LocalStorage, SequenceEngine};

fn main() -> Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting dropdown-options");
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.resolve().context("failed to load configuration")?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e).context("invalid configuration");
    }

    tracing::debug!("Resolved config: {:?}", config);

    let engine = SequenceEngine::new(LocalStorage::default(), config);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} options to {}",
                summary.count,
                summary.output_path
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            Err(e).context("failed to generate dropdown options")
        }
    }
}
