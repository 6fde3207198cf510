use crate::core::writer::OutputWriter;
use crate::domain::model::RunSummary;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct SequenceEngine<S: Storage, C: ConfigProvider> {
    writer: OutputWriter<S>,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SequenceEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            writer: OutputWriter::new(storage),
            config,
        }
    }

    pub fn writer(&self) -> &OutputWriter<S> {
        &self.writer
    }

    /// Generates, prints to stdout, then writes the output file.
    pub fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_with_console(&mut handle)
    }

    pub fn run_with_console<W: Write>(&self, console: &mut W) -> Result<RunSummary> {
        let range = self.config.range();
        let output_path = self.config.output_path();

        tracing::info!(
            "Generating sequence from {} to {} in steps of {}",
            range.lower,
            range.upper,
            range.step
        );
        let sequence = range.generate();
        tracing::info!("Generated {} values", sequence.len());

        // 先印出再寫檔：寫檔失敗時序列已經顯示過
        writeln!(console, "{}", sequence.to_console_string())?;

        let bytes_written = self.writer.write(&sequence, output_path)?;
        tracing::info!("Wrote {} bytes to {}", bytes_written, output_path);

        Ok(RunSummary {
            output_path: output_path.to_string(),
            count: sequence.len(),
            first: sequence.first(),
            last: sequence.last(),
            bytes_written,
        })
    }
}
