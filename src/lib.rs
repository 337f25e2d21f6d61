pub mod builder;
pub mod cheatsheet;
pub mod config;
pub mod docx;
pub mod document;
pub mod error;
pub mod logging;
pub mod model;

pub use builder::DocumentBuilder;
pub use config::{CliArgs, GeneratorConfig};
pub use document::Document;
pub use error::{DocxError, DocxResult};
pub use logging::{LoggingConfig, init_logging};
pub use model::{Block, CommandEntry, HeadingLevel, ParagraphStyle};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Builds the document described by `config`, saves it and, unless
/// disabled, re-reads the file to confirm its contents. Returns the path
/// that was written.
pub fn run(config: &GeneratorConfig) -> Result<PathBuf> {
    let span = logging::generation_span(&config.output_path);
    let _enter = span.enter();

    let document = DocumentBuilder::from_config(config).build();
    if let Err(err) = DocumentBuilder::save(&document, &config.output_path) {
        tracing::error!(error.category = err.category(), error = %err, "saving document failed");
        return Err(anyhow::Error::new(err).context(format!(
            "failed to save document to {}",
            config.output_path.display()
        )));
    }

    if config.verify {
        verify_saved(&document, &config.output_path)?;
    }

    tracing::debug!(
        entries = config.entries.len(),
        blocks = document.len(),
        "cheatsheet written"
    );
    Ok(config.output_path.clone())
}

/// Re-opens `path` and checks it holds exactly the blocks of `expected`.
pub fn verify_saved(expected: &Document, path: &Path) -> Result<()> {
    let saved = Document::open(path)
        .with_context(|| format!("failed to re-read saved document {}", path.display()))?;

    if let Some(index) = expected
        .blocks()
        .iter()
        .zip(saved.blocks())
        .position(|(want, got)| want != got)
    {
        anyhow::bail!(
            "saved document differs at block {index}: expected {}, found {}",
            expected.blocks()[index],
            saved.blocks()[index]
        );
    }
    anyhow::ensure!(
        expected.len() == saved.len(),
        "saved document has {} blocks, expected {}",
        saved.len(),
        expected.len()
    );

    tracing::debug!(blocks = saved.len(), "saved document verified");
    Ok(())
}

/// Line printed to stdout after a successful run.
pub fn confirmation_line(path: &Path) -> String {
    format!("{} {}", cheatsheet::CONFIRMATION_PREFIX, path.display())
}
