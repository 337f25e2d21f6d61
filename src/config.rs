use crate::cheatsheet;
use crate::model::CommandEntry;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a generation run needs. Defaults reproduce the built-in
/// cheatsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub title: String,
    pub entries: Vec<CommandEntry>,
    pub output_path: PathBuf,
    pub verify: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            title: cheatsheet::TITLE.to_string(),
            entries: cheatsheet::entries(),
            output_path: PathBuf::from(cheatsheet::OUTPUT_FILENAME),
            verify: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            output: cli_output,
            title: cli_title,
            skip_verify,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            title: file_title,
            entries: file_entries,
            output_path: file_output_path,
        } = file_config;

        let defaults = Self::default();

        Ok(Self {
            title: cli_title.or(file_title).unwrap_or(defaults.title),
            entries: file_entries.unwrap_or(defaults.entries),
            output_path: cli_output
                .or(file_output_path)
                .unwrap_or(defaults.output_path),
            verify: !skip_verify,
        })
    }

    /// Fail-fast checks run before anything is written.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.title.trim().is_empty(),
            "document title cannot be empty or whitespace-only"
        );
        anyhow::ensure!(
            !self.entries.is_empty(),
            "at least one command entry must be provided"
        );
        anyhow::ensure!(
            !self.output_path.as_os_str().is_empty(),
            "output path cannot be empty"
        );
        anyhow::ensure!(
            !self.output_path.is_dir(),
            "output path {:?} is a directory",
            self.output_path
        );
        Ok(())
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "wsl-print-cheatsheet",
    about = "Write the WSL printing command cheatsheet to a .docx file",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON) with title, entries and output_path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        short = 'o',
        env = "CHEATSHEET_OUTPUT",
        value_name = "FILE",
        help = "Where to write the .docx document"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        env = "CHEATSHEET_TITLE",
        value_name = "TEXT",
        help = "Title heading of the document"
    )]
    pub title: Option<String>,

    #[arg(long, help = "Do not re-read the saved document to check its contents")]
    pub skip_verify: bool,
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    title: Option<String>,
    entries: Option<Vec<CommandEntry>>,
    output_path: Option<PathBuf>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
