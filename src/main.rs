use clap::Parser;
use wsl_print_cheatsheet::{
    CliArgs, GeneratorConfig, LoggingConfig, confirmation_line, init_logging, run,
};

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = GeneratorConfig::from_args(cli)?;

    // Validate configuration before writing anything (fail-fast)
    config.validate()?;

    let saved = run(&config)?;
    println!("{}", confirmation_line(&saved));

    Ok(())
}
