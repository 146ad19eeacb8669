// ABOUTME: CLI config command - write or print the portal configuration

use anyhow::{bail, Result};
use std::path::PathBuf;

use super::{print_json, ConfigCommand, OutputFormat};
use ppdb::config::AppConfig;

pub async fn execute(
    command: ConfigCommand,
    path: Option<PathBuf>,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommand::Init { force } => {
            let path = match path {
                Some(path) => path,
                None => AppConfig::default_path()?,
            };
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            AppConfig::default().save_to(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
        ConfigCommand::Show => match format {
            OutputFormat::Json => print_json(config)?,
            OutputFormat::Text => {
                print!("{}", toml::to_string_pretty(config)?);
                println!("# data directory: {}", config.data_dir()?.display());
            }
        },
    }
    Ok(())
}
