use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, SortMode, SourceSpec};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "executor-report")]
#[command(about = "Show which clients an executor can serve")]
pub struct CliConfig {
    /// Sort order of the available clients; wins over [report].sort [default: reward]
    #[arg(value_enum)]
    pub sort: Option<SortMode>,

    #[arg(long, default_value = "http://localhost:3000/clients", conflicts_with = "config")]
    pub clients_url: String,

    #[arg(long, default_value = "http://localhost:3000/executor", conflicts_with = "config")]
    pub executor_url: String,

    /// Read clients.json and executor.json from this directory instead of HTTP
    #[arg(long, conflicts_with = "config")]
    pub data_dir: Option<PathBuf>,

    /// TOML configuration file supplying [source] and a default [report].sort
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn sort_mode(&self) -> Result<SortMode> {
        Ok(self.sort.unwrap_or_default())
    }

    fn source(&self) -> SourceSpec {
        match &self.data_dir {
            Some(dir) => SourceSpec::DataDir(dir.clone()),
            None => SourceSpec::Http {
                clients_url: self.clients_url.clone(),
                executor_url: self.executor_url.clone(),
            },
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.data_dir {
            Some(dir) => validation::validate_path("data_dir", dir),
            None => {
                validation::validate_url("clients_url", &self.clients_url)?;
                validation::validate_url("executor_url", &self.executor_url)
            }
        }
    }
}

/// Settle the sort key and data source from the flags and the optional TOML file.
///
/// With `--config` the file supplies the source. A positional sort wins over
/// `[report].sort`, but an invalid `[report].sort` is still rejected.
pub fn resolve(cli: &CliConfig) -> Result<(SortMode, SourceSpec)> {
    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;

            let sort = match cli.sort {
                Some(sort) => sort,
                None => config.sort_mode()?,
            };
            Ok((sort, config.source()))
        }
        None => {
            cli.validate()?;
            Ok((cli.sort_mode()?, cli.source()))
        }
    }
}
