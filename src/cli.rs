use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "fieldsales")]
#[command(version)]
#[command(about = "Field sales companion for the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to PATH (suffixed with timestamp and pid)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override the simulated sign-in latency
    #[arg(long, value_name = "MS")]
    pub auth_latency_ms: Option<u64>,
}

impl Cli {
    /// Load the config file named on the command line, or the default one,
    /// and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(latency) = self.auth_latency_ms {
            config.auth.latency_ms = latency;
        }
        Ok(config)
    }
}
