use acton_query::config::Config;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod parse;

/// Load configuration from `path`, or from the standard search paths
pub fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load_from(path).with_context(|| format!("Failed to load config from {path}"))
        }
        None => Config::load().context("Failed to load configuration"),
    }
}

/// Filter directive for CLI logging
///
/// `--verbose` forces parser trace output; otherwise the configured
/// `service.log_level` applies.
pub fn log_filter(config: &Config, verbose: bool) -> String {
    if verbose {
        "acton_query=trace".to_string()
    } else {
        config.service.log_level.clone()
    }
}

/// Send log output to stderr so stdout stays JSON
pub fn init_logging(config: &Config, verbose: bool) {
    let filter = log_filter(config, verbose);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
