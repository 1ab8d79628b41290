use acton_query::config::Config;
use anyhow::{Context, Result};

pub fn execute(config: &Config) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to render configuration")
}
