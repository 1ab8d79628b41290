//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: ACTON_QUERY_, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/acton-query/{service_name}/config.toml
//! 4. System directory: /etc/acton-query/{service_name}/config.toml
//! 5. Default values
//!
//! # Example
//!
//! ```toml
//! [service]
//! name = "catalog"
//! log_level = "debug"
//!
//! [directives]
//! filter_syntax = "bracket-per-key"
//! order_syntax = "indexed-sort"
//! default_limit = 25
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::query::{FilterSyntax, OrderSyntax, DEFAULT_LIMIT, DEFAULT_OFFSET};

const ENV_PREFIX: &str = "ACTON_QUERY_";
const CONFIG_DIR: &str = "acton-query";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Query directive configuration
    #[serde(default)]
    pub directives: DirectiveConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Which query syntaxes a deployment accepts, and pagination fallbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveConfig {
    /// Filter encoding
    #[serde(default)]
    pub filter_syntax: FilterSyntax,

    /// Sort encoding
    #[serde(default)]
    pub order_syntax: OrderSyntax,

    /// Limit used when `limit` is absent or invalid
    #[serde(default = "default_limit")]
    pub default_limit: u64,

    /// Offset used when `offset` is absent or invalid
    #[serde(default = "default_offset")]
    pub default_offset: u64,
}

impl Default for DirectiveConfig {
    fn default() -> Self {
        Self {
            filter_syntax: FilterSyntax::default(),
            order_syntax: OrderSyntax::default(),
            default_limit: default_limit(),
            default_offset: default_offset(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_offset() -> u64 {
    DEFAULT_OFFSET
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Searches for config files in this order (first found is used):
    /// 1. Current working directory: ./config.toml
    /// 2. XDG config directory: ~/.config/acton-query/{service_name}/config.toml
    /// 3. System directory: /etc/acton-query/{service_name}/config.toml
    ///
    /// Environment variables (ACTON_QUERY_ prefix) override all file-based configs.
    pub fn load() -> Result<Self> {
        // Binary name doubles as the service name
        let service_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| CONFIG_DIR.to_string());

        Self::load_for_service(&service_name)
    }

    /// Load configuration for a specific service name
    pub fn load_for_service(service_name: &str) -> Result<Self> {
        let config_paths = Self::find_config_paths(service_name);

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later merges win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses XDG directories and loads directly from the given path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// Find all possible config file paths for a service
    ///
    /// Returns paths in priority order (highest first).
    fn find_config_paths(service_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(CONFIG_DIR);
        let config_file_path = Path::new(service_name).join("config.toml");
        if let Ok(path) = xdg_dirs.place_config_file(&config_file_path) {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc")
                .join(CONFIG_DIR)
                .join(service_name)
                .join("config.toml"),
        );

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: CONFIG_DIR.to_string(),
                log_level: default_log_level(),
            },
            directives: DirectiveConfig::default(),
        }
    }
}
