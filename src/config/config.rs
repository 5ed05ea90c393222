//! Config file loading and default-option merging

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{ArgError, Result};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "ARGRT_CONFIG_DIR";

/// File name looked up inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// On-disk layout of `config.toml`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsSection,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultsSection {
    /// Tokens inserted ahead of the user's own arguments
    #[serde(default)]
    options: Vec<String>,
}

/// argrt configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub default_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load configuration from `config_dir/config.toml`
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join(CONFIG_FILE);

        if !config_file.exists() {
            debug!(path = %config_file.display(), "no config file");
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                default_options: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| ArgError::Config(format!("Failed to read config: {}", e)))?;

        let parsed: ConfigFile = toml::from_str(&content)
            .map_err(|e| ArgError::Config(format!("Invalid config TOML: {}", e)))?;

        debug!(
            path = %config_file.display(),
            defaults = parsed.defaults.options.len(),
            "config loaded"
        );

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            default_options: parsed.defaults.options,
        })
    }

    /// Get the default config directory
    pub fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("argrt"))
            .unwrap_or_else(|| PathBuf::from(".argrt"))
    }
}

/// Splice the configured default options in right after the program name.
///
/// Defaults come first so that anything the user passes is applied later and
/// wins.
pub fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + config.default_options.len());

    let mut args = args.into_iter();
    if let Some(program) = args.next() {
        merged.push(program);
    }

    merged.extend(config.default_options.iter().cloned());
    merged.extend(args);

    merged
}
