//! User configuration: template library location, path rules, colors
//!
//! The configuration lives in `$STENCIL_CONFIG_DIR` or, when unset, in
//! `<user config dir>/stencil`. On first use the directory is created with a
//! default `config.yaml` and a sample template.

mod sample;

pub use sample::{write_sample_template, SAMPLE_TEMPLATE_DIR};

use crate::error::ConfigError;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "STENCIL_CONFIG_DIR";

/// Configuration file name inside the configuration directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Characters rejected in directory names and path tokens by default
pub const DEFAULT_INVALID_PATH_CHARS: &str = "‘“!#$%&+^<=>` ";

const APP_NAME: &str = "stencil";

/// Color names for each kind of output (see [`crate::theme::Style::parse`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub header: String,
    pub instruction: String,
    pub error: String,
    pub default: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            header: "boldgreen".to_string(),
            instruction: "yellow".to_string(),
            error: "boldred".to_string(),
            default: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Library root; one subdirectory per template
    #[serde(alias = "templatesDir")]
    pub templates_dir: PathBuf,

    /// Characters not allowed in the project directory or path tokens
    #[serde(alias = "invalidPathChars")]
    pub invalid_path_chars: String,

    pub colors: ColorConfig,

    /// Ask for confirmation of the resolved project path and show extra info
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            invalid_path_chars: DEFAULT_INVALID_PATH_CHARS.to_string(),
            colors: ColorConfig::default(),
            verbose: false,
        }
    }
}

/// A configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Directory holding `config.yaml`
    pub dir: PathBuf,
    /// The directory was bootstrapped by this load
    pub initialized: bool,
}

impl Config {
    /// Load from the default location, bootstrapping it on first use
    pub fn load() -> Result<LoadedConfig, ConfigError> {
        Self::load_from(&config_dir()?)
    }

    /// Load from a specific configuration directory, bootstrapping it if needed
    pub fn load_from(dir: &Path) -> Result<LoadedConfig, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        let initialized = !path.exists();
        if initialized {
            initialize(dir)?;
        }

        let content = fs::read_to_string(&path).map_err(ConfigError::io("read", &path))?;

        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        };

        if config.templates_dir.is_relative() {
            config.templates_dir = dir.join(&config.templates_dir);
        }

        debug!(
            config = %path.display(),
            templates = %config.templates_dir.display(),
            "loaded config"
        );
        Ok(LoadedConfig {
            config,
            dir: dir.to_path_buf(),
            initialized,
        })
    }

    /// First character of `value` that is not allowed in paths
    pub fn invalid_char_in(&self, value: &str) -> Option<char> {
        value.chars().find(|c| self.invalid_path_chars.contains(*c))
    }

    pub fn theme(&self) -> Theme {
        Theme::from_config(&self.colors)
    }
}

/// Resolve the configuration directory
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Create the configuration directory, a default config, and the sample template
fn initialize(dir: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(dir).map_err(ConfigError::io("create", dir))?;

    let config = Config {
        templates_dir: dir.join("templates"),
        ..Config::default()
    };
    let yaml = serde_yaml::to_string(&config).map_err(ConfigError::Serialize)?;
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, yaml).map_err(ConfigError::io("write", &path))?;

    fs::create_dir_all(&config.templates_dir)
        .map_err(ConfigError::io("create", &config.templates_dir))?;
    write_sample_template(&config.templates_dir)?;

    info!(dir = %dir.display(), "initialized configuration");
    Ok(())
}
