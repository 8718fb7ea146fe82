use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};

/// File name looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "git-bump.toml";

/// Represents the complete configuration for git-bump.
///
/// Every field is optional in the file; missing ones fall back to defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote that the branch and the tag are pushed to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Extra version file candidates, relative to the project root
    #[serde(default)]
    pub version_files: Vec<String>,

    #[serde(default)]
    pub commands: CommandsConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_lock_refresh() -> Vec<String> {
    vec!["bundle".to_string(), "install".to_string()]
}

fn default_publish() -> Vec<String> {
    vec!["rake".to_string(), "release".to_string()]
}

/// External build tool invocations.
///
/// An empty list disables the step.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommandsConfig {
    /// Refreshes the dependency lock file after the version changes
    #[serde(default = "default_lock_refresh")]
    pub lock_refresh: Vec<String>,

    /// Publishes the package when `-gem` is given
    #[serde(default = "default_publish")]
    pub publish: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        CommandsConfig {
            lock_refresh: default_lock_refresh(),
            publish: default_publish(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            version_files: Vec::new(),
            commands: CommandsConfig::default(),
        }
    }
}

/// Path of the per-user configuration file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("git-bump").join("config.toml"))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `git-bump.toml` in the project root
/// 3. `git-bump/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `project_root` - Work tree root of the repository being released
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or if an
///   explicitly given file is missing
pub fn load_config(config_path: Option<&Path>, project_root: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if project_root.join(PROJECT_CONFIG_FILE).is_file() {
        project_root.join(PROJECT_CONFIG_FILE)
    } else if let Some(user_path) = user_config_path().filter(|p| p.is_file()) {
        user_path
    } else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)
        .map_err(|e| BumpError::config(format!("Cannot read '{}': {}", path.display(), e)))?;
    parse_config(&config_str)
        .map_err(|e| BumpError::config(format!("Invalid '{}': {}", path.display(), e)))
}

/// Parse configuration TOML text
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}
