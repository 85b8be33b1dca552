use crate::error::{GitSemanticError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = "./gitsemantic.toml";
const USER_CONFIG_FILE: &str = ".gitsemantic.toml";

/// Represents the complete configuration for git-semantic.
///
/// Contains the commit classification tables, the prefix applied to created tags and
/// the push settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tag_prefix: String,

    #[serde(default)]
    pub classification: ClassificationConfig,

    #[serde(default)]
    pub push: PushConfig,
}

fn default_major_types() -> Vec<String> {
    vec!["break".to_string()]
}

fn default_minor_types() -> Vec<String> {
    vec!["feat".to_string()]
}

fn default_patch_types() -> Vec<String> {
    vec!["fix".to_string(), "ref".to_string(), "perf".to_string()]
}

/// Commit types mapped to each release magnitude.
///
/// Tables are checked major first, then minor, then patch; a type listed in none of
/// them does not trigger a release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClassificationConfig {
    #[serde(default = "default_major_types")]
    pub major: Vec<String>,

    #[serde(default = "default_minor_types")]
    pub minor: Vec<String>,

    #[serde(default = "default_patch_types")]
    pub patch: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        ClassificationConfig {
            major: default_major_types(),
            minor: default_minor_types(),
            patch: default_patch_types(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Settings for the experimental push action.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PushConfig {
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        PushConfig {
            remote: default_remote(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemantic.toml` in current directory
/// 3. `.gitsemantic.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let config_str = fs::read_to_string(&path)?;
            parse_config(&config_str)
        }
        None => Ok(Config::default()),
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| GitSemanticError::config(e.to_string()))
}

fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
