use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BumpError, Result};
use crate::identity::DEFAULT_TOKEN_ENV;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "gitbump.toml";
/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE_NAME: &str = ".gitbump.toml";

/// Represents the complete configuration for git-bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

/// Where new tags are pushed and which environment variable holds the token.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,

    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
            token_env: default_token_env(),
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| BumpError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `gitbump.toml` in the repository working directory
/// 3. `.gitbump.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&Path>, working_dir: &Path) -> Result<Config> {
    match locate_config(config_path, working_dir) {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| {
                BumpError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            parse_config(&text).map_err(|e| match e {
                BumpError::Config(msg) => {
                    BumpError::config(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })
        }
        None => Ok(Config::default()),
    }
}

fn locate_config(config_path: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = working_dir.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
