use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::session::Tab;

/// Environment variable holding the Postman API key.
pub const API_KEY_ENV: &str = "POSTMAN_API_KEY";

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".p2o.yaml";

/// Default Postman API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.postman.com";

/// Project configuration loaded from `.p2o.yaml`, with the API key taken
/// from the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Postman API key. `POSTMAN_API_KEY` takes precedence over the file.
    pub api_key: Option<String>,
    /// Origin of the transformation service.
    pub base_url: String,
    /// Directory that downloads are written to.
    pub download_dir: String,
    /// Tab shown by `convert` when none is given on the command line.
    pub default_tab: Tab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: ".".to_string(),
            default_tab: Tab::Overview,
        }
    }
}

impl Config {
    /// The API key, if one is configured and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Overlay the API key from the environment, if set.
    pub fn with_env_api_key(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    /// Replace the file's API key with `key` unless it is absent or blank.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Resolve the effective configuration: optional `.env` file, optional config
/// file, then the `POSTMAN_API_KEY` environment variable.
pub fn resolve(path: &Path) -> Result<Config, ConfigError> {
    match dotenvy::dotenv() {
        Ok(env_path) => log::debug!("loaded environment from {}", env_path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }
    let config = load_config(path)?.unwrap_or_default();
    Ok(config.with_env_api_key())
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# p2o configuration
# The API key is read from POSTMAN_API_KEY (environment or .env file).
# api_key: PMAK-...

base_url: https://api.postman.com
download_dir: .
default_tab: overview   # overview | endpoints | models | raw
"#
}
