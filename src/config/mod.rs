//! Client configuration.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/mentor.toml";

/// Default backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Raw structure for deserialization from TOML
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    backend_url: Option<String>,
}

/// Validated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration. An explicitly given path must
    /// exist; the default path is optional and falls back to defaults when
    /// absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => read_config(path),
            None => {
                let default = Path::new(CONFIG_PATH);
                if default.exists() {
                    read_config(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let backend_url = parsed
        .backend_url
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    if backend_url.trim().is_empty() {
        return Err(ConfigError::EmptyBackendUrl);
    }
    Ok(AppConfig { backend_url })
}
