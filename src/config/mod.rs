// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Environment variable consulted when `inference.api_key` is not configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

impl AppConfig {
    /// Load configuration with precedence:
    /// 1. Environment variables (`SNAP2SABRE_SERVER__PORT=8080`)
    /// 2. Config file (`path`, or `~/.snap2sabre/config.toml`)
    /// 3. Defaults (lowest)
    ///
    /// CLI flags are applied on top by the binary.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("SNAP2SABRE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Resolve the inference credential, filling it from `OPENAI_API_KEY`
    /// when the config sources left it empty.
    pub fn resolve_api_key(&mut self) -> Result<&str> {
        let configured = self
            .inference
            .api_key
            .take()
            .filter(|k| !k.trim().is_empty());

        let key = match configured {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "no inference API key: set inference.api_key or {}",
                        API_KEY_ENV
                    ))
                })?,
        };

        Ok(self.inference.api_key.insert(key).as_str())
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".snap2sabre")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
