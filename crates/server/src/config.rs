//! # Application Configuration
//!
//! This module defines the configuration structure for the `rfpdraft-server`
//! and loads it from layered sources: built-in defaults, an optional
//! `config.yml`, an optional `secrets.yml` next to it, and environment
//! variables. The completion API key is the only value the server cannot run
//! without; it may come from the secrets file or `OPENAI_API_KEY`.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use rfpdraft::constants::{API_KEY_ENV, DEFAULT_API_URL};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// The default main configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";
/// The secrets file, looked up next to the main configuration file.
pub const SECRETS_FILE_NAME: &str = "secrets.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    #[error("Configuration error: {0}")]
    General(String),
    /// Indicates a required configuration file was not found.
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Settings for the chat-completion endpoint.
    #[serde(default)]
    pub ai: AiConfig,
}

/// Settings for the chat-completion endpoint.
#[derive(Deserialize, Clone)]
pub struct AiConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
        }
    }
}

// Keeps the credential out of `debug!(?config)` output.
impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn default_port() -> u16 {
    8501
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ConfigError::General(format!(
            "Failed to read config file '{}': {e}",
            path.display()
        ))
    })?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from files and environment variables.
///
/// - `config_path_override` must exist when given; the default `config.yml`
///   is optional.
/// - `secrets.yml` in the same directory is merged over the main file.
/// - `PORT` overrides the port; `RFPDRAFT_...` variables override nested keys
///   (e.g. `RFPDRAFT_AI__API_URL`).
/// - `OPENAI_API_KEY` is used when no key was configured elsewhere.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        // Layer 1: Programmatic defaults.
        .set_default("port", i64::from(default_port()))?
        .set_default("ai.api_url", DEFAULT_API_URL)?;

    // Layer 2: Main config file.
    let main_config_path = PathBuf::from(config_path_override.unwrap_or(DEFAULT_CONFIG_PATH));
    match read_and_substitute(&main_config_path)? {
        Some(content) => {
            info!(
                "Loading configuration from '{}'.",
                main_config_path.display()
            );
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None if config_path_override.is_some() => {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{}'.",
                main_config_path.display()
            )));
        }
        None => info!(
            "'{}' not found. Using built-in defaults.",
            main_config_path.display()
        ),
    }

    // Layer 3: Secrets (optional).
    let secrets_path = main_config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(SECRETS_FILE_NAME);
    if let Some(secrets_content) = read_and_substitute(&secrets_path)? {
        info!("Loading secrets from '{}'.", secrets_path.display());
        builder = builder.add_source(File::from_str(&secrets_content, FileFormat::Yaml));
    }

    // Layer 4: PORT for the listener.
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("port", port)?;
    }

    let settings = builder
        // Layer 5: Prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("RFPDRAFT")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // An empty substitution like `api_key: "${OPENAI_API_KEY}"` means unset.
    config.ai.api_key = config.ai.api_key.filter(|k| !k.trim().is_empty());
    if config.ai.api_key.is_none() {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.ai.api_key = Some(key);
            }
        }
    }

    Ok(config)
}
