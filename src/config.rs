//! Action configuration loading and validation.
//!
//! The config is a flat TOML document. Missing keys decode to empty values;
//! only the fields the pipeline cannot run without are validated.
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config location used when neither `--config` nor `INPUT_CONFIG_PATH` is set.
pub const DEFAULT_CONFIG_PATH: &str = ".github/configs/setup-my-action.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    pub input_text: String,
    pub find_word: String,
    pub replace_word: String,
    pub number_list: Vec<f64>,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub append_text: String,
    pub api_url: String,
    /// Top-level JSON key to publish as `response_field` instead of the
    /// fixed reachability message.
    pub response_key: Option<String>,
}

/// Resolve the config path, treating an empty path as unset.
pub fn resolve_config_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

/// Load and validate the config at `path` (or the default location).
pub fn load_config(path: Option<&Path>) -> Result<ActionConfig, ConfigError> {
    let path = resolve_config_path(path);
    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source: Box::new(source),
    })?;
    validate_config(&config)?;
    tracing::debug!(path = %path.display(), "loaded action config");
    Ok(config)
}

fn parse_config(text: &str) -> Result<ActionConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Reject configs missing a field the pipeline requires.
pub fn validate_config(config: &ActionConfig) -> Result<(), ConfigError> {
    if config.input_text.is_empty() {
        return Err(ConfigError::Invalid("input_text is required"));
    }
    if config.input_file.as_os_str().is_empty() || config.output_file.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "input_file and output_file are required",
        ));
    }
    if config.api_url.is_empty() {
        return Err(ConfigError::Invalid("api_url is required"));
    }
    Ok(())
}
