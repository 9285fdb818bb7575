//! Persisted configuration record and field addressing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// The whole persisted state of shipit.
///
/// Both fields are optional. A missing `model` means
/// [`DEFAULT_MODEL`](crate::constants::llm::DEFAULT_MODEL).
///
/// # Example
/// ```json
/// {
///   "apiKey": "sk-or-v1-...",
///   "model": "x-ai/grok-4.1-fast:free"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShipitConfig {
    /// OpenRouter API key.
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ShipitConfig {
    /// Returns `true` when neither field holds a non-empty value.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.api_key) && is_blank(&self.model)
    }

    /// Reads one field.
    pub fn get(&self, field: ConfigField) -> Option<&str> {
        match field {
            ConfigField::ApiKey => self.api_key.as_deref(),
            ConfigField::Model => self.model.as_deref(),
        }
    }

    /// Overwrites one field.
    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            ConfigField::ApiKey => self.api_key = value,
            ConfigField::Model => self.model = value,
        }
    }

    /// Stored model, or the built-in default.
    pub fn model_or_default(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(constants::llm::DEFAULT_MODEL)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.is_empty())
}

/// Addressable fields of [`ShipitConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ApiKey,
    Model,
}

impl ConfigField {
    /// Key used in the JSON file.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::ApiKey => "apiKey",
            ConfigField::Model => "model",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Credential and model used for one ship run.
///
/// Environment variables win over stored values and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub model: String,
}

impl Credentials {
    /// Resolves the effective credential from `config` and the process environment.
    ///
    /// Returns `None` when no non-empty API key is available.
    pub fn resolve(config: &ShipitConfig) -> Option<Self> {
        let api_key = env_override(constants::config::API_KEY_ENV)
            .or_else(|| config.api_key.clone().filter(|k| !k.trim().is_empty()))?;

        let model = env_override(constants::config::MODEL_ENV)
            .unwrap_or_else(|| config.model_or_default().to_string());

        Some(Self { api_key, model })
    }
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
