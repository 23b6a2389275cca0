// ABOUTME: Environment configuration for storage location, backend and AI assistant settings
// ABOUTME: Environment-only approach: every setting has a default and can be overridden by env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::intelligence::ConfigError;
use crate::constants::{env_vars, service_names};
use crate::errors::{AppError, AppResult};

/// Default Gemini model for food analysis and suggestions
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Default language for food names returned by the assistant
pub const DEFAULT_ASSISTANT_LANGUAGE: &str = "English";

/// Which key-value store backs persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under the data directory
    #[default]
    File,
    /// Process-local map, lost on exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Parse(format!(
                "unknown storage backend '{other}', expected 'file' or 'memory'"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// AI assistant settings
#[derive(Clone)]
pub struct AssistantConfig {
    /// Gemini API key; `None` means the assistant is unavailable
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Language used for food names in answers
    pub language: String,
}

impl AssistantConfig {
    /// Whether an API key is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            language: DEFAULT_ASSISTANT_LANGUAGE.to_owned(),
        }
    }
}

impl Debug for AssistantConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory of the file-backed store
    pub data_dir: PathBuf,
    /// Store implementation
    pub storage: StorageBackend,
    /// AI assistant settings
    pub assistant: AssistantConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageBackend::default(),
            assistant: AssistantConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `KALORICKE_STORAGE` holds an unknown backend name or
    /// `KALORICKE_DATA_DIR` is set but blank
    pub fn from_env() -> AppResult<Self> {
        let data_dir = match env::var(env_vars::DATA_DIR) {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(AppError::config(format!(
                    "{} is set but empty",
                    env_vars::DATA_DIR
                )));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir(),
        };
        let storage = env_var_or(env_vars::STORAGE, "file").parse::<StorageBackend>()?;

        let api_key = env::var(env_vars::GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!(
                "{} not set, AI estimates and suggestions are unavailable",
                env_vars::GEMINI_API_KEY
            );
        }

        let config = Self {
            data_dir,
            storage,
            assistant: AssistantConfig {
                api_key,
                model: env_var_or(env_vars::GEMINI_MODEL, DEFAULT_GEMINI_MODEL),
                language: env_var_or(env_vars::ASSISTANT_LANGUAGE, DEFAULT_ASSISTANT_LANGUAGE),
            },
        };
        config.log_summary();
        Ok(config)
    }

    /// Override the data directory (CLI flag)
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    fn log_summary(&self) {
        info!(
            data_dir = %self.data_dir.display(),
            storage = %self.storage,
            assistant.enabled = self.assistant.is_enabled(),
            assistant.model = %self.assistant.model,
            "Configuration loaded"
        );
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(service_names::KALORICKE_AI)
}

/// Read an environment variable, falling back to a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
