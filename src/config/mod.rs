// ABOUTME: Configuration management module for storage, assistant and nutrition tables
// ABOUTME: Environment-driven application settings plus validated goal-calculation tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: data directory, storage backend and AI assistant settings
//! - **Intelligence**: nutrition goal tables used by the goal calculator

/// Environment and application configuration
pub mod environment;
/// Intelligence module configuration
pub mod intelligence;

pub use environment::{AppConfig, AssistantConfig, StorageBackend};
pub use intelligence::{ConfigError, NutritionConfig};
