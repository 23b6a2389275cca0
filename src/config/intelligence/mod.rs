// ABOUTME: Intelligence configuration entry point with a validated process-wide instance
// ABOUTME: Re-exports nutrition goal tables and the configuration error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! - `nutrition` - BMR coefficients, activity factors, goal adjustments, macro split
//! - `error` - validation errors

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroSplitConfig, NutritionConfig,
};

use std::sync::OnceLock;

use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Invalid nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if validation of any table fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }
}
