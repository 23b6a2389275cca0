// ABOUTME: Nutrition configuration for daily goal calculation
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, goal adjustments and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Goal Configuration
//!
//! Every lookup table is a struct with one field per enum variant, read through an
//! exhaustive `match`. Adding an [`ActivityLevel`] or [`UserGoal`] variant without a
//! matching entry is a compile error rather than a silent zero.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Sugar / saturated fat caps: WHO guideline, max 10% of energy intake

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::models::{ActivityLevel, Gender, UserGoal};

/// Nutrition goal configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie delta applied per user goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Proportional split of the calorie target
    pub macro_split: MacroSplitConfig,
}

impl NutritionConfig {
    /// Validate every table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a coefficient is non-positive, an activity factor is
    /// below 1.0, or the macro percentages do not sum to 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        self.activity_factors.validate()?;
        self.macro_split.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant of the equation
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.extra_active,
        ];
        if factors.iter().any(|factor| *factor < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be at least 1.0",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must not decrease with activity level",
            ));
        }
        Ok(())
    }
}

/// Calorie delta (kcal/day) applied to TDEE per user goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Fast weight loss: -500
    pub lose_fast: f64,
    /// Slow weight loss: -250
    pub lose_slow: f64,
    /// Maintenance: 0
    pub maintain: f64,
    /// Weight gain: +250
    pub gain: f64,
}

impl GoalAdjustmentsConfig {
    /// Calorie delta for a goal
    #[must_use]
    pub const fn adjustment(&self, goal: UserGoal) -> f64 {
        match goal {
            UserGoal::LoseFast => self.lose_fast,
            UserGoal::LoseSlow => self.lose_slow,
            UserGoal::Maintain => self.maintain,
            UserGoal::Gain => self.gain,
        }
    }
}

/// Proportional allocation of the calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Share of calories from protein (%)
    pub protein_pct: u8,
    /// Share of calories from carbohydrates (%)
    pub carbs_pct: u8,
    /// Share of calories from fat (%)
    pub fat_pct: u8,
    /// Sugar cap as share of calories (%)
    pub sugar_max_pct: u8,
    /// Saturated fat cap as share of calories (%)
    pub saturated_fat_max_pct: u8,
    /// Fixed daily fiber target (g), independent of calories
    pub fiber_target_g: f64,
}

impl MacroSplitConfig {
    /// Validate that the macro percentages sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if protein + carbs + fat is not 100, or
    /// `ConfigError::ValueOutOfRange` if a cap exceeds 100% or fiber is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct);
        if sum != 100 {
            return Err(ConfigError::InvalidWeights(format!(
                "macro percentages must sum to 100, got {sum}"
            )));
        }
        if self.sugar_max_pct > 100 || self.saturated_fat_max_pct > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Sugar and saturated fat caps must be at most 100%",
            ));
        }
        if self.fiber_target_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fiber target must not be negative",
            ));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            lose_fast: -500.0,
            lose_slow: -250.0,
            maintain: 0.0,
            gain: 250.0,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_pct: 30,
            carbs_pct: 40,
            fat_pct: 30,
            sugar_max_pct: 10,
            saturated_fat_max_pct: 10,
            fiber_target_g: 30.0,
        }
    }
}
