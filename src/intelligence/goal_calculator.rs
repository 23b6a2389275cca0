// ABOUTME: Daily goal calculation from a user profile using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal adjustment and a fixed proportional macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculator
//!
//! Pure and total: every profile the input forms accept maps to a set of targets.
//! Implausible values (a weight of 1 kg, an age of 150) are not rejected here.
//!
//! # Pipeline
//!
//! ```text
//! BMR      = 10*weight + 6.25*height - 5*age + (5 | -161)
//! TDEE     = BMR * activity factor
//! calories = round(TDEE + goal adjustment)
//! protein  = round(calories * 30% / 4)
//! carbs    = round(calories * 40% / 4)
//! fat      = round(calories * 30% / 9)
//! fiber    = 30
//! sugar    = round(calories * 10% / 4)     (maximum)
//! sat. fat = round(calories * 10% / 9)     (maximum)
//! ```
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - WHO (2015). Guideline: Sugars intake for adults and children.

use serde::Serialize;

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, MacroSplitConfig, NutritionConfig,
};
use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::models::{ActivityLevel, DailyTargets, ProfileState, UserProfile};

/// Intermediate values of a goal calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalBreakdown {
    /// Basal Metabolic Rate (kcal/day), unrounded
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day), unrounded
    pub tdee: f64,
    /// Calorie delta applied for the user's goal
    pub goal_adjustment: f64,
    /// Resulting targets
    pub targets: DailyTargets,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> f64 {
    config.msj_weight_coef * profile.weight
        + config.msj_height_coef * profile.height
        + config.msj_age_coef * f64::from(profile.age)
        + config.gender_constant(profile.gender)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor(level)
}

/// Split a calorie target into per-nutrient targets
///
/// Every gram value is rounded half away from zero.
#[must_use]
pub fn targets_from_calories(calories: f64, split: &MacroSplitConfig) -> DailyTargets {
    let share = |pct: u8| calories * f64::from(pct) / 100.0;
    DailyTargets {
        calories,
        protein: (share(split.protein_pct) / KCAL_PER_G_PROTEIN).round(),
        carbs: (share(split.carbs_pct) / KCAL_PER_G_CARBS).round(),
        fat: (share(split.fat_pct) / KCAL_PER_G_FAT).round(),
        fiber: split.fiber_target_g,
        sugar: (share(split.sugar_max_pct) / KCAL_PER_G_CARBS).round(),
        saturated_fat: (share(split.saturated_fat_max_pct) / KCAL_PER_G_FAT).round(),
    }
}

/// Run the full pipeline and keep the intermediate values
#[must_use]
pub fn goal_breakdown(profile: &UserProfile, config: &NutritionConfig) -> GoalBreakdown {
    let bmr = calculate_bmr(profile, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity, &config.activity_factors);
    let goal_adjustment = config.goal_adjustments.adjustment(profile.goal);
    let calories = (tdee + goal_adjustment).round();

    GoalBreakdown {
        bmr,
        tdee,
        goal_adjustment,
        targets: targets_from_calories(calories, &config.macro_split),
    }
}

/// Daily targets for a profile with an explicit configuration
#[must_use]
pub fn calculate_goals_with(profile: &UserProfile, config: &NutritionConfig) -> DailyTargets {
    goal_breakdown(profile, config).targets
}

/// Daily targets for a profile with the process-wide configuration
#[must_use]
pub fn calculate_goals(profile: &UserProfile) -> DailyTargets {
    calculate_goals_with(profile, NutritionConfig::global())
}

/// Targets for the current profile state; fallback targets while unconfigured
#[must_use]
pub fn targets_for(state: &ProfileState) -> DailyTargets {
    state
        .profile()
        .map_or_else(DailyTargets::fallback, calculate_goals)
}
