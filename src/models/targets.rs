// ABOUTME: Daily nutrient targets and the derived per-day statistics
// ABOUTME: DayStats pairs current totals with targets and is recomputed on every read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{NutrientKind, Nutrients};
use crate::constants::fallback_targets;

/// Per-day nutrient goals
///
/// Calories, protein, carbs, fat and fiber are amounts to reach; sugar and
/// saturated fat are upper limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTargets {
    /// Energy target (kcal)
    pub calories: f64,
    /// Protein target (g)
    pub protein: f64,
    /// Carbohydrate target (g)
    pub carbs: f64,
    /// Fat target (g)
    pub fat: f64,
    /// Fiber target (g)
    pub fiber: f64,
    /// Sugar maximum (g)
    pub sugar: f64,
    /// Saturated fat maximum (g)
    pub saturated_fat: f64,
}

impl DailyTargets {
    /// Targets used while no profile is configured
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            calories: fallback_targets::CALORIES,
            protein: fallback_targets::PROTEIN_G,
            carbs: fallback_targets::CARBS_G,
            fat: fallback_targets::FAT_G,
            fiber: fallback_targets::FIBER_G,
            sugar: fallback_targets::SUGAR_G,
            saturated_fat: fallback_targets::SATURATED_FAT_G,
        }
    }

    /// Target for a single nutrient
    #[must_use]
    pub const fn get(&self, kind: NutrientKind) -> f64 {
        match kind {
            NutrientKind::Calories => self.calories,
            NutrientKind::Protein => self.protein,
            NutrientKind::Carbs => self.carbs,
            NutrientKind::Fat => self.fat,
            NutrientKind::Fiber => self.fiber,
            NutrientKind::Sugar => self.sugar,
            NutrientKind::SaturatedFat => self.saturated_fat,
        }
    }
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Current totals for one day with the goals they are measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    /// Sum over every entry of the day
    pub current: Nutrients,
    /// Goals for the day
    pub targets: DailyTargets,
}
