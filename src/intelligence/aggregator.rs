// ABOUTME: Daily aggregation of a ledger into DayStats plus display-only derivations
// ABOUTME: Remaining calories, macro calories, ring segments, budget message and nutrient detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Aggregator
//!
//! [`aggregate`] is a zero-initialized fold over every entry it is given. It does not
//! filter by meal type or date and does not re-validate stored values; negative values
//! from corrupted data are summed as-is.
//!
//! Everything else in this module is derived from a [`DayStats`] for display and is
//! never persisted.

use std::fmt;

use serde::Serialize;

use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::models::{DailyTargets, DayStats, FoodEntry, MealType, NutrientKind, Nutrients};

/// Sum every entry's nutrients and attach the targets unchanged
#[must_use]
pub fn aggregate(entries: &[FoodEntry], targets: DailyTargets) -> DayStats {
    DayStats {
        current: entries.iter().map(|entry| entry.nutrients).sum(),
        targets,
    }
}

/// Calories left before the goal is reached, never negative
#[must_use]
pub fn remaining_calories(stats: &DayStats) -> f64 {
    (stats.targets.calories - stats.current.calories).max(0.0)
}

/// Energy contributed by each macronutrient (kcal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroCalories {
    /// protein x 4
    pub protein: f64,
    /// carbs x 4
    pub carbs: f64,
    /// fat x 9
    pub fat: f64,
}

impl MacroCalories {
    /// Compute macro energy from nutrient totals
    #[must_use]
    pub fn from_nutrients(nutrients: &Nutrients) -> Self {
        Self {
            protein: nutrients.protein * KCAL_PER_G_PROTEIN,
            carbs: nutrients.carbs * KCAL_PER_G_CARBS,
            fat: nutrients.fat * KCAL_PER_G_FAT,
        }
    }

    /// Sum of the three macro energies
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Segments of the daily calorie ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingSegments {
    /// Energy per macronutrient
    pub macros: MacroCalories,
    /// Unfilled part of the ring; zero once macro energy exceeds the goal
    pub remaining: f64,
}

/// Build the calorie ring for a day
#[must_use]
pub fn ring_segments(stats: &DayStats) -> RingSegments {
    let macros = MacroCalories::from_nutrients(&stats.current);
    RingSegments {
        remaining: (stats.targets.calories - macros.total()).max(0.0),
        macros,
    }
}

/// Banner text about the remaining calorie budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetMessage {
    /// Calories still available (rounded)
    Remaining(i64),
    /// Goal met or exceeded
    GoalReached,
}

impl BudgetMessage {
    /// Classify the day's calorie budget
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // rounded kcal value well inside i64
    pub fn for_day(stats: &DayStats) -> Self {
        if stats.current.calories < stats.targets.calories {
            Self::Remaining(remaining_calories(stats).round() as i64)
        } else {
            Self::GoalReached
        }
    }
}

impl fmt::Display for BudgetMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining(kcal) => {
                write!(f, "You still have room for {kcal} kcal. What will you have?")
            }
            Self::GoalReached => write!(f, "You have reached your calorie goal for today."),
        }
    }
}

/// Progress towards a goal in percent, clamped to `[0, 100]`
///
/// A non-positive goal yields 0.
#[must_use]
pub fn percent_of_goal(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal * 100.0).clamp(0.0, 100.0)
}

/// Current value of one nutrient against its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientProgress {
    /// Which nutrient
    pub kind: NutrientKind,
    /// Day total
    pub current: f64,
    /// Target or maximum
    pub goal: f64,
    /// Clamped percent of goal
    pub percent: f64,
}

impl NutrientProgress {
    fn of(kind: NutrientKind, stats: &DayStats) -> Self {
        let current = stats.current.get(kind);
        let goal = stats.targets.get(kind);
        Self {
            kind,
            current,
            goal,
            percent: percent_of_goal(current, goal),
        }
    }
}

/// Contribution of one meal to a nutrient total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealContribution {
    /// Meal bucket
    pub meal_type: MealType,
    /// Summed amount for the meal
    pub amount: f64,
    /// Share of the day total, clamped to `[0, 100]`
    pub share_percent: f64,
}

/// Detail view of protein, carbs or fat
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientDetail {
    /// Headline progress
    pub progress: NutrientProgress,
    /// Positive per-meal contributions in display order
    pub by_meal: Vec<MealContribution>,
    /// Related nutrients: fiber and sugar for carbs, saturated fat for fat
    pub sub_metrics: Vec<NutrientProgress>,
}

/// Nutrients that have a detail view
pub const DETAIL_NUTRIENTS: [NutrientKind; 3] =
    [NutrientKind::Protein, NutrientKind::Carbs, NutrientKind::Fat];

const fn sub_metrics_of(kind: NutrientKind) -> &'static [NutrientKind] {
    match kind {
        NutrientKind::Carbs => &[NutrientKind::Fiber, NutrientKind::Sugar],
        NutrientKind::Fat => &[NutrientKind::SaturatedFat],
        _ => &[],
    }
}

/// Build the detail view for a nutrient of the day
///
/// Returns `None` for nutrients without a detail view.
#[must_use]
pub fn nutrient_detail(
    kind: NutrientKind,
    entries: &[FoodEntry],
    stats: &DayStats,
) -> Option<NutrientDetail> {
    if !DETAIL_NUTRIENTS.contains(&kind) {
        return None;
    }

    let progress = NutrientProgress::of(kind, stats);
    let by_meal = super::meal_partition::partition(entries)
        .groups()
        .iter()
        .filter_map(|group| {
            let amount = group.total().get(kind);
            (amount > 0.0).then(|| MealContribution {
                meal_type: group.meal_type.clone(),
                amount,
                share_percent: percent_of_goal(amount, progress.current),
            })
        })
        .collect();

    let sub_metrics = sub_metrics_of(kind)
        .iter()
        .map(|sub| NutrientProgress::of(*sub, stats))
        .collect();

    Some(NutrientDetail {
        progress,
        by_meal,
        sub_metrics,
    })
}
