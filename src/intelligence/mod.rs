// ABOUTME: Nutrition intelligence: goal calculation, daily aggregation and meal grouping
// ABOUTME: Pure, deterministic functions with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! - `goal_calculator` - profile to daily targets (Mifflin-St Jeor, activity, goal, macro split)
//! - `aggregator` - ledger to `DayStats`, plus display-only derivations
//! - `meal_partition` - ledger to meal sections in display order

/// Daily aggregation and display derivations
pub mod aggregator;
/// Daily target calculation
pub mod goal_calculator;
/// Meal section grouping
pub mod meal_partition;

pub use aggregator::{
    aggregate, nutrient_detail, percent_of_goal, remaining_calories, ring_segments,
    BudgetMessage, MacroCalories, MealContribution, NutrientDetail, NutrientProgress,
    RingSegments,
};
pub use goal_calculator::{
    calculate_bmr, calculate_goals, calculate_goals_with, calculate_tdee, goal_breakdown,
    targets_for, targets_from_calories, GoalBreakdown,
};
pub use meal_partition::{partition, MealGroup, MealPartition, OTHER_SECTION};
