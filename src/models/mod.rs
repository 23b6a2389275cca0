// ABOUTME: Core data models for the nutrition tracker
// ABOUTME: Re-exports nutrients, food entries, meal types, profile and target types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Persisted models ([`FoodEntry`], [`UserProfile`]) keep the JSON field names of the
//! stored records (`camelCase`, nutrient fields flattened into the entry).
//!
//! ## Core Models
//!
//! - `Nutrients`: calories plus six nutrient amounts, closed under addition
//! - `FoodEntry`: one logged item of a day's ledger
//! - `MealType`: meal label, with an explicit bucket for unrecognized stored labels
//! - `UserProfile` / `ProfileState`: inputs of the goal calculator
//! - `DailyTargets` / `DayStats`: goals and the derived per-day totals

mod food;
mod meal;
mod nutrients;
mod profile;
mod targets;

pub use food::{FoodEntry, NewFoodEntry};
pub use meal::MealType;
pub use nutrients::{NutrientKind, Nutrients};
pub use profile::{
    ActivityLevel, Gender, ProfileState, UserGoal, UserProfile, WeightHistory, WeightRecord,
};
pub use targets::{DailyTargets, DayStats};
