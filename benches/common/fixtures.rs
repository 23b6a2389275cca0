// ABOUTME: Benchmark fixtures for generating realistic food ledgers and profiles
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic food ledgers and profiles for benchmarks.

use kaloricke_ai::models::{
    ActivityLevel, FoodEntry, Gender, MealType, Nutrients, UserGoal, UserProfile,
};

/// Predefined ledger sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LedgerSize {
    /// A typical day (8 entries)
    Typical,
    /// A heavy logging day (50 entries)
    Heavy,
    /// Stress size (500 entries)
    Stress,
}

impl LedgerSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Typical => 8,
            Self::Heavy => 50,
            Self::Stress => 500,
        }
    }
}

/// Generate a ledger cycling through every meal, including unknown labels
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn generate_ledger(size: LedgerSize) -> Vec<FoodEntry> {
    (0..size.count())
        .map(|index| {
            let protein = 5.0 + ((index * 7) % 40) as f64;
            let carbs = 10.0 + ((index * 13) % 80) as f64;
            let fat = 2.0 + ((index * 5) % 30) as f64;
            FoodEntry {
                id: format!("bench_entry_{index}"),
                name: format!("Benchmark food {index}"),
                quantity: "1 portion".to_owned(),
                nutrients: Nutrients {
                    fiber: ((index * 3) % 12) as f64,
                    sugar: ((index * 11) % 25) as f64,
                    saturated_fat: fat / 3.0,
                    ..Nutrients::with_macros(
                        protein * 4.0 + carbs * 4.0 + fat * 9.0,
                        protein,
                        carbs,
                        fat,
                    )
                },
                meal_type: match index % 5 {
                    0 => MealType::Breakfast,
                    1 => MealType::Lunch,
                    2 => MealType::Snack,
                    3 => MealType::Dinner,
                    _ => MealType::Other("Brunch".to_owned()),
                },
                timestamp: 1_700_000_000_000 + index as i64,
            }
        })
        .collect()
}

/// Every combination of activity level and goal for one body
#[must_use]
pub fn generate_profiles() -> Vec<UserProfile> {
    ActivityLevel::ALL
        .into_iter()
        .flat_map(|activity| {
            UserGoal::ALL.into_iter().map(move |goal| UserProfile {
                age: 35,
                weight: 70.0,
                height: 172.0,
                gender: Gender::Female,
                activity,
                goal,
                is_configured: true,
                weight_history: Default::default(),
            })
        })
        .collect()
}
