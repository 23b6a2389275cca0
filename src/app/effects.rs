// ABOUTME: Side effects requested by the reducer: persistence reads/writes and AI calls
// ABOUTME: Effects are plain data; the session runtime executes them and feeds results back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;

use crate::models::{FoodEntry, MealType, UserProfile};

/// What the assistant should estimate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateInput {
    /// Free-text food description
    Text(String),
    /// Encoded food photo
    Image(Vec<u8>),
}

/// Work the runtime performs on behalf of the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Read the stored profile, answered with `ProfileLoaded`
    LoadProfile,
    /// Persist the profile
    SaveProfile(UserProfile),
    /// Read a day's ledger, answered with `LedgerLoaded`
    LoadLedger(NaiveDate),
    /// Replace a day's stored ledger
    SaveLedger {
        /// Day of the ledger
        date: NaiveDate,
        /// Complete ledger after the change
        entries: Vec<FoodEntry>,
    },
    /// Enumerate days with entries, answered with `DaysWithDataLoaded`
    LoadDaysWithData,
    /// Ask for meal ideas, answered with `SuggestionsReceived`
    FetchSuggestions {
        /// Request tag
        generation: u64,
        /// Remaining calories of the selected day
        remaining_calories: f64,
        /// Meal to suggest for
        meal_type: MealType,
    },
    /// Ask for a nutrient estimate, answered with `EstimateReceived`
    FetchEstimate {
        /// Request tag
        generation: u64,
        /// Text or photo to analyze
        input: EstimateInput,
    },
}
