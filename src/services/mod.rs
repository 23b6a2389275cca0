// ABOUTME: Domain service layer wrapping external collaborators
// ABOUTME: Hosts the AI nutrition assistant used by the application runtime and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// AI food estimates and meal suggestions
pub mod nutrition_assistant;

pub use nutrition_assistant::{
    EstimateOutcome, MealSuggestion, NutrientEstimate, NutritionAssistant, UnavailableReason,
};
