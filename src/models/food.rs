// ABOUTME: Food entry model for the per-day ledger
// ABOUTME: Persisted entries plus the validated draft used to create them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MealType, Nutrients};

/// One logged food item
///
/// Serialized with the nutrient fields flattened next to the identity fields,
/// matching the stored `items_YYYY-MM-DD` records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free text quantity such as "1 portion" or "150 g"
    pub quantity: String,
    /// Nutrient values
    #[serde(flatten)]
    pub nutrients: Nutrients,
    /// Meal the entry belongs to
    pub meal_type: MealType,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
}

impl FoodEntry {
    /// Assign identity and creation time to a draft
    #[must_use]
    pub fn create(draft: NewFoodEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            quantity: draft.quantity,
            nutrients: draft.nutrients,
            meal_type: draft.meal_type,
            timestamp: now.timestamp_millis(),
        }
    }
}

/// Entry data before an identifier and timestamp are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodEntry {
    /// Display name
    pub name: String,
    /// Free text quantity
    pub quantity: String,
    /// Nutrient values
    pub nutrients: Nutrients,
    /// Target meal
    pub meal_type: MealType,
}
