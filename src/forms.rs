// ABOUTME: Input-boundary validation for manual entries, estimate review, profile and weight forms
// ABOUTME: Raw text in, validated domain values out; nothing is saved when validation fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Forms
//!
//! Every form holds raw text the way a user typed it. `validate` either yields a
//! complete domain value or an [`AppError`] naming the offending field; there are no
//! partial results.
//!
//! Numbers accept a decimal point or a decimal comma. Empty nutrient fields count as 0.

use chrono::NaiveDate;

use crate::constants::entry_defaults::{ONE_PORTION, UNKNOWN_FOOD_NAME};
use crate::constants::storage_keys::DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActivityLevel, Gender, MealType, NewFoodEntry, NutrientKind, Nutrients, UserGoal,
    UserProfile, WeightRecord,
};
use crate::services::NutrientEstimate;

fn parse_decimal(field: &str, raw: &str) -> AppResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::invalid_format(field, trimmed))?;
    if !value.is_finite() {
        return Err(AppError::invalid_format(field, trimmed));
    }
    Ok(Some(value))
}

/// Nutrient amount: empty means 0, negative is rejected
fn parse_nutrient(kind: NutrientKind, raw: &str) -> AppResult<f64> {
    let value = parse_decimal(kind.label(), raw)?.unwrap_or(0.0);
    if value < 0.0 {
        return Err(AppError::value_out_of_range(
            kind.label(),
            format!("{} must not be negative", kind.label()),
        ));
    }
    Ok(value)
}

/// Required strictly positive number
fn parse_positive(field: &str, raw: &str) -> AppResult<f64> {
    let value = parse_decimal(field, raw)?.ok_or_else(|| AppError::missing_field(field))?;
    if value <= 0.0 {
        return Err(AppError::value_out_of_range(
            field,
            format!("{field} must be greater than zero"),
        ));
    }
    Ok(value)
}

fn require_known_meal(meal_type: MealType) -> AppResult<MealType> {
    if meal_type.is_known() {
        Ok(meal_type)
    } else {
        Err(AppError::invalid_input(
            "choose breakfast, lunch, snack or dinner for a new entry",
        ))
    }
}

fn name_or_unknown(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        UNKNOWN_FOOD_NAME.to_owned()
    } else {
        name.to_owned()
    }
}

fn check_non_negative(nutrients: &Nutrients) -> AppResult<()> {
    match nutrients.first_negative() {
        Some(kind) => Err(AppError::value_out_of_range(
            kind.label(),
            format!("{} must not be negative", kind.label()),
        )),
        None => Ok(()),
    }
}

// ============================================================================
// Manual entry
// ============================================================================

/// Manual food entry as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntryForm {
    /// Food name; empty becomes "Unknown food"
    pub name: String,
    /// Quantity; empty becomes "1 portion"
    pub quantity: String,
    /// Calories (kcal)
    pub calories: String,
    /// Protein (g)
    pub protein: String,
    /// Carbohydrates (g)
    pub carbs: String,
    /// Fat (g)
    pub fat: String,
    /// Fiber (g)
    pub fiber: String,
    /// Sugar (g)
    pub sugar: String,
    /// Saturated fat (g)
    pub saturated_fat: String,
    /// Target meal
    pub meal_type: MealType,
}

impl Default for ManualEntryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: ONE_PORTION.to_owned(),
            calories: String::new(),
            protein: String::new(),
            carbs: String::new(),
            fat: String::new(),
            fiber: String::new(),
            sugar: String::new(),
            saturated_fat: String::new(),
            meal_type: MealType::Breakfast,
        }
    }
}

impl ManualEntryForm {
    /// Prefill the form from a reviewed estimate so the user can correct it
    #[must_use]
    pub fn from_draft(draft: &EstimateDraft, meal_type: MealType) -> Self {
        let n = &draft.nutrients;
        Self {
            name: draft.name.clone(),
            quantity: draft.quantity.clone(),
            calories: n.calories.to_string(),
            protein: n.protein.to_string(),
            carbs: n.carbs.to_string(),
            fat: n.fat.to_string(),
            fiber: n.fiber.to_string(),
            sugar: n.sugar.to_string(),
            saturated_fat: n.saturated_fat.to_string(),
            meal_type,
        }
    }

    /// Validate into an entry draft
    ///
    /// # Errors
    ///
    /// Returns an error if a number does not parse, is negative, or the meal type is
    /// not one of the four known meals
    pub fn validate(&self) -> AppResult<NewFoodEntry> {
        let nutrients = Nutrients {
            calories: parse_nutrient(NutrientKind::Calories, &self.calories)?,
            protein: parse_nutrient(NutrientKind::Protein, &self.protein)?,
            carbs: parse_nutrient(NutrientKind::Carbs, &self.carbs)?,
            fat: parse_nutrient(NutrientKind::Fat, &self.fat)?,
            fiber: parse_nutrient(NutrientKind::Fiber, &self.fiber)?,
            sugar: parse_nutrient(NutrientKind::Sugar, &self.sugar)?,
            saturated_fat: parse_nutrient(NutrientKind::SaturatedFat, &self.saturated_fat)?,
        };
        let quantity = self.quantity.trim();

        Ok(NewFoodEntry {
            name: name_or_unknown(&self.name),
            quantity: if quantity.is_empty() {
                ONE_PORTION.to_owned()
            } else {
                quantity.to_owned()
            },
            nutrients,
            meal_type: require_known_meal(self.meal_type.clone())?,
        })
    }
}

// ============================================================================
// Estimate review
// ============================================================================

/// AI estimate awaiting user confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateDraft {
    /// Proposed name
    pub name: String,
    /// Proposed quantity
    pub quantity: String,
    /// Proposed values
    pub nutrients: Nutrients,
    /// Model confidence between 0 and 1
    pub confidence: f64,
}

impl From<NutrientEstimate> for EstimateDraft {
    fn from(estimate: NutrientEstimate) -> Self {
        Self {
            nutrients: estimate.nutrients(),
            name: estimate.food_name,
            quantity: estimate.quantity_description,
            confidence: estimate.confidence_score,
        }
    }
}

impl EstimateDraft {
    /// Accept the draft as-is for a meal
    ///
    /// # Errors
    ///
    /// Returns an error if a value is negative or the meal type is not a known meal
    pub fn confirm(self, meal_type: MealType) -> AppResult<NewFoodEntry> {
        check_non_negative(&self.nutrients)?;
        Ok(NewFoodEntry {
            name: name_or_unknown(&self.name),
            quantity: self.quantity.trim().to_owned(),
            nutrients: self.nutrients,
            meal_type: require_known_meal(meal_type)?,
        })
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile settings as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    /// Age in whole years
    pub age: String,
    /// Weight in kg
    pub weight: String,
    /// Height in cm
    pub height: String,
    /// Biological sex
    pub gender: Gender,
    /// Activity level
    pub activity: ActivityLevel,
    /// Weight goal
    pub goal: UserGoal,
}

impl ProfileForm {
    /// Prefill from a stored (or default) profile
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            age: profile.age.to_string(),
            weight: profile.weight.to_string(),
            height: profile.height.to_string(),
            gender: profile.gender,
            activity: profile.activity,
            goal: profile.goal,
        }
    }

    /// Validate into a configured profile, keeping the weight history of `current`
    ///
    /// # Errors
    ///
    /// Returns an error if age is not a positive whole number or weight / height are
    /// not positive numbers
    pub fn validate(&self, current: &UserProfile) -> AppResult<UserProfile> {
        let age_raw = self.age.trim();
        if age_raw.is_empty() {
            return Err(AppError::missing_field("age"));
        }
        let age: u32 = age_raw
            .parse()
            .map_err(|_| AppError::invalid_format("age", age_raw))?;
        if age == 0 {
            return Err(AppError::value_out_of_range(
                "age",
                "age must be greater than zero",
            ));
        }

        Ok(UserProfile {
            age,
            weight: parse_positive("weight", &self.weight)?,
            height: parse_positive("height", &self.height)?,
            gender: self.gender,
            activity: self.activity,
            goal: self.goal,
            is_configured: true,
            weight_history: current.weight_history.clone(),
        })
    }
}

// ============================================================================
// Weight
// ============================================================================

/// Weight log entry as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightForm {
    /// Date as `YYYY-MM-DD`; empty means `today`
    pub date: String,
    /// Weight in kg
    pub weight: String,
}

impl WeightForm {
    /// Validate into a weight record
    ///
    /// # Errors
    ///
    /// Returns an error if the date is malformed or the weight is not positive
    pub fn validate(&self, today: NaiveDate) -> AppResult<WeightRecord> {
        let raw_date = self.date.trim();
        let date = if raw_date.is_empty() {
            today
        } else {
            NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
                .map_err(|_| AppError::invalid_format("date", raw_date))?
        };
        Ok(WeightRecord {
            date,
            weight: parse_positive("weight", &self.weight)?,
        })
    }
}
