// ABOUTME: Meal type enumeration used to label and group food entries
// ABOUTME: Lossy string parsing keeps unrecognized stored labels verbatim in an Other variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Type of meal
///
/// Persisted as a plain string. Labels that match none of the four known meals
/// (corrupted or migrated data) load as [`MealType::Other`] instead of failing,
/// and are written back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Snack between meals
    Snack,
    /// Dinner meal
    Dinner,
    /// Stored label that is not one of the known meals
    Other(String),
}

impl MealType {
    /// Meals a user can log, in display order
    pub const KNOWN: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Parse meal type from string
    ///
    /// Accepts English names and the original Czech labels, case-insensitively.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "snídaně" => Self::Breakfast,
            "lunch" | "oběd" => Self::Lunch,
            "snack" | "svačina" => Self::Snack,
            "dinner" | "večeře" => Self::Dinner,
            _ => Self::Other(s.to_owned()),
        }
    }

    /// Name used in storage and output; unknown labels keep their stored text
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
            Self::Other(label) => label,
        }
    }

    /// Whether new entries may be created with this meal type
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<MealType> for String {
    fn from(value: MealType) -> Self {
        value.as_str().to_owned()
    }
}

impl FromStr for MealType {
    type Err = AppError;

    /// Strict parse for user input: only the four known meals are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let meal = Self::from_str_lossy(s);
        if meal.is_known() {
            Ok(meal)
        } else {
            Err(AppError::invalid_input(format!(
                "unknown meal type '{s}', expected breakfast, lunch, snack or dinner"
            )))
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
