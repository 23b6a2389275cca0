// ABOUTME: Nutrient bundle value type shared by food entries and daily totals
// ABOUTME: Calories in kcal, everything else in grams; element-wise addition and order-independent sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Nutrient amounts of a food entry or of a whole day
///
/// Values are stored as supplied; calories are not required to reconcile with
/// `protein*4 + carbs*4 + fat*9`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrients {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber: f64,
    /// Sugar (g)
    #[serde(default)]
    pub sugar: f64,
    /// Saturated fat (g)
    #[serde(default)]
    pub saturated_fat: f64,
}

impl Nutrients {
    /// All-zero bundle, the identity of addition
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
        fiber: 0.0,
        sugar: 0.0,
        saturated_fat: 0.0,
    };

    /// Bundle with only the four headline values set
    #[must_use]
    pub const fn with_macros(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber: 0.0,
            sugar: 0.0,
            saturated_fat: 0.0,
        }
    }

    /// Value of a single nutrient
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

    /// Name of the first negative field, if any
    #[must_use]
    pub fn first_negative(&self) -> Option<NutrientKind> {
        NutrientKind::ALL
            .into_iter()
            .find(|kind| self.get(*kind) < 0.0)
    }
}

impl Add for Nutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
            sugar: self.sugar + rhs.sugar,
            saturated_fat: self.saturated_fat + rhs.saturated_fat,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Field-wise total that is identical for every ordering of the same bundles
impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let items: Vec<Self> = iter.collect();
        Self {
            calories: field_total(&items, |n| n.calories),
            protein: field_total(&items, |n| n.protein),
            carbs: field_total(&items, |n| n.carbs),
            fat: field_total(&items, |n| n.fat),
            fiber: field_total(&items, |n| n.fiber),
            sugar: field_total(&items, |n| n.sugar),
            saturated_fat: field_total(&items, |n| n.saturated_fat),
        }
    }
}

impl<'a> Sum<&'a Self> for Nutrients {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Sorted terms, then Neumaier compensated summation
fn field_total(items: &[Nutrients], field: impl Fn(&Nutrients) -> f64) -> f64 {
    let mut terms: Vec<f64> = items.iter().map(field).collect();
    terms.sort_by(f64::total_cmp);

    let mut total = 0.0_f64;
    let mut compensation = 0.0_f64;
    for term in terms {
        let next = total + term;
        compensation += if total.abs() >= term.abs() {
            (total - next) + term
        } else {
            (term - next) + total
        };
        total = next;
    }
    total + compensation
}

/// Individual nutrient of a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKind {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
    /// Fiber (g)
    Fiber,
    /// Sugar (g)
    Sugar,
    /// Saturated fat (g)
    SaturatedFat,
}

impl NutrientKind {
    /// Every nutrient, in display order
    pub const ALL: [Self; 7] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Fiber,
        Self::Sugar,
        Self::SaturatedFat,
    ];

    /// Field name used in messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::Fiber => "fiber",
            Self::Sugar => "sugar",
            Self::SaturatedFat => "saturated fat",
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            _ => "g",
        }
    }
}
