// ABOUTME: User profile model with physical attributes, activity level, goal and weight history
// ABOUTME: ProfileState makes the configured / unconfigured distinction explicit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "unknown gender '{other}', expected male or female"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise plus physical job
    #[serde(rename = "extra", alias = "extra_active")]
    ExtraActive,
}

impl ActivityLevel {
    /// Every level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::ExtraActive,
    ];

    /// Stored name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::ExtraActive => "extra",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "extra" | "extra_active" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "unknown activity level '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight goal; selects the calorie adjustment applied to TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserGoal {
    /// Aggressive deficit
    LoseFast,
    /// Moderate deficit
    LoseSlow,
    /// Maintain current weight
    Maintain,
    /// Surplus
    Gain,
}

impl UserGoal {
    /// Every goal
    pub const ALL: [Self; 4] = [Self::LoseFast, Self::LoseSlow, Self::Maintain, Self::Gain];

    /// Stored name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseFast => "lose_fast",
            Self::LoseSlow => "lose_slow",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for UserGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "lose_fast" => Ok(Self::LoseFast),
            "lose_slow" => Ok(Self::LoseSlow),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!("unknown goal '{other}'"))),
        }
    }
}

impl fmt::Display for UserGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body weight measured on a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Measurement date
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
}

/// Weight measurements, at most one per date, sorted by date ascending
///
/// Deserialization normalizes stored data so the ordering holds for whatever
/// was on disk; on duplicate dates the later record wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<WeightRecord>", into = "Vec<WeightRecord>")]
pub struct WeightHistory(Vec<WeightRecord>);

impl WeightHistory {
    /// Insert a record or replace the one with the same date
    pub fn upsert(&mut self, record: WeightRecord) {
        match self.0.binary_search_by_key(&record.date, |r| r.date) {
            Ok(index) => self.0[index] = record,
            Err(index) => self.0.insert(index, record),
        }
    }

    /// Most recent record
    #[must_use]
    pub fn latest(&self) -> Option<&WeightRecord> {
        self.0.last()
    }

    /// Records in ascending date order
    #[must_use]
    pub fn records(&self) -> &[WeightRecord] {
        &self.0
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no weight has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<WeightRecord>> for WeightHistory {
    fn from(records: Vec<WeightRecord>) -> Self {
        let mut history = Self(Vec::with_capacity(records.len()));
        for record in records {
            history.upsert(record);
        }
        history
    }
}

impl From<WeightHistory> for Vec<WeightRecord> {
    fn from(history: WeightHistory) -> Self {
        history.0
    }
}

/// User profile driving the daily targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Current weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    /// Biological sex
    pub gender: Gender,
    /// Activity level
    pub activity: ActivityLevel,
    /// Weight goal
    pub goal: UserGoal,
    /// Whether the user has saved the profile at least once
    #[serde(default)]
    pub is_configured: bool,
    /// Logged weights
    #[serde(default)]
    pub weight_history: WeightHistory,
}

impl Default for UserProfile {
    /// Form defaults shown before the first save
    fn default() -> Self {
        Self {
            age: 30,
            weight: 75.0,
            height: 175.0,
            gender: Gender::Male,
            activity: ActivityLevel::Moderate,
            goal: UserGoal::Maintain,
            is_configured: false,
            weight_history: WeightHistory::default(),
        }
    }
}

impl UserProfile {
    /// Record a weight and keep `weight` in sync with the newest measurement
    ///
    /// Back-dated records go into the history without touching the current weight.
    pub fn log_weight(&mut self, record: WeightRecord) {
        self.weight_history.upsert(record);
        if self
            .weight_history
            .latest()
            .is_some_and(|latest| latest.date == record.date)
        {
            self.weight = record.weight;
        }
    }
}

/// Whether goal calculation has a usable profile
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    /// No profile saved yet; fallback targets apply
    #[default]
    Unconfigured,
    /// Profile saved by the user
    Configured(UserProfile),
}

impl ProfileState {
    /// Classify a stored profile by its configured flag
    #[must_use]
    pub fn from_stored(profile: Option<UserProfile>) -> Self {
        match profile {
            Some(profile) if profile.is_configured => Self::Configured(profile),
            _ => Self::Unconfigured,
        }
    }

    /// Configured profile, if any
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Configured(profile) => Some(profile),
            Self::Unconfigured => None,
        }
    }

    /// Whether a profile has been saved
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}
