// ABOUTME: Explicit application state of the tracker: selected day, profile, ledger and AI results
// ABOUTME: Derived views (targets, stats, partition, budget banner) are computed on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::forms::EstimateDraft;
use crate::intelligence::{aggregate, partition, targets_for, BudgetMessage, MealPartition};
use crate::models::{DailyTargets, DayStats, FoodEntry, MealType, ProfileState, UserProfile};
use crate::services::{MealSuggestion, UnavailableReason};

/// One-shot message shown to the user until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No profile has been saved; fallback targets are in use
    ConfigureProfile,
    /// Profile saved and targets recalculated
    ProfileSaved,
    /// Weight recorded
    WeightLogged,
    /// The entry to delete was not in the ledger
    EntryNotFound(String),
    /// The assistant returned no usable estimate
    EstimateUnavailable(UnavailableReason),
    /// The assistant returned no meal ideas
    NoSuggestions,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigureProfile => write!(
                f,
                "Set up your profile to get personal targets. Default targets are shown."
            ),
            Self::ProfileSaved => write!(f, "Profile saved. Your daily targets were updated."),
            Self::WeightLogged => write!(f, "Weight recorded."),
            Self::EntryNotFound(id) => write!(f, "No entry with id {id} on this day."),
            Self::EstimateUnavailable(reason) => write!(f, "{reason}"),
            Self::NoSuggestions => write!(
                f,
                "No meal ideas are available right now. Please try again later."
            ),
        }
    }
}

/// Whole state of one tracker session
///
/// Only [`super::update`] mutates it. Generation counters tag AI requests so that a
/// response to a superseded request is recognized and dropped.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current calendar day
    pub today: NaiveDate,
    /// Day being viewed and edited
    pub selected_date: NaiveDate,
    /// Profile used for goal calculation
    pub profile: ProfileState,
    /// Profile shown in the settings form (stored profile or defaults)
    pub editable_profile: UserProfile,
    /// Entries of the selected day in insertion order
    pub ledger: Vec<FoodEntry>,
    /// Days with a non-empty ledger
    pub days_with_data: BTreeSet<NaiveDate>,
    /// Meal ideas for the selected day
    pub suggestions: Vec<MealSuggestion>,
    /// Meal the current suggestions were requested for
    pub suggestion_meal: Option<MealType>,
    /// AI estimate awaiting review
    pub pending_estimate: Option<EstimateDraft>,
    /// Message for the user
    pub notice: Option<Notice>,
    /// A suggestion request is in flight
    pub suggestions_loading: bool,
    /// An estimate request is in flight
    pub estimate_loading: bool,
    pub(super) suggestion_generation: u64,
    pub(super) estimate_generation: u64,
}

impl AppState {
    /// Fresh state with `today` selected and nothing loaded
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected_date: today,
            profile: ProfileState::Unconfigured,
            editable_profile: UserProfile::default(),
            ledger: Vec::new(),
            days_with_data: BTreeSet::new(),
            suggestions: Vec::new(),
            suggestion_meal: None,
            pending_estimate: None,
            notice: None,
            suggestions_loading: false,
            estimate_loading: false,
            suggestion_generation: 0,
            estimate_generation: 0,
        }
    }

    /// Targets for the current profile state
    #[must_use]
    pub fn targets(&self) -> DailyTargets {
        targets_for(&self.profile)
    }

    /// Totals of the selected day against its targets
    #[must_use]
    pub fn stats(&self) -> DayStats {
        aggregate(&self.ledger, self.targets())
    }

    /// Entries of the selected day grouped by meal
    #[must_use]
    pub fn partition(&self) -> MealPartition<'_> {
        partition(&self.ledger)
    }

    /// Remaining-budget banner of the selected day
    #[must_use]
    pub fn budget_message(&self) -> BudgetMessage {
        BudgetMessage::for_day(&self.stats())
    }

    /// Whether the selected day is today
    #[must_use]
    pub fn is_viewing_today(&self) -> bool {
        self.selected_date == self.today
    }

    /// Latest issued suggestion request
    #[must_use]
    pub const fn suggestion_generation(&self) -> u64 {
        self.suggestion_generation
    }

    /// Latest issued estimate request
    #[must_use]
    pub const fn estimate_generation(&self) -> u64 {
        self.estimate_generation
    }
}
