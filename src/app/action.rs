// ABOUTME: User and runtime actions plus the pure reducer that applies them to the app state
// ABOUTME: The reducer never performs I/O; it returns the effects the runtime must execute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::effects::{Effect, EstimateInput};
use super::state::{AppState, Notice};
use crate::calendar::{next_day, previous_day};
use crate::forms::EstimateDraft;
use crate::intelligence::remaining_calories;
use crate::models::{FoodEntry, MealType, ProfileState, UserProfile, WeightRecord};
use crate::services::{EstimateOutcome, MealSuggestion};

/// Everything that can change the application state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Load profile, selected ledger and calendar markers
    Initialize,
    /// View another day
    SelectDate(NaiveDate),
    /// View the day after the selected one
    NextDay,
    /// View the day before the selected one
    PreviousDay,
    /// View today
    GoToToday,
    /// Stored profile read (or absent)
    ProfileLoaded(Option<UserProfile>),
    /// Stored ledger of a day read
    LedgerLoaded {
        /// Day of the ledger
        date: NaiveDate,
        /// Stored entries
        entries: Vec<FoodEntry>,
    },
    /// Calendar markers read
    DaysWithDataLoaded(BTreeSet<NaiveDate>),
    /// Append an entry to the selected day
    AddEntry(FoodEntry),
    /// Remove an entry of the selected day by id
    DeleteEntry(String),
    /// Replace the profile from the settings form
    SaveProfile(UserProfile),
    /// Record a weight measurement
    LogWeight(WeightRecord),
    /// Ask the assistant for meal ideas
    RequestSuggestions(MealType),
    /// Assistant answered a suggestion request
    SuggestionsReceived {
        /// Tag of the answered request
        generation: u64,
        /// Meal ideas, possibly empty
        suggestions: Vec<MealSuggestion>,
    },
    /// Log one of the suggestions; clears the displayed suggestions
    AddSuggestion(FoodEntry),
    /// Ask the assistant for a nutrient estimate
    RequestEstimate(EstimateInput),
    /// Assistant answered an estimate request
    EstimateReceived {
        /// Tag of the answered request
        generation: u64,
        /// Estimate or the reason there is none
        outcome: EstimateOutcome,
    },
    /// User corrected the pending estimate
    EditEstimate(EstimateDraft),
    /// Log the reviewed estimate
    ConfirmEstimate(FoodEntry),
    /// Drop the pending estimate
    DiscardEstimate,
    /// Hide the current notice
    DismissNotice,
}

/// Apply an action and return the effects to run
#[must_use]
pub fn update(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::Initialize => vec![
            Effect::LoadProfile,
            Effect::LoadLedger(state.selected_date),
            Effect::LoadDaysWithData,
        ],
        Action::SelectDate(date) => select_date(state, date),
        Action::NextDay => select_date(state, next_day(state.selected_date)),
        Action::PreviousDay => select_date(state, previous_day(state.selected_date)),
        Action::GoToToday => select_date(state, state.today),
        Action::ProfileLoaded(stored) => {
            state.editable_profile = stored.clone().unwrap_or_default();
            state.profile = ProfileState::from_stored(stored);
            if !state.profile.is_configured() && state.notice.is_none() {
                state.notice = Some(Notice::ConfigureProfile);
            }
            Vec::new()
        }
        Action::LedgerLoaded { date, entries } => {
            // a slower load for a day no longer selected must not overwrite the view
            if date == state.selected_date {
                state.ledger = entries;
            }
            Vec::new()
        }
        Action::DaysWithDataLoaded(days) => {
            state.days_with_data = days;
            Vec::new()
        }
        Action::AddEntry(entry) => append_entry(state, entry),
        Action::DeleteEntry(id) => delete_entry(state, &id),
        Action::SaveProfile(profile) => {
            state.editable_profile = profile.clone();
            state.profile = ProfileState::from_stored(Some(profile.clone()));
            state.notice = Some(Notice::ProfileSaved);
            vec![Effect::SaveProfile(profile)]
        }
        Action::LogWeight(record) => {
            let mut profile = state.editable_profile.clone();
            profile.log_weight(record);
            state.editable_profile = profile.clone();
            state.profile = ProfileState::from_stored(Some(profile.clone()));
            state.notice = Some(Notice::WeightLogged);
            vec![Effect::SaveProfile(profile)]
        }
        Action::RequestSuggestions(meal_type) => {
            state.suggestion_generation += 1;
            state.suggestions.clear();
            state.suggestion_meal = Some(meal_type.clone());
            state.suggestions_loading = true;
            vec![Effect::FetchSuggestions {
                generation: state.suggestion_generation,
                remaining_calories: remaining_calories(&state.stats()),
                meal_type,
            }]
        }
        Action::SuggestionsReceived {
            generation,
            suggestions,
        } => {
            if generation != state.suggestion_generation {
                return Vec::new();
            }
            state.suggestions_loading = false;
            if suggestions.is_empty() {
                state.notice = Some(Notice::NoSuggestions);
            }
            state.suggestions = suggestions;
            Vec::new()
        }
        Action::AddSuggestion(entry) => {
            clear_suggestions(state);
            append_entry(state, entry)
        }
        Action::RequestEstimate(input) => {
            state.estimate_generation += 1;
            state.pending_estimate = None;
            state.estimate_loading = true;
            vec![Effect::FetchEstimate {
                generation: state.estimate_generation,
                input,
            }]
        }
        Action::EstimateReceived {
            generation,
            outcome,
        } => {
            if generation != state.estimate_generation {
                return Vec::new();
            }
            state.estimate_loading = false;
            match outcome {
                EstimateOutcome::Estimate(estimate) => {
                    state.pending_estimate = Some(EstimateDraft::from(estimate));
                }
                EstimateOutcome::Unavailable(reason) => {
                    state.notice = Some(Notice::EstimateUnavailable(reason));
                }
            }
            Vec::new()
        }
        Action::EditEstimate(draft) => {
            if state.pending_estimate.is_some() {
                state.pending_estimate = Some(draft);
            }
            Vec::new()
        }
        Action::ConfirmEstimate(entry) => {
            state.pending_estimate = None;
            append_entry(state, entry)
        }
        Action::DiscardEstimate => {
            state.pending_estimate = None;
            Vec::new()
        }
        Action::DismissNotice => {
            state.notice = None;
            Vec::new()
        }
    }
}

fn clear_suggestions(state: &mut AppState) {
    // bumping the generation drops any answer still in flight
    state.suggestion_generation += 1;
    state.suggestions.clear();
    state.suggestion_meal = None;
    state.suggestions_loading = false;
}

fn select_date(state: &mut AppState, date: NaiveDate) -> Vec<Effect> {
    state.selected_date = date;
    state.ledger.clear();
    clear_suggestions(state);
    vec![Effect::LoadLedger(date)]
}

fn append_entry(state: &mut AppState, entry: FoodEntry) -> Vec<Effect> {
    state.ledger.push(entry);
    state.days_with_data.insert(state.selected_date);
    vec![Effect::SaveLedger {
        date: state.selected_date,
        entries: state.ledger.clone(),
    }]
}

fn delete_entry(state: &mut AppState, id: &str) -> Vec<Effect> {
    let before = state.ledger.len();
    state.ledger.retain(|entry| entry.id != id);
    if state.ledger.len() == before {
        state.notice = Some(Notice::EntryNotFound(id.to_owned()));
        return Vec::new();
    }
    if state.ledger.is_empty() {
        state.days_with_data.remove(&state.selected_date);
    }
    vec![Effect::SaveLedger {
        date: state.selected_date,
        entries: state.ledger.clone(),
    }]
}
