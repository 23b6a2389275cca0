// ABOUTME: Session runtime that owns the state, the repository and the assistant
// ABOUTME: Dispatches actions through the reducer and executes the resulting effects in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use super::action::{update, Action};
use super::effects::{Effect, EstimateInput};
use super::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::forms::EstimateDraft;
use crate::intelligence::targets_for;
use crate::logging::AppLogger;
use crate::models::{FoodEntry, MealType, NewFoodEntry, ProfileState, UserProfile, WeightRecord};
use crate::services::NutritionAssistant;
use crate::storage::NutritionRepository;

/// One interactive tracker session
///
/// Effects run sequentially on the caller's task, so every `dispatch` returns with the
/// state settled. Storage failures abort the dispatch, restore the state it started
/// from and are returned; AI failures are already folded into outcomes by the assistant.
pub struct Session {
    state: AppState,
    repository: NutritionRepository,
    assistant: NutritionAssistant,
}

impl Session {
    /// Session viewing `today`; call [`Self::start`] to load stored data
    #[must_use]
    pub fn new(
        repository: NutritionRepository,
        assistant: NutritionAssistant,
        today: NaiveDate,
    ) -> Self {
        Self {
            state: AppState::new(today),
            repository,
            assistant,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Assistant used for estimates and suggestions
    #[must_use]
    pub const fn assistant(&self) -> &NutritionAssistant {
        &self.assistant
    }

    /// Apply an action and run all effects it causes
    ///
    /// On failure the state is rolled back, so memory never shows a change that
    /// was not stored.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage read or write fails
    pub async fn dispatch(&mut self, action: Action) -> AppResult<()> {
        let snapshot = self.state.clone();
        let result = self.run_to_completion(action).await;
        if let Err(error) = &result {
            warn!(error = %error, "Effect failed, state rolled back");
            self.state = snapshot;
        }
        result
    }

    async fn run_to_completion(&mut self, action: Action) -> AppResult<()> {
        let mut queue: VecDeque<Effect> = update(&mut self.state, action).into();
        while let Some(effect) = queue.pop_front() {
            if let Some(follow_up) = self.run_effect(effect).await? {
                queue.extend(update(&mut self.state, follow_up));
            }
        }
        Ok(())
    }

    async fn run_effect(&self, effect: Effect) -> AppResult<Option<Action>> {
        debug!(effect = effect_name(&effect), "Running effect");
        match effect {
            Effect::LoadProfile => Ok(Some(Action::ProfileLoaded(
                self.repository.load_stored_profile().await?,
            ))),
            Effect::SaveProfile(profile) => {
                self.repository.save_profile(&profile).await?;
                let targets = targets_for(&ProfileState::from_stored(Some(profile.clone())));
                AppLogger::log_profile_saved(targets.calories, profile.weight_history.len());
                Ok(None)
            }
            Effect::LoadLedger(date) => Ok(Some(Action::LedgerLoaded {
                date,
                entries: self.repository.load_ledger(date).await?,
            })),
            Effect::SaveLedger { date, entries } => {
                self.repository.save_ledger(date, &entries).await?;
                Ok(None)
            }
            Effect::LoadDaysWithData => Ok(Some(Action::DaysWithDataLoaded(
                self.repository.days_with_data().await?,
            ))),
            Effect::FetchSuggestions {
                generation,
                remaining_calories,
                meal_type,
            } => {
                let suggestions = self
                    .assistant
                    .suggest_meal_plan(remaining_calories, meal_type)
                    .await;
                Ok(Some(Action::SuggestionsReceived {
                    generation,
                    suggestions,
                }))
            }
            Effect::FetchEstimate { generation, input } => {
                let outcome = match input {
                    EstimateInput::Text(text) => self.assistant.analyze_food_text(&text).await,
                    EstimateInput::Image(bytes) => self.assistant.analyze_food_image(bytes).await,
                };
                Ok(Some(Action::EstimateReceived {
                    generation,
                    outcome,
                }))
            }
        }
    }

    /// Load profile, selected ledger and calendar markers
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn start(&mut self) -> AppResult<()> {
        self.dispatch(Action::Initialize).await
    }

    /// View another day
    ///
    /// # Errors
    ///
    /// Returns an error if the day's ledger cannot be read
    pub async fn select_date(&mut self, date: NaiveDate) -> AppResult<()> {
        self.dispatch(Action::SelectDate(date)).await
    }

    /// Log a validated entry on the selected day
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be saved
    pub async fn add_entry(&mut self, draft: NewFoodEntry) -> AppResult<FoodEntry> {
        let entry = self.create_entry(draft);
        self.dispatch(Action::AddEntry(entry.clone())).await?;
        Ok(entry)
    }

    /// Remove an entry of the selected day; `false` when the id is unknown
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be saved
    pub async fn delete_entry(&mut self, id: &str) -> AppResult<bool> {
        let found = self.state.ledger.iter().any(|entry| entry.id == id);
        self.dispatch(Action::DeleteEntry(id.to_owned())).await?;
        AppLogger::log_entry_removed(self.state.selected_date, id, found);
        Ok(found)
    }

    /// Replace the profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved
    pub async fn save_profile(&mut self, profile: UserProfile) -> AppResult<()> {
        self.dispatch(Action::SaveProfile(profile)).await
    }

    /// Record a weight measurement
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved
    pub async fn log_weight(&mut self, record: WeightRecord) -> AppResult<()> {
        self.dispatch(Action::LogWeight(record)).await
    }

    /// Ask for meal ideas for the selected day
    ///
    /// # Errors
    ///
    /// Returns an error only if a follow-up storage effect fails
    pub async fn request_suggestions(&mut self, meal_type: MealType) -> AppResult<()> {
        self.dispatch(Action::RequestSuggestions(meal_type)).await
    }

    /// Log the suggestion at `index`; `None` when there is no such suggestion
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be saved
    pub async fn accept_suggestion(&mut self, index: usize) -> AppResult<Option<FoodEntry>> {
        let Some(suggestion) = self.state.suggestions.get(index) else {
            return Ok(None);
        };
        let meal_type = self.state.suggestion_meal.clone().unwrap_or(MealType::Snack);
        let entry = self.create_entry(suggestion.to_entry(meal_type));
        self.dispatch(Action::AddSuggestion(entry.clone())).await?;
        Ok(Some(entry))
    }

    /// Estimate a text description; the result lands in the pending draft or a notice
    ///
    /// # Errors
    ///
    /// Returns an error only if a follow-up storage effect fails
    pub async fn estimate_text(&mut self, description: &str) -> AppResult<EstimateOutcomeView> {
        self.dispatch(Action::RequestEstimate(EstimateInput::Text(
            description.to_owned(),
        )))
        .await?;
        Ok(self.estimate_view())
    }

    /// Estimate a food photo; the result lands in the pending draft or a notice
    ///
    /// # Errors
    ///
    /// Returns an error only if a follow-up storage effect fails
    pub async fn estimate_image(&mut self, image: Vec<u8>) -> AppResult<EstimateOutcomeView> {
        self.dispatch(Action::RequestEstimate(EstimateInput::Image(image)))
            .await?;
        Ok(self.estimate_view())
    }

    /// Replace the pending draft with a corrected one
    ///
    /// # Errors
    ///
    /// Returns an error only if a follow-up storage effect fails
    pub async fn edit_estimate(&mut self, draft: EstimateDraft) -> AppResult<()> {
        self.dispatch(Action::EditEstimate(draft)).await
    }

    /// Log the pending draft for a meal
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is pending, the draft fails validation, or the
    /// ledger cannot be saved
    pub async fn confirm_estimate(&mut self, meal_type: MealType) -> AppResult<FoodEntry> {
        let draft = self
            .state
            .pending_estimate
            .clone()
            .ok_or_else(|| AppError::not_found("pending estimate"))?;
        let entry = self.create_entry(draft.confirm(meal_type)?);
        self.dispatch(Action::ConfirmEstimate(entry.clone())).await?;
        Ok(entry)
    }

    /// Drop the pending draft
    ///
    /// # Errors
    ///
    /// Returns an error only if a follow-up storage effect fails
    pub async fn discard_estimate(&mut self) -> AppResult<()> {
        self.dispatch(Action::DiscardEstimate).await
    }

    fn create_entry(&self, draft: NewFoodEntry) -> FoodEntry {
        let entry = FoodEntry::create(draft, Utc::now());
        AppLogger::log_entry_added(
            self.state.selected_date,
            &entry.id,
            &entry.meal_type,
            entry.nutrients.calories,
        );
        entry
    }

    fn estimate_view(&self) -> EstimateOutcomeView {
        match (&self.state.pending_estimate, &self.state.notice) {
            (Some(draft), _) => EstimateOutcomeView::Draft(draft.clone()),
            (None, Some(notice)) => EstimateOutcomeView::Unavailable(notice.to_string()),
            (None, None) => EstimateOutcomeView::Unavailable(String::new()),
        }
    }
}

/// What an estimate request left behind for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateOutcomeView {
    /// Draft awaiting review
    Draft(EstimateDraft),
    /// User-facing reason there is no draft
    Unavailable(String),
}

const fn effect_name(effect: &Effect) -> &'static str {
    match effect {
        Effect::LoadProfile => "load_profile",
        Effect::SaveProfile(_) => "save_profile",
        Effect::LoadLedger(_) => "load_ledger",
        Effect::SaveLedger { .. } => "save_ledger",
        Effect::LoadDaysWithData => "load_days_with_data",
        Effect::FetchSuggestions { .. } => "fetch_suggestions",
        Effect::FetchEstimate { .. } => "fetch_estimate",
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("selected_date", &self.state.selected_date)
            .field("entries", &self.state.ledger.len())
            .field("assistant", &self.assistant)
            .finish_non_exhaustive()
    }
}

