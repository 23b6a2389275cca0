// ABOUTME: AI nutrition assistant: food estimates from text or photos and meal suggestions
// ABOUTME: Every failure is folded into an explicit outcome; nothing is thrown to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition assistant service
//!
//! Wraps an [`LlmProvider`] with the prompts and schemas of the tracker. Estimates come
//! back as [`EstimateOutcome`]; suggestions as a list that is empty on any failure and
//! never longer than three items.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::AssistantConfig;
use crate::constants::entry_defaults::{ONE_PORTION, SUGGESTION_COUNT};
use crate::errors::AppError;
use crate::llm::prompts::{
    food_image_prompt, food_text_prompt, get_nutrition_system_prompt, meal_plan_prompt,
    meal_suggestions_schema, nutrient_estimate_schema,
};
use crate::llm::{
    ChatMessage, ChatRequest, GeminiProvider, ImageAttachment, LlmProvider, ResponseFormat,
};
use crate::logging::AppLogger;
use crate::models::{MealType, NewFoodEntry, Nutrients};

/// Structured estimate returned by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientEstimate {
    /// Recognized food name
    pub food_name: String,
    /// Estimated amount, e.g. "200 g"
    #[serde(default)]
    pub quantity_description: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber_g: f64,
    /// Sugar (g)
    #[serde(default)]
    pub sugar_g: f64,
    /// Saturated fat (g)
    #[serde(default)]
    pub saturated_fat_g: f64,
    /// Model confidence between 0 and 1
    pub confidence_score: f64,
}

impl NutrientEstimate {
    /// Estimated values as a nutrient bundle
    #[must_use]
    pub const fn nutrients(&self) -> Nutrients {
        Nutrients {
            calories: self.calories,
            protein: self.protein_g,
            carbs: self.carbs_g,
            fat: self.fat_g,
            fiber: self.fiber_g,
            sugar: self.sugar_g,
            saturated_fat: self.saturated_fat_g,
        }
    }

    fn validate(&self) -> Result<(), String> {
        let nutrients = self.nutrients();
        if let Some(kind) = nutrients.first_negative() {
            return Err(format!("negative {}", kind.label()));
        }
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(format!("confidence {} outside 0..1", self.confidence_score));
        }
        Ok(())
    }
}

/// Meal idea that fits the remaining budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    /// Meal name
    pub name: String,
    /// Short ingredient description
    pub description: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Why this is a good choice
    pub reason: String,
}

impl MealSuggestion {
    /// Entry draft for logging the suggestion as one portion
    #[must_use]
    pub fn to_entry(&self, meal_type: MealType) -> NewFoodEntry {
        NewFoodEntry {
            name: self.name.clone(),
            quantity: ONE_PORTION.to_owned(),
            nutrients: Nutrients::with_macros(self.calories, self.protein, self.carbs, self.fat),
            meal_type,
        }
    }

    fn is_valid(&self) -> bool {
        Nutrients::with_macros(self.calories, self.protein, self.carbs, self.fat)
            .first_negative()
            .is_none()
    }
}

/// Why no estimate is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No API key configured
    NotConfigured,
    /// Nothing to analyze
    EmptyInput,
    /// The provider cannot read images
    VisionUnsupported,
    /// The model answered that the input is not food
    NotRecognized,
    /// The answer did not match the expected schema
    Malformed(String),
    /// Network or API failure
    Service(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => {
                write!(f, "The AI assistant is not configured. Set GEMINI_API_KEY to enable it.")
            }
            Self::EmptyInput => write!(f, "Nothing to analyze."),
            Self::VisionUnsupported => write!(f, "The configured AI model cannot read photos."),
            Self::NotRecognized | Self::Malformed(_) => {
                write!(f, "Sorry, I could not understand that. Please try describing it differently.")
            }
            Self::Service(message) => write!(f, "The AI service is unavailable: {message}"),
        }
    }
}

/// Result of an estimate request
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateOutcome {
    /// Usable estimate
    Estimate(NutrientEstimate),
    /// No usable estimate
    Unavailable(UnavailableReason),
}

impl EstimateOutcome {
    /// The estimate, if any
    #[must_use]
    pub const fn estimate(&self) -> Option<&NutrientEstimate> {
        match self {
            Self::Estimate(estimate) => Some(estimate),
            Self::Unavailable(_) => None,
        }
    }
}

/// Nutrition assistant backed by an optional LLM provider
#[derive(Clone)]
pub struct NutritionAssistant {
    provider: Option<Arc<dyn LlmProvider>>,
    language: String,
}

impl NutritionAssistant {
    /// Assistant using the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, language: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            language: language.into(),
        }
    }

    /// Assistant without a provider; every request reports `NotConfigured`
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            provider: None,
            language: String::new(),
        }
    }

    /// Assistant from configuration; disabled when no API key is set
    #[must_use]
    pub fn from_config(config: &AssistantConfig) -> Self {
        GeminiProvider::from_config(config).map_or_else(Self::disabled, |provider| {
            Self::new(Arc::new(provider), config.language.clone())
        })
    }

    /// Whether a provider is configured
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Estimate nutrients from a free-text description
    #[instrument(skip(self), fields(language = %self.language))]
    pub async fn analyze_food_text(&self, description: &str) -> EstimateOutcome {
        let description = description.trim();
        if description.is_empty() {
            return EstimateOutcome::Unavailable(UnavailableReason::EmptyInput);
        }
        let message = ChatMessage::user(food_text_prompt(description, &self.language));
        self.estimate("analyze_food_text", message).await
    }

    /// Estimate nutrients from a food photo
    #[instrument(skip(self, image), fields(bytes = image.len()))]
    pub async fn analyze_food_image(&self, image: Vec<u8>) -> EstimateOutcome {
        if image.is_empty() {
            return EstimateOutcome::Unavailable(UnavailableReason::EmptyInput);
        }
        if let Some(provider) = &self.provider {
            if !provider.capabilities().supports_vision() {
                return EstimateOutcome::Unavailable(UnavailableReason::VisionUnsupported);
            }
        }
        let message = ChatMessage::user(food_image_prompt(&self.language))
            .with_image(ImageAttachment::from_bytes(image));
        self.estimate("analyze_food_image", message).await
    }

    /// Up to three meal ideas for the remaining calorie budget
    ///
    /// Returns an empty list on any failure.
    #[instrument(skip(self))]
    pub async fn suggest_meal_plan(
        &self,
        remaining_calories: f64,
        meal_type: MealType,
    ) -> Vec<MealSuggestion> {
        #[allow(clippy::cast_possible_truncation)] // kcal budget, far inside i64
        let budget = remaining_calories.max(0.0).round() as i64;
        let request = Self::json_request(
            ChatMessage::user(meal_plan_prompt(
                budget,
                meal_type,
                SUGGESTION_COUNT,
                &self.language,
            )),
            meal_suggestions_schema(),
        );

        match self.call::<Vec<MealSuggestion>>("suggest_meal_plan", &request).await {
            Ok(Some(suggestions)) => {
                let total = suggestions.len();
                let valid: Vec<_> = suggestions
                    .into_iter()
                    .filter(MealSuggestion::is_valid)
                    .take(SUGGESTION_COUNT)
                    .collect();
                debug!(received = total, kept = valid.len(), "Meal suggestions parsed");
                valid
            }
            Ok(None) => Vec::new(),
            Err(reason) => {
                warn!(reason = ?reason, "Meal suggestions unavailable");
                Vec::new()
            }
        }
    }

    async fn estimate(&self, operation: &'static str, message: ChatMessage) -> EstimateOutcome {
        let request = Self::json_request(message, nutrient_estimate_schema());
        match self.call::<NutrientEstimate>(operation, &request).await {
            Ok(Some(estimate)) => match estimate.validate() {
                Ok(()) => EstimateOutcome::Estimate(estimate),
                Err(problem) => {
                    warn!(problem = %problem, "Rejected implausible estimate");
                    EstimateOutcome::Unavailable(UnavailableReason::Malformed(problem))
                }
            },
            Ok(None) => EstimateOutcome::Unavailable(UnavailableReason::NotRecognized),
            Err(reason) => EstimateOutcome::Unavailable(reason),
        }
    }

    fn json_request(message: ChatMessage, schema: Value) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(get_nutrition_system_prompt()),
            message,
        ])
        .with_response_format(ResponseFormat::json(schema))
    }

    /// Send a request and decode the JSON answer; `Ok(None)` when the model answered `null`
    async fn call<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: &ChatRequest,
    ) -> Result<Option<T>, UnavailableReason> {
        let Some(provider) = &self.provider else {
            return Err(UnavailableReason::NotConfigured);
        };

        let started = Instant::now();
        let response = provider.complete(request).await;
        #[allow(clippy::cast_possible_truncation)] // request durations fit in u64 millis
        let elapsed_ms = started.elapsed().as_millis() as u64;
        AppLogger::log_assistant_call(operation, response.is_ok(), elapsed_ms);

        let response = response.map_err(|e: AppError| {
            warn!(provider = provider.name(), error = %e, "Assistant request failed");
            UnavailableReason::Service(e.message)
        })?;
        debug!(
            model = %response.model,
            total_tokens = ?response.usage.as_ref().map(|usage| usage.total_tokens),
            finish_reason = ?response.finish_reason,
            "Assistant answer received"
        );

        parse_json_answer(&response.content)
    }
}

impl fmt::Debug for NutritionAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionAssistant")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("language", &self.language)
            .finish()
    }
}

/// Decode a model answer, tolerating a surrounding markdown code fence
fn parse_json_answer<T: DeserializeOwned>(content: &str) -> Result<Option<T>, UnavailableReason> {
    let trimmed = content.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    if body.is_empty() {
        return Ok(None);
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| UnavailableReason::Malformed(e.to_string()))?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| UnavailableReason::Malformed(e.to_string()))
}
