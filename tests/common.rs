// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, sample profiles and entries, stores and a scripted LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `kaloricke_ai`

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::NaiveDate;
use kaloricke_ai::{
    errors::{AppError, AppResult},
    llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider},
    models::{
        ActivityLevel, FoodEntry, Gender, MealType, Nutrients, UserGoal, UserProfile,
    },
    services::NutritionAssistant,
    storage::{KeyValueStore, MemoryStore, NutritionRepository},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// 30 y, 75 kg, 175 cm, male, moderate, maintain; configured
pub fn reference_profile() -> UserProfile {
    UserProfile {
        age: 30,
        weight: 75.0,
        height: 175.0,
        gender: Gender::Male,
        activity: ActivityLevel::Moderate,
        goal: UserGoal::Maintain,
        is_configured: true,
        weight_history: Default::default(),
    }
}

pub fn profile(
    age: u32,
    weight: f64,
    height: f64,
    gender: Gender,
    activity: ActivityLevel,
    goal: UserGoal,
) -> UserProfile {
    UserProfile {
        age,
        weight,
        height,
        gender,
        activity,
        goal,
        is_configured: true,
        weight_history: Default::default(),
    }
}

/// Entry with the four macro fields set and fixed identity
pub fn entry(id: &str, meal_type: MealType, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodEntry {
    FoodEntry {
        id: id.to_owned(),
        name: format!("food {id}"),
        quantity: "1 portion".to_owned(),
        nutrients: Nutrients::with_macros(calories, protein, carbs, fat),
        meal_type,
        timestamp: 1_700_000_000_000,
    }
}

pub fn memory_repository() -> NutritionRepository {
    NutritionRepository::new(Arc::new(MemoryStore::new()))
}

/// Memory store whose writes can be switched to fail
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(AppError::storage("disk full"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    fn name(&self) -> &'static str {
        "flaky"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        self.check_writable()?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.check_writable()?;
        self.inner.remove(key).await
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys().await
    }
}

/// Provider that replays canned answers and records every request
pub struct ScriptedProvider {
    answers: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<ChatRequest>>,
    capabilities: LlmCapabilities,
}

impl ScriptedProvider {
    pub fn new(answers: Vec<Result<String, String>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            requests: Mutex::new(Vec::new()),
            capabilities: LlmCapabilities::full_featured(),
        }
    }

    pub fn answering(content: &str) -> Self {
        Self::new(vec![Ok(content.to_owned())])
    }

    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(message.to_owned())])
    }

    pub fn text_only(mut self) -> Self {
        self.capabilities = LlmCapabilities::text_only();
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted answer left".to_owned()));

        answer
            .map(|content| ChatResponse {
                content,
                model: "scripted-model".to_owned(),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            })
            .map_err(|message| AppError::external_service("scripted", message))
    }
}

/// Assistant over a scripted provider, keeping a handle for request inspection
pub fn scripted_assistant(provider: ScriptedProvider) -> (NutritionAssistant, Arc<ScriptedProvider>) {
    let provider = Arc::new(provider);
    let assistant = NutritionAssistant::new(provider.clone(), "English");
    (assistant, provider)
}

pub const BANANA_ESTIMATE: &str = r#"{
    "food_name": "Banana",
    "quantity_description": "1 medium (120 g)",
    "calories": 105,
    "protein_g": 1.3,
    "carbs_g": 27.0,
    "fat_g": 0.4,
    "fiber_g": 3.1,
    "sugar_g": 14.4,
    "confidence_score": 0.92
}"#;

pub const DINNER_SUGGESTIONS: &str = r#"[
    {"name": "Salmon with rice", "description": "Baked salmon, jasmine rice, broccoli", "calories": 620, "protein": 42, "carbs": 58, "fat": 22, "reason": "High protein within budget"},
    {"name": "Lentil soup", "description": "Red lentils, carrot, cumin", "calories": 410, "protein": 24, "carbs": 60, "fat": 6, "reason": "Fiber rich and light"},
    {"name": "Chicken wrap", "description": "Grilled chicken, tortilla, salad", "calories": 530, "protein": 38, "carbs": 45, "fat": 18, "reason": "Balanced macros"},
    {"name": "Extra idea", "description": "Should be cut", "calories": 300, "protein": 10, "carbs": 30, "fat": 10, "reason": "Fourth item"}
]"#;
