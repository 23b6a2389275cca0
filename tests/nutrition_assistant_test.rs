// ABOUTME: Tests for the nutrition assistant against a scripted LLM provider
// ABOUTME: Estimate outcomes, failure folding, suggestion limits and request shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kaloricke_ai::{
    llm::{MessageRole, ResponseFormat},
    models::MealType,
    services::{EstimateOutcome, NutritionAssistant, UnavailableReason},
};

mod common;

use common::{
    init_test_logging, scripted_assistant, ScriptedProvider, BANANA_ESTIMATE, DINNER_SUGGESTIONS,
};

const PNG_BYTES: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

// ============================================================================
// Estimates
// ============================================================================

#[tokio::test]
async fn test_text_estimate_success() {
    init_test_logging();
    let (assistant, provider) = scripted_assistant(ScriptedProvider::answering(BANANA_ESTIMATE));

    let outcome = assistant.analyze_food_text("one banana").await;
    let estimate = outcome.estimate().unwrap();
    assert_eq!(estimate.food_name, "Banana");
    assert!((estimate.calories - 105.0).abs() < f64::EPSILON);
    assert!((estimate.fiber_g - 3.1).abs() < 1e-9);
    assert!(estimate.saturated_fat_g.abs() < f64::EPSILON);

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages[0].role, MessageRole::System);
    assert!(requests[0].messages[1].content.contains("one banana"));
    assert!(matches!(
        requests[0].response_format,
        ResponseFormat::Json { .. }
    ));
}

#[tokio::test]
async fn test_fenced_answer_is_accepted() {
    let fenced = format!("```json\n{BANANA_ESTIMATE}\n```");
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering(&fenced));
    assert!(assistant.analyze_food_text("banana").await.estimate().is_some());
}

#[tokio::test]
async fn test_service_failure_becomes_unavailable() {
    init_test_logging();
    let (assistant, _) = scripted_assistant(ScriptedProvider::failing("HTTP 503"));
    let outcome = assistant.analyze_food_text("banana").await;
    assert!(matches!(
        outcome,
        EstimateOutcome::Unavailable(UnavailableReason::Service(ref m)) if m.contains("HTTP 503")
    ));
}

#[tokio::test]
async fn test_garbage_answer_is_malformed() {
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering("I think it is a banana"));
    let outcome = assistant.analyze_food_text("banana").await;
    assert!(matches!(
        outcome,
        EstimateOutcome::Unavailable(UnavailableReason::Malformed(_))
    ));
}

#[tokio::test]
async fn test_null_answer_is_not_recognized() {
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering("null"));
    assert_eq!(
        assistant.analyze_food_text("asdf qwer").await,
        EstimateOutcome::Unavailable(UnavailableReason::NotRecognized)
    );
}

#[tokio::test]
async fn test_negative_values_are_rejected() {
    let answer = BANANA_ESTIMATE.replace("\"fat_g\": 0.4", "\"fat_g\": -2");
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering(&answer));
    assert!(matches!(
        assistant.analyze_food_text("banana").await,
        EstimateOutcome::Unavailable(UnavailableReason::Malformed(_))
    ));
}

#[tokio::test]
async fn test_confidence_outside_unit_range_is_rejected() {
    let answer = BANANA_ESTIMATE.replace("0.92", "7");
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering(&answer));
    assert!(matches!(
        assistant.analyze_food_text("banana").await,
        EstimateOutcome::Unavailable(UnavailableReason::Malformed(_))
    ));
}

#[tokio::test]
async fn test_empty_description_never_calls_provider() {
    let (assistant, provider) = scripted_assistant(ScriptedProvider::answering(BANANA_ESTIMATE));
    assert_eq!(
        assistant.analyze_food_text("   ").await,
        EstimateOutcome::Unavailable(UnavailableReason::EmptyInput)
    );
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_image_estimate_attaches_image() {
    let (assistant, provider) = scripted_assistant(ScriptedProvider::answering(BANANA_ESTIMATE));
    let outcome = assistant.analyze_food_image(PNG_BYTES.to_vec()).await;
    assert!(outcome.estimate().is_some());

    let requests = provider.requests();
    assert!(requests[0].has_images());
    assert_eq!(requests[0].messages[1].images[0].mime_type, "image/png");
}

#[tokio::test]
async fn test_image_estimate_needs_vision() {
    let (assistant, provider) =
        scripted_assistant(ScriptedProvider::answering(BANANA_ESTIMATE).text_only());
    assert_eq!(
        assistant.analyze_food_image(PNG_BYTES.to_vec()).await,
        EstimateOutcome::Unavailable(UnavailableReason::VisionUnsupported)
    );
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_disabled_assistant_reports_not_configured() {
    let assistant = NutritionAssistant::disabled();
    assert!(!assistant.is_available());
    assert_eq!(
        assistant.analyze_food_text("banana").await,
        EstimateOutcome::Unavailable(UnavailableReason::NotConfigured)
    );
    assert!(assistant
        .suggest_meal_plan(500.0, MealType::Dinner)
        .await
        .is_empty());
}

// ============================================================================
// Suggestions
// ============================================================================

#[tokio::test]
async fn test_suggestions_are_capped_at_three() {
    let (assistant, provider) = scripted_assistant(ScriptedProvider::answering(DINNER_SUGGESTIONS));
    let suggestions = assistant.suggest_meal_plan(640.4, MealType::Dinner).await;

    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].name, "Salmon with rice");
    let prompt = &provider.requests()[0].messages[1].content;
    assert!(prompt.contains("640 kcal"));
    assert!(prompt.contains("Dinner"));
}

#[tokio::test]
async fn test_invalid_suggestions_are_dropped() {
    let answer = r#"[
        {"name": "Bad", "description": "x", "calories": -100, "protein": 1, "carbs": 1, "fat": 1, "reason": "x"},
        {"name": "Good", "description": "y", "calories": 300, "protein": 20, "carbs": 30, "fat": 10, "reason": "y"}
    ]"#;
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering(answer));
    let suggestions = assistant.suggest_meal_plan(800.0, MealType::Lunch).await;
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Good");
}

#[tokio::test]
async fn test_suggestion_failures_yield_empty_list() {
    let (assistant, _) = scripted_assistant(ScriptedProvider::failing("timeout"));
    assert!(assistant
        .suggest_meal_plan(500.0, MealType::Snack)
        .await
        .is_empty());

    let (assistant, _) = scripted_assistant(ScriptedProvider::answering("{\"not\": \"a list\"}"));
    assert!(assistant
        .suggest_meal_plan(500.0, MealType::Snack)
        .await
        .is_empty());
}

#[tokio::test]
async fn test_negative_budget_is_sent_as_zero() {
    let (assistant, provider) = scripted_assistant(ScriptedProvider::answering("[]"));
    let _ = assistant.suggest_meal_plan(-120.0, MealType::Snack).await;
    assert!(provider.requests()[0].messages[1]
        .content
        .contains(" 0 kcal"));
}

#[tokio::test]
async fn test_suggestion_converts_to_one_portion_entry() {
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering(DINNER_SUGGESTIONS));
    let suggestion = assistant
        .suggest_meal_plan(700.0, MealType::Dinner)
        .await
        .remove(1);
    let draft = suggestion.to_entry(MealType::Dinner);

    assert_eq!(draft.name, "Lentil soup");
    assert_eq!(draft.quantity, "1 portion");
    assert_eq!(draft.meal_type, MealType::Dinner);
    assert!((draft.nutrients.calories - 410.0).abs() < f64::EPSILON);
    assert!(draft.nutrients.fiber.abs() < f64::EPSILON);
}
