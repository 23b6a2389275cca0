// ABOUTME: Tests for the session runtime executing reducer effects
// ABOUTME: End-to-end flows over an in-memory store and a scripted assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use kaloricke_ai::{
    app::{EstimateOutcomeView, Notice, Session},
    forms::ManualEntryForm,
    models::{MealType, WeightRecord},
    services::NutritionAssistant,
    storage::{KeyValueStore, MemoryStore, NutritionRepository},
};

mod common;

use common::{
    date, init_test_logging, memory_repository, reference_profile, scripted_assistant,
    FlakyStore, ScriptedProvider, BANANA_ESTIMATE, DINNER_SUGGESTIONS,
};

async fn started(repository: NutritionRepository, assistant: NutritionAssistant) -> Session {
    init_test_logging();
    let mut session = Session::new(repository, assistant, date("2025-06-10"));
    session.start().await.unwrap();
    session
}

fn lunch_form() -> ManualEntryForm {
    ManualEntryForm {
        name: "Pasta".to_owned(),
        calories: "640".to_owned(),
        protein: "22".to_owned(),
        carbs: "95,5".to_owned(),
        fat: "18".to_owned(),
        meal_type: MealType::Lunch,
        ..ManualEntryForm::default()
    }
}

#[tokio::test]
async fn test_fresh_start_uses_fallback_targets() {
    let session = started(memory_repository(), NutritionAssistant::disabled()).await;
    let state = session.state();
    assert!(state.ledger.is_empty());
    assert!(state.days_with_data.is_empty());
    assert_eq!(state.notice, Some(Notice::ConfigureProfile));
    assert!((state.targets().calories - 2000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_entries_persist_per_day() {
    let repository = memory_repository();
    let mut session = started(repository.clone(), NutritionAssistant::disabled()).await;

    let added = session
        .add_entry(lunch_form().validate().unwrap())
        .await
        .unwrap();
    assert!((added.nutrients.carbs - 95.5).abs() < f64::EPSILON);
    assert_eq!(added.quantity, "1 portion");

    session.select_date(date("2025-06-09")).await.unwrap();
    assert!(session.state().ledger.is_empty());

    session.select_date(date("2025-06-10")).await.unwrap();
    assert_eq!(session.state().ledger, vec![added.clone()]);
    assert_eq!(
        repository.load_ledger(date("2025-06-10")).await.unwrap(),
        vec![added]
    );

    // a new session discovers the day for the calendar
    let again = started(repository, NutritionAssistant::disabled()).await;
    assert!(again.state().days_with_data.contains(&date("2025-06-10")));
}

#[tokio::test]
async fn test_delete_entry_round_trip() {
    let repository = memory_repository();
    let mut session = started(repository.clone(), NutritionAssistant::disabled()).await;
    let added = session
        .add_entry(lunch_form().validate().unwrap())
        .await
        .unwrap();

    assert!(session.delete_entry(&added.id).await.unwrap());
    assert!(!session.delete_entry(&added.id).await.unwrap());
    assert!(repository
        .load_ledger(date("2025-06-10"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_unknown_meal_label_survives_resave() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            "items_2025-06-10",
            r#"[{"id":"old","name":"Eggs benedict","quantity":"1 plate","calories":520,
                 "protein":24,"carbs":30,"fat":34,"mealType":"Brunch","timestamp":1}]"#
                .to_owned(),
        )
        .await
        .unwrap();
    let repository = NutritionRepository::new(store.clone());
    let mut session = started(repository, NutritionAssistant::disabled()).await;
    assert_eq!(
        session.state().ledger[0].meal_type,
        MealType::Other("Brunch".to_owned())
    );

    let added = session
        .add_entry(lunch_form().validate().unwrap())
        .await
        .unwrap();

    let raw = store.get("items_2025-06-10").await.unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["mealType"], "Brunch");
    assert_eq!(stored[1]["mealType"], "Lunch");

    session.delete_entry(&added.id).await.unwrap();
    let raw = store.get("items_2025-06-10").await.unwrap().unwrap();
    assert!(raw.contains("\"mealType\":\"Brunch\""));
}

#[tokio::test]
async fn test_failed_write_rolls_back_state() {
    let store = Arc::new(FlakyStore::default());
    let repository = NutritionRepository::new(store.clone());
    let mut session = started(repository.clone(), NutritionAssistant::disabled()).await;
    let kept = session
        .add_entry(lunch_form().validate().unwrap())
        .await
        .unwrap();
    session.save_profile(reference_profile()).await.unwrap();

    store.set_failing(true);
    assert!(session
        .add_entry(lunch_form().validate().unwrap())
        .await
        .is_err());
    assert_eq!(session.state().ledger, vec![kept.clone()]);

    assert!(session.delete_entry(&kept.id).await.is_err());
    assert_eq!(session.state().ledger, vec![kept.clone()]);

    assert!(session
        .log_weight(WeightRecord {
            date: date("2025-06-10"),
            weight: 70.0,
        })
        .await
        .is_err());
    let profile = session.state().profile.profile().unwrap();
    assert!(profile.weight_history.is_empty());
    assert!((profile.weight - reference_profile().weight).abs() < f64::EPSILON);

    store.set_failing(false);
    assert_eq!(
        repository.load_ledger(date("2025-06-10")).await.unwrap(),
        vec![kept]
    );
}

#[tokio::test]
async fn test_profile_and_weight_persist() {
    let repository = memory_repository();
    let mut session = started(repository.clone(), NutritionAssistant::disabled()).await;

    session.save_profile(reference_profile()).await.unwrap();
    session
        .log_weight(WeightRecord {
            date: date("2025-06-10"),
            weight: 74.2,
        })
        .await
        .unwrap();

    let stored = repository.load_stored_profile().await.unwrap().unwrap();
    assert!(stored.is_configured);
    assert!((stored.weight - 74.2).abs() < f64::EPSILON);
    assert_eq!(stored.weight_history.len(), 1);

    let reopened = started(repository, NutritionAssistant::disabled()).await;
    assert!(reopened.state().profile.is_configured());
    assert!(reopened.state().notice.is_none());
}

#[tokio::test]
async fn test_estimate_confirm_logs_entry() {
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering(BANANA_ESTIMATE));
    let mut session = started(memory_repository(), assistant).await;

    let view = session.estimate_text("a banana").await.unwrap();
    let EstimateOutcomeView::Draft(draft) = view else {
        panic!("expected a draft");
    };
    assert_eq!(draft.name, "Banana");
    assert!(session.state().ledger.is_empty());

    let entry = session.confirm_estimate(MealType::Snack).await.unwrap();
    assert_eq!(entry.meal_type, MealType::Snack);
    assert!((entry.nutrients.sugar - 14.4).abs() < 1e-9);
    assert_eq!(session.state().ledger.len(), 1);
    assert!(session.state().pending_estimate.is_none());
}

#[tokio::test]
async fn test_failed_estimate_leaves_message() {
    let (assistant, _) = scripted_assistant(ScriptedProvider::answering("null"));
    let mut session = started(memory_repository(), assistant).await;

    let view = session.estimate_text("zzz").await.unwrap();
    assert!(matches!(view, EstimateOutcomeView::Unavailable(ref m) if m.contains("could not understand")));
    assert!(session.confirm_estimate(MealType::Lunch).await.is_err());
}

#[tokio::test]
async fn test_accept_suggestion_logs_and_clears() {
    let (assistant, provider) = scripted_assistant(ScriptedProvider::answering(DINNER_SUGGESTIONS));
    let mut session = started(memory_repository(), assistant).await;
    session
        .add_entry(lunch_form().validate().unwrap())
        .await
        .unwrap();

    session.request_suggestions(MealType::Dinner).await.unwrap();
    assert_eq!(session.state().suggestions.len(), 3);
    // 2000 - 640 kcal left
    assert!(provider.requests()[0].messages[1]
        .content
        .contains("1360 kcal"));

    let entry = session.accept_suggestion(2).await.unwrap().unwrap();
    assert_eq!(entry.name, "Chicken wrap");
    assert_eq!(entry.meal_type, MealType::Dinner);
    assert_eq!(entry.quantity, "1 portion");
    assert!(session.state().suggestions.is_empty());
    assert_eq!(session.state().ledger.len(), 2);

    assert!(session.accept_suggestion(0).await.unwrap().is_none());
}
