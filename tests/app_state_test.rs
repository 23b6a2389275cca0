// ABOUTME: Tests for the pure application reducer
// ABOUTME: Date navigation, ledger edits, profile saves, stale AI responses and estimate review
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kaloricke_ai::{
    app::{update, Action, AppState, Effect, EstimateInput, Notice},
    intelligence::BudgetMessage,
    models::{MealType, ProfileState, UserProfile, WeightRecord},
    services::{EstimateOutcome, MealSuggestion, NutrientEstimate, UnavailableReason},
};

mod common;

use common::{date, entry, reference_profile};

fn state() -> AppState {
    AppState::new(date("2025-05-20"))
}

fn suggestion(name: &str) -> MealSuggestion {
    MealSuggestion {
        name: name.to_owned(),
        description: "desc".to_owned(),
        calories: 400.0,
        protein: 30.0,
        carbs: 40.0,
        fat: 12.0,
        reason: "fits".to_owned(),
    }
}

fn estimate() -> NutrientEstimate {
    NutrientEstimate {
        food_name: "Apple".to_owned(),
        quantity_description: "1 piece".to_owned(),
        calories: 95.0,
        protein_g: 0.5,
        carbs_g: 25.0,
        fat_g: 0.3,
        fiber_g: 4.4,
        sugar_g: 19.0,
        saturated_fat_g: 0.0,
        confidence_score: 0.9,
    }
}

// ============================================================================
// Initialization and navigation
// ============================================================================

#[test]
fn test_initialize_loads_everything() {
    let mut s = state();
    let effects = update(&mut s, Action::Initialize);
    assert_eq!(
        effects,
        vec![
            Effect::LoadProfile,
            Effect::LoadLedger(date("2025-05-20")),
            Effect::LoadDaysWithData,
        ]
    );
}

#[test]
fn test_absent_profile_prompts_configuration() {
    let mut s = state();
    let _ = update(&mut s, Action::ProfileLoaded(None));
    assert_eq!(s.profile, ProfileState::Unconfigured);
    assert_eq!(s.editable_profile, UserProfile::default());
    assert_eq!(s.notice, Some(Notice::ConfigureProfile));
    assert!((s.targets().calories - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn test_date_change_clears_suggestions_and_reloads() {
    let mut s = state();
    let _ = update(&mut s, Action::RequestSuggestions(MealType::Lunch));
    let generation = s.suggestion_generation();
    let _ = update(
        &mut s,
        Action::SuggestionsReceived {
            generation,
            suggestions: vec![suggestion("Soup")],
        },
    );
    let _ = update(
        &mut s,
        Action::LedgerLoaded {
            date: date("2025-05-20"),
            entries: vec![entry("1", MealType::Lunch, 500.0, 20.0, 60.0, 15.0)],
        },
    );

    let effects = update(&mut s, Action::PreviousDay);
    assert_eq!(s.selected_date, date("2025-05-19"));
    assert!(s.suggestions.is_empty());
    assert!(s.ledger.is_empty());
    assert_eq!(effects, vec![Effect::LoadLedger(date("2025-05-19"))]);
    assert!(!s.is_viewing_today());

    let _ = update(&mut s, Action::GoToToday);
    assert!(s.is_viewing_today());
    let _ = update(&mut s, Action::NextDay);
    assert_eq!(s.selected_date, date("2025-05-21"));
}

#[test]
fn test_ledger_for_another_day_is_ignored() {
    let mut s = state();
    let _ = update(&mut s, Action::SelectDate(date("2025-05-01")));
    let _ = update(
        &mut s,
        Action::LedgerLoaded {
            date: date("2025-05-20"),
            entries: vec![entry("1", MealType::Lunch, 500.0, 20.0, 60.0, 15.0)],
        },
    );
    assert!(s.ledger.is_empty());
}

// ============================================================================
// Ledger edits
// ============================================================================

#[test]
fn test_add_entry_saves_whole_ledger() {
    let mut s = state();
    let first = entry("1", MealType::Breakfast, 300.0, 10.0, 40.0, 8.0);
    let second = entry("2", MealType::Dinner, 700.0, 40.0, 60.0, 25.0);
    let _ = update(&mut s, Action::AddEntry(first.clone()));
    let effects = update(&mut s, Action::AddEntry(second.clone()));

    assert_eq!(
        effects,
        vec![Effect::SaveLedger {
            date: date("2025-05-20"),
            entries: vec![first, second],
        }]
    );
    assert!(s.days_with_data.contains(&date("2025-05-20")));
    assert!((s.stats().current.calories - 1000.0).abs() < f64::EPSILON);
    assert_eq!(s.budget_message(), BudgetMessage::Remaining(1000));
}

#[test]
fn test_delete_entry() {
    let mut s = state();
    let _ = update(
        &mut s,
        Action::AddEntry(entry("1", MealType::Lunch, 500.0, 20.0, 60.0, 15.0)),
    );

    let effects = update(&mut s, Action::DeleteEntry("1".to_owned()));
    assert!(s.ledger.is_empty());
    assert!(!s.days_with_data.contains(&date("2025-05-20")));
    assert_eq!(
        effects,
        vec![Effect::SaveLedger {
            date: date("2025-05-20"),
            entries: vec![],
        }]
    );
}

#[test]
fn test_delete_unknown_entry_writes_nothing() {
    let mut s = state();
    let effects = update(&mut s, Action::DeleteEntry("missing".to_owned()));
    assert!(effects.is_empty());
    assert_eq!(s.notice, Some(Notice::EntryNotFound("missing".to_owned())));
}

// ============================================================================
// Profile
// ============================================================================

#[test]
fn test_save_profile_switches_targets() {
    let mut s = state();
    let profile = reference_profile();
    let effects = update(&mut s, Action::SaveProfile(profile.clone()));

    assert_eq!(effects, vec![Effect::SaveProfile(profile)]);
    assert!(s.profile.is_configured());
    assert!((s.targets().calories - 2633.0).abs() < f64::EPSILON);
    assert_eq!(s.notice, Some(Notice::ProfileSaved));
}

#[test]
fn test_log_weight_updates_current_weight_only_for_latest_date() {
    let mut s = state();
    let _ = update(&mut s, Action::ProfileLoaded(Some(reference_profile())));

    let _ = update(
        &mut s,
        Action::LogWeight(WeightRecord {
            date: date("2025-05-10"),
            weight: 74.0,
        }),
    );
    assert!((s.editable_profile.weight - 74.0).abs() < f64::EPSILON);

    let effects = update(
        &mut s,
        Action::LogWeight(WeightRecord {
            date: date("2025-05-01"),
            weight: 76.5,
        }),
    );
    assert!((s.editable_profile.weight - 74.0).abs() < f64::EPSILON);
    assert_eq!(s.editable_profile.weight_history.len(), 2);
    assert!(matches!(effects.as_slice(), [Effect::SaveProfile(p)] if p.weight_history.len() == 2));
}

// ============================================================================
// AI requests
// ============================================================================

#[test]
fn test_suggestion_request_carries_remaining_budget() {
    let mut s = state();
    let _ = update(
        &mut s,
        Action::AddEntry(entry("1", MealType::Lunch, 1500.0, 20.0, 60.0, 15.0)),
    );
    let effects = update(&mut s, Action::RequestSuggestions(MealType::Dinner));

    assert!(s.suggestions_loading);
    assert_eq!(
        effects,
        vec![Effect::FetchSuggestions {
            generation: s.suggestion_generation(),
            remaining_calories: 500.0,
            meal_type: MealType::Dinner,
        }]
    );
}

#[test]
fn test_stale_suggestions_are_ignored() {
    let mut s = state();
    let _ = update(&mut s, Action::RequestSuggestions(MealType::Lunch));
    let first = s.suggestion_generation();
    let _ = update(&mut s, Action::RequestSuggestions(MealType::Dinner));
    let second = s.suggestion_generation();
    assert!(second > first);

    let _ = update(
        &mut s,
        Action::SuggestionsReceived {
            generation: second,
            suggestions: vec![suggestion("Fresh")],
        },
    );
    let _ = update(
        &mut s,
        Action::SuggestionsReceived {
            generation: first,
            suggestions: vec![suggestion("Stale")],
        },
    );

    assert_eq!(s.suggestions.len(), 1);
    assert_eq!(s.suggestions[0].name, "Fresh");
    assert_eq!(s.suggestion_meal, Some(MealType::Dinner));
    assert!(!s.suggestions_loading);
}

#[test]
fn test_suggestions_arriving_after_date_change_are_dropped() {
    let mut s = state();
    let _ = update(&mut s, Action::RequestSuggestions(MealType::Lunch));
    let generation = s.suggestion_generation();
    let _ = update(&mut s, Action::NextDay);
    let _ = update(
        &mut s,
        Action::SuggestionsReceived {
            generation,
            suggestions: vec![suggestion("Late")],
        },
    );
    assert!(s.suggestions.is_empty());
}

#[test]
fn test_empty_suggestions_show_notice() {
    let mut s = state();
    let _ = update(&mut s, Action::RequestSuggestions(MealType::Snack));
    let generation = s.suggestion_generation();
    let _ = update(
        &mut s,
        Action::SuggestionsReceived {
            generation,
            suggestions: Vec::new(),
        },
    );
    assert_eq!(s.notice, Some(Notice::NoSuggestions));
}

#[test]
fn test_adding_suggestion_clears_suggestions() {
    let mut s = state();
    let _ = update(&mut s, Action::RequestSuggestions(MealType::Dinner));
    let generation = s.suggestion_generation();
    let _ = update(
        &mut s,
        Action::SuggestionsReceived {
            generation,
            suggestions: vec![suggestion("A"), suggestion("B")],
        },
    );

    let effects = update(
        &mut s,
        Action::AddSuggestion(entry("s1", MealType::Dinner, 400.0, 30.0, 40.0, 12.0)),
    );
    assert!(s.suggestions.is_empty());
    assert_eq!(s.ledger.len(), 1);
    assert_eq!(effects.len(), 1);
}

#[test]
fn test_estimate_review_flow() {
    let mut s = state();
    let effects = update(
        &mut s,
        Action::RequestEstimate(EstimateInput::Text("apple".to_owned())),
    );
    let generation = s.estimate_generation();
    assert_eq!(
        effects,
        vec![Effect::FetchEstimate {
            generation,
            input: EstimateInput::Text("apple".to_owned()),
        }]
    );

    let _ = update(
        &mut s,
        Action::EstimateReceived {
            generation,
            outcome: EstimateOutcome::Estimate(estimate()),
        },
    );
    let draft = s.pending_estimate.clone().unwrap();
    assert_eq!(draft.name, "Apple");
    assert!(s.ledger.is_empty(), "estimates are never logged without review");

    let mut edited = draft;
    edited.name = "Green apple".to_owned();
    let _ = update(&mut s, Action::EditEstimate(edited));
    assert_eq!(s.pending_estimate.as_ref().unwrap().name, "Green apple");

    let _ = update(
        &mut s,
        Action::ConfirmEstimate(entry("e1", MealType::Snack, 95.0, 0.5, 25.0, 0.3)),
    );
    assert!(s.pending_estimate.is_none());
    assert_eq!(s.ledger.len(), 1);
}

#[test]
fn test_stale_estimate_is_ignored_and_failure_noticed() {
    let mut s = state();
    let _ = update(
        &mut s,
        Action::RequestEstimate(EstimateInput::Text("first".to_owned())),
    );
    let stale = s.estimate_generation();
    let _ = update(
        &mut s,
        Action::RequestEstimate(EstimateInput::Text("second".to_owned())),
    );
    let current = s.estimate_generation();

    let _ = update(
        &mut s,
        Action::EstimateReceived {
            generation: stale,
            outcome: EstimateOutcome::Estimate(estimate()),
        },
    );
    assert!(s.pending_estimate.is_none());
    assert!(s.estimate_loading);

    let _ = update(
        &mut s,
        Action::EstimateReceived {
            generation: current,
            outcome: EstimateOutcome::Unavailable(UnavailableReason::NotRecognized),
        },
    );
    assert!(!s.estimate_loading);
    assert_eq!(
        s.notice,
        Some(Notice::EstimateUnavailable(UnavailableReason::NotRecognized))
    );

    let _ = update(&mut s, Action::DismissNotice);
    assert!(s.notice.is_none());
}
