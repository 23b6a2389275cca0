// ABOUTME: Tests for the key-value stores and the typed nutrition repository
// ABOUTME: Memory and file backends, key layout, persistence round trips and corrupt values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use kaloricke_ai::{
    config::{AppConfig, StorageBackend},
    models::{MealType, ProfileState, UserProfile, WeightRecord},
    storage::{open_store, FileStore, KeyValueStore, MemoryStore, NutritionRepository},
};
use tempfile::TempDir;

mod common;

use common::{date, entry, init_test_logging, reference_profile};

// ============================================================================
// Backends
// ============================================================================

async fn exercise_backend(store: &dyn KeyValueStore) {
    assert_eq!(store.get("profile").await.unwrap(), None);

    store.set("profile", "{}".to_owned()).await.unwrap();
    store.set("items_2025-01-02", "[]".to_owned()).await.unwrap();
    assert_eq!(store.get("profile").await.unwrap().as_deref(), Some("{}"));

    store.set("profile", "{\"age\":1}".to_owned()).await.unwrap();
    assert_eq!(
        store.get("profile").await.unwrap().as_deref(),
        Some("{\"age\":1}")
    );

    let mut keys = store.keys().await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["items_2025-01-02", "profile"]);

    store.remove("profile").await.unwrap();
    store.remove("profile").await.unwrap();
    assert_eq!(store.get("profile").await.unwrap(), None);
}

#[tokio::test]
async fn test_memory_store_contract() {
    let store = MemoryStore::new();
    exercise_backend(&store).await;
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_file_store_contract() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("data")).await.unwrap();
    exercise_backend(&store).await;
    assert!(dir.path().join("data").join("items_2025-01-02.json").exists());
}

#[tokio::test]
async fn test_file_store_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    assert!(store.set("../escape", "x".to_owned()).await.is_err());
    assert!(store.get("a/b").await.is_err());
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let day = date("2025-03-14");
    {
        let repo = NutritionRepository::new(Arc::new(FileStore::open(dir.path()).await.unwrap()));
        repo.save_ledger(day, &[entry("1", MealType::Lunch, 500.0, 30.0, 50.0, 15.0)])
            .await
            .unwrap();
    }
    let repo = NutritionRepository::new(Arc::new(FileStore::open(dir.path()).await.unwrap()));
    assert_eq!(repo.load_ledger(day).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_factory_selects_backend() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        storage: StorageBackend::Memory,
        ..AppConfig::default()
    };
    assert_eq!(open_store(&config).await.unwrap().name(), "memory");

    let config = AppConfig {
        storage: StorageBackend::File,
        ..config
    };
    assert_eq!(open_store(&config).await.unwrap().name(), "file");
}

// ============================================================================
// Repository
// ============================================================================

#[tokio::test]
async fn test_ledger_round_trip_keeps_order_and_fields() {
    let repo = common::memory_repository();
    let day = date("2025-01-15");
    let mut first = entry("1", MealType::Breakfast, 300.0, 12.0, 40.0, 9.0);
    first.nutrients.fiber = 4.5;
    first.nutrients.saturated_fat = 2.0;
    let ledger = vec![first, entry("2", MealType::Dinner, 650.0, 40.0, 55.0, 24.0)];

    repo.save_ledger(day, &ledger).await.unwrap();
    assert_eq!(repo.load_ledger(day).await.unwrap(), ledger);
    assert!(repo.load_ledger(date("2025-01-16")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ledger_uses_items_key_and_camel_case() {
    let store = Arc::new(MemoryStore::new());
    let repo = NutritionRepository::new(store.clone());
    repo.save_ledger(
        date("2025-01-15"),
        &[entry("1", MealType::Snack, 100.0, 1.0, 2.0, 3.0)],
    )
    .await
    .unwrap();

    let raw = store.get("items_2025-01-15").await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["mealType"], "Snack");
    assert!(value[0].get("saturatedFat").is_some());
}

#[tokio::test]
async fn test_profile_round_trip() {
    let repo = common::memory_repository();
    assert_eq!(repo.load_profile().await.unwrap(), ProfileState::Unconfigured);

    let mut profile = reference_profile();
    profile.log_weight(WeightRecord {
        date: date("2025-01-01"),
        weight: 76.0,
    });
    repo.save_profile(&profile).await.unwrap();

    assert_eq!(repo.load_stored_profile().await.unwrap(), Some(profile.clone()));
    assert_eq!(
        repo.load_profile().await.unwrap(),
        ProfileState::Configured(profile)
    );
}

#[tokio::test]
async fn test_saved_defaults_stay_unconfigured() {
    let repo = common::memory_repository();
    repo.save_profile(&UserProfile::default()).await.unwrap();
    assert!(!repo.load_profile().await.unwrap().is_configured());
}

#[tokio::test]
async fn test_corrupt_values_read_as_absent() {
    init_test_logging();
    let store = Arc::new(MemoryStore::new());
    store.set("profile", "not json".to_owned()).await.unwrap();
    store
        .set("items_2025-02-01", "{\"broken\":".to_owned())
        .await
        .unwrap();
    let repo = NutritionRepository::new(store);

    assert_eq!(repo.load_profile().await.unwrap(), ProfileState::Unconfigured);
    assert!(repo.load_ledger(date("2025-02-01")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_days_with_data_skips_empty_and_foreign_keys() {
    let store = Arc::new(MemoryStore::new());
    let repo = NutritionRepository::new(store.clone());
    repo.save_ledger(
        date("2025-01-03"),
        &[entry("1", MealType::Lunch, 1.0, 0.0, 0.0, 0.0)],
    )
    .await
    .unwrap();
    repo.save_ledger(date("2025-01-04"), &[]).await.unwrap();
    repo.save_profile(&reference_profile()).await.unwrap();
    store.set("items_garbage", "[]".to_owned()).await.unwrap();

    let days: Vec<_> = repo.days_with_data().await.unwrap().into_iter().collect();
    assert_eq!(days, vec![date("2025-01-03")]);
}
