// ABOUTME: Typed persistence for user profile and per-day ledgers on top of a key-value store
// ABOUTME: Unparseable stored values are logged and read as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::{items_key, parse_items_key, KeyValueStore};
use crate::constants::storage_keys::PROFILE;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{FoodEntry, ProfileState, UserProfile};

/// Profile and ledger access
///
/// Profile and ledger writes are independent; no operation spans both.
#[derive(Clone)]
pub struct NutritionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl NutritionRepository {
    /// Wrap a store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Underlying store
    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(
                    storage.backend = self.store.name(),
                    storage.key = %key,
                    error = %e,
                    "Stored value could not be parsed, treating as absent"
                );
                Ok(None)
            }
        }
    }

    async fn write_json<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        let result = self.store.set(key, raw).await;
        AppLogger::log_storage_operation("set", key, result.is_ok());
        result
    }

    /// Entries logged on a date, in insertion order; empty when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn load_ledger(&self, date: NaiveDate) -> AppResult<Vec<FoodEntry>> {
        Ok(self
            .read_json::<Vec<FoodEntry>>(&items_key(date))
            .await?
            .unwrap_or_default())
    }

    /// Replace the ledger of a date
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn save_ledger(&self, date: NaiveDate, entries: &[FoodEntry]) -> AppResult<()> {
        self.write_json(&items_key(date), entries).await
    }

    /// Stored profile regardless of its configured flag
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn load_stored_profile(&self) -> AppResult<Option<UserProfile>> {
        self.read_json(PROFILE).await
    }

    /// Profile state used for goal calculation
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn load_profile(&self) -> AppResult<ProfileState> {
        Ok(ProfileState::from_stored(self.load_stored_profile().await?))
    }

    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.write_json(PROFILE, profile).await
    }

    /// Dates whose stored ledger has at least one entry
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated or read
    pub async fn days_with_data(&self) -> AppResult<BTreeSet<NaiveDate>> {
        let mut days = BTreeSet::new();
        for key in self.store.keys().await? {
            let Some(date) = parse_items_key(&key) else {
                continue;
            };
            if !self.load_ledger(date).await?.is_empty() {
                days.insert(date);
            }
        }
        Ok(days)
    }
}
