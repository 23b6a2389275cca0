// ABOUTME: Key-value persistence abstraction with pluggable backends
// ABOUTME: Raw JSON blobs per key; typed access lives in NutritionRepository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Flat key layout:
//!
//! - `profile` - the user profile (singleton)
//! - `items_YYYY-MM-DD` - the ledger of one day, a JSON array of entries
//!
//! There are no transactions; the last write to a key wins.

/// Backend selection from configuration
pub mod factory;
/// File-backed store, one JSON file per key
pub mod file;
/// In-memory store
pub mod memory;
/// Typed access to profile and ledgers
pub mod repository;

pub use factory::open_store;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::NutritionRepository;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::constants::storage_keys::{DATE_FORMAT, ITEMS_PREFIX};
use crate::errors::AppResult;

/// Key-value store holding serialized JSON values
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Read a value; `None` when the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete a key; deleting an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// List every stored key, in no particular order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated
    async fn keys(&self) -> AppResult<Vec<String>>;
}

/// Ledger key of a date
#[must_use]
pub fn items_key(date: NaiveDate) -> String {
    format!("{ITEMS_PREFIX}{}", date.format(DATE_FORMAT))
}

/// Date of a ledger key; `None` for other keys or malformed dates
#[must_use]
pub fn parse_items_key(key: &str) -> Option<NaiveDate> {
    key.strip_prefix(ITEMS_PREFIX)
        .and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())
}
