// ABOUTME: Store factory for configuration-based backend selection
// ABOUTME: Returns a shared trait object so callers stay backend agnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::info;

use super::{FileStore, KeyValueStore, MemoryStore};
use crate::config::{AppConfig, StorageBackend};
use crate::errors::AppResult;

/// Open the store selected by configuration
///
/// # Errors
///
/// Returns an error if the file store directory cannot be created
pub async fn open_store(config: &AppConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    match config.storage {
        StorageBackend::File => {
            info!(data_dir = %config.data_dir.display(), "Initializing file store");
            Ok(Arc::new(FileStore::open(&config.data_dir).await?))
        }
        StorageBackend::Memory => {
            info!("Initializing in-memory store; data will not persist");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
