// ABOUTME: File-backed key-value store writing one JSON file per key
// ABOUTME: Writes go through a temporary file and a rename so readers never see partial values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::KeyValueStore;
use crate::constants::storage_keys::FILE_EXTENSION;
use crate::errors::{AppError, AppResult};

/// Store rooted at a data directory; key `k` lives in `<root>/k.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub async fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::storage(format!("cannot create data directory {}", root.display()))
                .with_source(e)
        })?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::invalid_input(format!(
                "storage key '{key}' contains unsupported characters"
            )));
        }
        Ok(self.root.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("cannot read {}", path.display())).with_source(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        fs::write(&tmp, value).await.map_err(|e| {
            AppError::storage(format!("cannot write {}", tmp.display())).with_source(e)
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::storage(format!("cannot replace {}", path.display())).with_source(e)
        })
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(AppError::storage(format!("cannot delete {}", path.display())).with_source(e))
            }
        }
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        let mut dir = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::storage(format!("cannot list {}", self.root.display())).with_source(e)
        })?;

        let mut keys = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                keys.push(stem.to_owned());
            }
        }
        Ok(keys)
    }
}
