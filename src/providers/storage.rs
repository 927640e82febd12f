//! Match persistence
//!
//! One pretty-printed JSON file per match at `<root>/<category>/<filename>`.
//! The category directory is checked on every save, so a directory moved
//! away mid-run is recreated. `create_dir_all` tolerates one that already
//! exists, including one created concurrently by another worker.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Account, Classification};

/// Append-only store of matched accounts
#[derive(Clone)]
pub struct MatchStore {
    root: PathBuf,
}

impl MatchStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make sure `<root>/<category>` exists; idempotent
    pub async fn ensure_category(&self, category: &str) -> AppResult<PathBuf> {
        let dir = self.root.join(category);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::storage(format!("cannot create {}", dir.display()), e)
        })?;
        debug!("📁 Category directory ready: {}", dir.display());

        Ok(dir)
    }

    /// Write the account under its classification; returns the file path
    pub async fn save(&self, class: &Classification, account: &Account) -> AppResult<PathBuf> {
        let dir = self.ensure_category(&class.category).await?;
        let path = dir.join(&class.filename);

        let json = serde_json::to_string_pretty(account)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| AppError::storage(format!("cannot write {}", path.display()), e))?;

        Ok(path)
    }
}
