//! File-backed talker storage.
//!
//! The data file is the only source of truth: every call reads it in full and
//! `create` rewrites it in full. Stored records are kept as raw JSON so
//! whatever the file holds is served and written back untouched. There is no
//! locking, so concurrent creates race on the read-modify-write cycle and the
//! last writer wins.

use serde_json::Value;
use service_core::error::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::{NewTalker, Talker};

#[derive(Debug, Clone)]
pub struct TalkerRepository {
    path: PathBuf,
}

impl TalkerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored record. Missing, unreadable, corrupt or non-array files yield an empty list.
    pub async fn load_all(&self) -> Vec<Value> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read talker data file"
                );
                return Vec::new();
            }
        };

        tracing::debug!(path = %self.path.display(), content = %raw, "Talker data file read");

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(talkers) => {
                tracing::debug!(count = talkers.len(), "Talker data parsed");
                talkers
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to parse talker data file"
                );
                Vec::new()
            }
        }
    }

    pub async fn find_by_id(&self, id: u64) -> Option<Value> {
        self.load_all()
            .await
            .into_iter()
            .find(|t| t.get("id").and_then(Value::as_u64) == Some(id))
    }

    /// Appends a talker with `id = count + 1` and persists the whole list.
    pub async fn create(&self, new_talker: NewTalker) -> Result<Talker, AppError> {
        let mut talkers = self.load_all().await;
        let talker = new_talker.with_id(talkers.len() as u64 + 1);
        talkers.push(serde_json::to_value(&talker)?);

        let body = serde_json::to_string_pretty(&talkers)?;
        fs::write(&self.path, body).await.map_err(|e| {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Failed to write talker data file"
            );
            AppError::from(e)
        })?;

        tracing::info!(talker_id = talker.id, name = %talker.name, "Talker created");

        Ok(talker)
    }
}
