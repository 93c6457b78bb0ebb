//! Backend that appends submissions to a local JSON-lines file
//!
//! Each line is one record `{ id, submitted_at, fields }`, ready to be picked
//! up by whatever forwards messages to the studio's inbox.

use super::Submitter;
use crate::contact::FormPayload;
use crate::error::SubmissionError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Environment variable overriding the outbox location
pub const OUTBOX_ENV: &str = "STUDIO_TUI_OUTBOX";

/// One stored submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub fields: FormPayload,
}

/// Appends each submission as a JSON line
#[derive(Debug, Clone)]
pub struct OutboxBackend {
    path: PathBuf,
}

impl OutboxBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Submitter for OutboxBackend {
    async fn submit(&self, fields: &FormPayload) -> Result<(), SubmissionError> {
        let record = OutboxRecord {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fields: fields.clone(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(id = %record.id, path = %self.path.display(), "submission stored in outbox");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload(name: &str) -> FormPayload {
        let mut fields = FormPayload::new();
        fields.insert("name".to_string(), name.to_string());
        fields.insert("email".to_string(), "a@b.co".to_string());
        fields
    }

    #[tokio::test]
    async fn test_appends_one_line_per_submission() {
        let dir = tempfile::tempdir().unwrap();
        let backend = OutboxBackend::new(dir.path().join("nested").join("outbox.jsonl"));

        backend.submit(&payload("Alice")).await.unwrap();
        backend.submit(&payload("Bob")).await.unwrap();

        let content = std::fs::read_to_string(backend.path()).unwrap();
        let records: Vec<OutboxRecord> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields, payload("Alice"));
        assert_eq!(records[1].fields, payload("Bob"));
        assert_ne!(records[0].id, records[1].id);
    }

    #[tokio::test]
    async fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // The directory itself cannot be opened as a file for appending
        let backend = OutboxBackend::new(dir.path());

        let result = backend.submit(&payload("Alice")).await;

        assert!(matches!(result, Err(SubmissionError::Io(_))));
    }
}
