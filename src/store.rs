use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::{ContactPayload, Submission};

/// Durable append-only store for submissions, backed by a single JSON file
/// holding the full list. Every append is a read-modify-write of the whole
/// file, serialized behind a mutex so concurrent appends cannot lose records.
pub struct SubmissionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubmissionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Append a submission built from the payload's fields, stamped with the
    /// current time. Fields are copied verbatim; append does not re-validate,
    /// so absent fields persist as null.
    pub async fn append(&self, payload: &ContactPayload) -> Result<Submission, StoreError> {
        let _guard = self.lock.lock().await;

        let mut submissions = self.read_file().await?;

        let submission = Submission {
            timestamp: Utc::now(),
            name: payload.name.clone(),
            email: payload.email.clone(),
            subject: payload.subject.clone(),
            message: payload.message.clone(),
        };
        submissions.push(submission.clone());

        let json = serde_json::to_string_pretty(&submissions).map_err(StoreError::Corrupt)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(StoreError::Io)?;

        Ok(submission)
    }

    /// Return the full persisted list, in insertion order. An absent data
    /// file is an empty list, not an error.
    pub async fn load_all(&self) -> Result<Vec<Submission>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_file().await
    }

    async fn read_file(&self) -> Result<Vec<Submission>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_slice(&bytes).map_err(StoreError::Corrupt)
    }
}
