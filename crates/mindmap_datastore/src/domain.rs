use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a job record.
///
/// Progresses monotonically `received -> processing -> {completed, failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Received,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Received => "received",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// Whether a record currently in `self` may be moved to `next`.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Received, JobStatus::Processing)
                | (JobStatus::Processing, JobStatus::Completed)
                | (JobStatus::Processing, JobStatus::Failed)
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial update of a job record. Fields left as `None` are not sent,
/// so the store keeps whatever value it already holds for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl StatusUpdate {
    pub fn processing() -> Self {
        Self {
            status: JobStatus::Processing,
            error: None,
            markdown: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Failed,
            error: Some(error.into()),
            markdown: None,
        }
    }

    pub fn completed(markdown: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Completed,
            error: None,
            markdown: Some(markdown.into()),
        }
    }
}

/// A job record as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl JobRecord {
    /// Merges a partial update into this record, the same way the store does.
    pub fn apply(&mut self, update: &StatusUpdate) {
        self.status = update.status;
        if let Some(error) = &update.error {
            self.error = Some(error.clone());
        }
        if let Some(markdown) = &update.markdown {
            self.markdown = Some(markdown.clone());
        }
    }
}

impl From<StatusUpdate> for JobRecord {
    fn from(update: StatusUpdate) -> Self {
        JobRecord {
            status: update.status,
            error: update.error,
            markdown: update.markdown,
        }
    }
}
