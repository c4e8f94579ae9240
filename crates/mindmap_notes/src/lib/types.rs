use serde::{Deserialize, Serialize};

/// One titled segment of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub title: String,
    pub content: String,
}

impl Passage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Payload of an inbound "process job" request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub request_id: String,
    pub video_url: String,
}

/// Outcome of a completed job.
#[derive(Debug, Clone)]
pub struct JobSummary {
    /// Passages the transcript was segmented into.
    pub passages: usize,
    /// Notes that made it into the final document.
    pub notes: usize,
    pub markdown: String,
}
