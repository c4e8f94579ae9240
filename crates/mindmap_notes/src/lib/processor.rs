pub mod builder;

use itertools::Itertools;
use mindmap_datastore::{JobStatus, StatusStore, StatusUpdate};

use crate::{
    error::Error,
    llm::{notes::build_note, segmenter::segment_transcript, TextGenerator},
    types::{JobRequest, JobSummary, Passage},
    yt::{TranscriptFetcher, VideoId},
};

/// Separator placed between consecutive notes in the final document.
pub const NOTE_SEPARATOR: &str = "\n\n---\n\n";

/// Job-level failures. The `Display` text is what gets persisted in the
/// record's `error` field and returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Failed to get transcript")]
    Transcript(#[source] Error),
    #[error("Failed to segment transcript")]
    Segmentation(#[source] Error),
    #[error("No segments were successfully processed")]
    NoSegmentsProcessed,
    #[error("Failed to update job status")]
    StatusStore(String),
    #[error("Refusing status transition {from} -> {to}")]
    InvalidTransition { from: JobStatus, to: JobStatus },
}

// Turns a video into Markdown study notes, one job at a time
#[derive(Debug)]
pub struct NotesProcessor<D, F, G>
where
    D: StatusStore + Send + Sync + 'static,
    F: TranscriptFetcher + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    store: D,
    transcript_fetcher: F,
    generator: G,
}

impl<D, F, G> NotesProcessor<D, F, G>
where
    D: StatusStore + Send + Sync + 'static,
    F: TranscriptFetcher + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    pub fn store(&self) -> &D {
        &self.store
    }

    /// Runs one job to a terminal state, persisting every transition.
    ///
    /// The record is moved to `processing` before any external call. Stage
    /// failures are persisted as `failed` with the job error's message;
    /// success persists `completed` together with the final document.
    #[tracing::instrument(skip_all, fields(request_id = %request.request_id))]
    pub async fn process(&self, request: &JobRequest) -> Result<JobSummary, JobError> {
        let mut reporter = StatusReporter::new(&self.store, &request.request_id);

        reporter.advance(StatusUpdate::processing()).await?;

        match self.run_stages(&request.video_url).await {
            Ok(summary) => {
                reporter
                    .advance(StatusUpdate::completed(summary.markdown.as_str()))
                    .await?;
                tracing::info!(
                    passages = summary.passages,
                    notes = summary.notes,
                    "Job completed"
                );
                Ok(summary)
            }
            Err(job_error) => {
                tracing::error!(error = ?job_error, "Job failed");
                reporter
                    .advance(StatusUpdate::failed(job_error.to_string()))
                    .await?;
                Err(job_error)
            }
        }
    }

    async fn run_stages(&self, video_url: &str) -> Result<JobSummary, JobError> {
        let transcript = self
            .fetch_transcript(video_url)
            .await
            .map_err(JobError::Transcript)?;

        let passages = segment_transcript(&self.generator, &transcript)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to segment transcript"))
            .map_err(JobError::Segmentation)?;

        let notes = self.build_notes(&passages).await;
        if notes.is_empty() {
            return Err(JobError::NoSegmentsProcessed);
        }

        Ok(JobSummary {
            passages: passages.len(),
            notes: notes.len(),
            markdown: notes.iter().join(NOTE_SEPARATOR),
        })
    }

    /// Extracts the video id from `video_url` and fetches its captions
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_url: &str) -> Result<String, Error> {
        let video_id = VideoId::extract(video_url)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to extract video id"))?;

        let transcript = self
            .transcript_fetcher
            .fetch_transcript(&video_id)
            .await
            .map_err(|e| Error::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })
            .inspect_err(|e| {
                tracing::error!(error = %e, provider = F::PROVIDER, "Failed to fetch transcript")
            })?;

        tracing::info!(%video_id, chars = transcript.len(), "Fetched transcript");
        Ok(transcript)
    }

    /// Builds notes for `passages` in order, dropping the ones that fail.
    #[tracing::instrument(skip_all, fields(passages = passages.len()))]
    async fn build_notes(&self, passages: &[Passage]) -> Vec<String> {
        let mut notes = Vec::with_capacity(passages.len());

        for passage in passages {
            match build_note(&self.generator, passage).await {
                Ok(note) => notes.push(note),
                Err(e) => tracing::warn!(error = %e, "Skipping passage"),
            }
        }

        notes
    }
}

/// Writes status updates for one job, refusing anything that would move the
/// record backwards or out of a terminal state.
struct StatusReporter<'a, D> {
    store: &'a D,
    request_id: &'a str,
    current: JobStatus,
}

impl<'a, D: StatusStore + Send + Sync> StatusReporter<'a, D> {
    fn new(store: &'a D, request_id: &'a str) -> Self {
        Self {
            store,
            request_id,
            current: JobStatus::Received,
        }
    }

    async fn advance(&mut self, update: StatusUpdate) -> Result<(), JobError> {
        if !self.current.can_transition_to(update.status) {
            return Err(JobError::InvalidTransition {
                from: self.current,
                to: update.status,
            });
        }

        self.store
            .update_status(self.request_id, &update)
            .await
            .inspect_err(|e| {
                tracing::error!(error = ?e, status = %update.status, "Failed to update job status")
            })
            .map_err(|e| JobError::StatusStore(format!("{e:#}")))?;

        self.current = update.status;
        Ok(())
    }
}
