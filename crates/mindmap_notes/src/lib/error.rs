/// Stage-level failures of the notes pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not extract a video id from {0:?}")]
    Extraction(String),
    #[error("Transcript unavailable for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },
    #[error("Segmentation failed: {0}")]
    Segmentation(String),
    #[error("Malformed passage: {0}")]
    MalformedPassage(&'static str),
    #[error("Note generation failed for passage {title:?}: {reason}")]
    NoteGeneration { title: String, reason: String },
}
