mod error;
mod llm;
pub mod parser;
mod processor;
pub mod server;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::{gemini, notes::build_note, segmenter::segment_transcript, TextGenerator};
pub use processor::{builder::NotesProcessorBuilder, JobError, NotesProcessor, NOTE_SEPARATOR};
pub use types::{JobRequest, JobSummary, Passage};
