pub mod transcript;

use std::{fmt, future::Future, ops::Deref, sync::LazyLock};

use regex::Regex;

use crate::error::Error;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());

/// A YouTube video identifier, always 11 characters of `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Extracts the identifier following the first `v=` marker or path separator
    /// in `reference`, e.g. `https://www.youtube.com/watch?v=dQw4w9WgXcQ` or
    /// `https://youtu.be/dQw4w9WgXcQ`.
    pub fn extract(reference: &str) -> Result<Self, Error> {
        VIDEO_ID_RE
            .captures(reference)
            .and_then(|cap| cap.get(1))
            .map(|m| VideoId(m.as_str().to_string()))
            .ok_or_else(|| Error::Extraction(reference.to_string()))
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait TranscriptFetcher {
    const PROVIDER: &'static str;

    type Error: fmt::Display;

    /// Returns the whole caption track of `video_id` as one space-joined string.
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
