use itertools::Itertools;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::yt::{TranscriptFetcher, VideoId};

/// Caption fetcher backed by YouTube's public transcript endpoints.
pub struct YtTranscriptFetcher {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YtTranscriptFetcher {
    /// `languages` is the caption preference order, e.g. `["en"]`.
    pub fn new(languages: Vec<String>) -> anyhow::Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| anyhow::anyhow!("Failed to initialise transcript api: {e}"))?;

        Ok(Self { api, languages })
    }
}

impl TranscriptFetcher for YtTranscriptFetcher {
    const PROVIDER: &'static str = "youtube";

    type Error = anyhow::Error;

    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<String, Self::Error> {
        let languages = self.languages.iter().map(String::as_str).collect::<Vec<_>>();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        tracing::debug!(
            %video_id,
            language = %transcript.language_code,
            snippets = transcript.snippets.len(),
            "Fetched transcript"
        );

        Ok(transcript
            .snippets
            .iter()
            .map(|snippet| snippet.text.as_str())
            .join(" "))
    }
}
