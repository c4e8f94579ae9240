use crate::{
    error::Error,
    llm::{render_prompt, TextGenerator},
    parser::parse_passages,
    types::Passage,
};

const SEGMENT_PROMPT: &str = include_str!("./prompts/segment.txt");

pub fn segmentation_prompt(transcript: &str) -> String {
    render_prompt(SEGMENT_PROMPT, &[("transcript", transcript)])
}

/// Asks `generator` to split `transcript` into titled passages.
///
/// Malformed chunks in the response are logged and skipped; only a failed or
/// empty completion is an error.
#[tracing::instrument(skip_all, fields(model = generator.model(), transcript_len = transcript.len()))]
pub async fn segment_transcript<G: TextGenerator>(
    generator: &G,
    transcript: &str,
) -> Result<Vec<Passage>, Error> {
    let response = generator
        .generate(&segmentation_prompt(transcript))
        .await
        .map_err(|e| Error::Segmentation(e.to_string()))?;

    if response.trim().is_empty() {
        return Err(Error::Segmentation("model returned an empty completion".into()));
    }

    let passages = parse_passages(&response)
        .into_iter()
        .enumerate()
        .filter_map(|(index, parsed)| {
            parsed
                .inspect_err(|e| tracing::warn!(error = %e, index, "Skipping malformed passage"))
                .ok()
        })
        .collect::<Vec<_>>();

    tracing::info!(count = passages.len(), "Segmented transcript");

    Ok(passages)
}
