//! # Passage Parser
//!
//! Turns the marker-delimited text returned by the segmentation prompt into
//! typed [`Passage`] records.
//!
//! ```text
//! preamble is ignored
//! //First title
//! first passage content...
//! //Second title
//! second passage content...
//! //END
//! ```

use crate::{error::Error, types::Passage};

/// Prefix of every passage title line.
pub const PASSAGE_MARKER: &str = "//";

/// Title of the sentinel chunk closing the response.
pub const END_SENTINEL: &str = "END";

/// Parses a segmentation response into passages, in order of appearance.
///
/// Chunks start at every line whose first non-blank characters are
/// [`PASSAGE_MARKER`]. Text before the first marker is discarded, and parsing
/// stops at the `//END` sentinel; a missing sentinel is tolerated.
///
/// # Returns
/// One entry per chunk: `Ok(Passage)` for well formed chunks and
/// `Err(Error::MalformedPassage)` for chunks without a title or content.
pub fn parse_passages(raw: &str) -> Vec<Result<Passage, Error>> {
    let mut passages = Vec::new();

    for chunk in split_chunks(raw) {
        match parse_chunk(chunk) {
            Ok(Chunk::End) => break,
            Ok(Chunk::Passage(passage)) => passages.push(Ok(passage)),
            Err(e) => passages.push(Err(e)),
        }
    }

    passages
}

enum Chunk {
    Passage(Passage),
    End,
}

fn split_chunks(raw: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        if line.trim_start().starts_with(PASSAGE_MARKER) {
            starts.push(offset);
        }
        offset += line.len();
    }

    starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).copied().unwrap_or(raw.len());
            &raw[start..end]
        })
        .collect()
}

fn parse_chunk(chunk: &str) -> Result<Chunk, Error> {
    let (title_line, body) = chunk.split_once('\n').unwrap_or((chunk, ""));

    let title = title_line.trim().trim_start_matches('/').trim();
    if title == END_SENTINEL {
        return Ok(Chunk::End);
    }
    if title.is_empty() {
        return Err(Error::MalformedPassage("passage marker without a title"));
    }

    let content = body.trim();
    if content.is_empty() {
        return Err(Error::MalformedPassage("passage title without content"));
    }

    Ok(Chunk::Passage(Passage::new(title, content)))
}
