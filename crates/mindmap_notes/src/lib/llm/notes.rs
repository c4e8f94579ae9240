use crate::{
    error::Error,
    llm::{render_prompt, TextGenerator},
    types::Passage,
};

const NOTES_PROMPT: &str = include_str!("./prompts/notes.txt");

pub fn notes_prompt(passage: &Passage) -> String {
    render_prompt(
        NOTES_PROMPT,
        &[("title", passage.title.as_str()), ("content", passage.content.as_str())],
    )
}

/// Renders one passage as Markdown notes headed by the passage title.
#[tracing::instrument(skip_all, fields(title = %passage.title))]
pub async fn build_note<G: TextGenerator>(generator: &G, passage: &Passage) -> Result<String, Error> {
    let note = generator
        .generate(&notes_prompt(passage))
        .await
        .map_err(|e| Error::NoteGeneration {
            title: passage.title.clone(),
            reason: e.to_string(),
        })?;

    let note = note.trim();
    if note.is_empty() {
        return Err(Error::NoteGeneration {
            title: passage.title.clone(),
            reason: "model returned an empty completion".into(),
        });
    }

    Ok(note.to_string())
}
