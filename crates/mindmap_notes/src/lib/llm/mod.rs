pub mod gemini;
pub mod notes;
pub mod segmenter;

use std::{fmt::Display, future::Future};

pub trait TextGenerator {
    type Error: Display;

    /// Name of the model completions are requested from.
    fn model(&self) -> &str;

    /// Sends `prompt` and returns the text of the first completion candidate.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Substitutes `{name}` placeholders in `template` in a single pass, so text
/// coming from a transcript is never itself treated as a placeholder.
pub(crate) fn render_prompt(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + vars.iter().map(|(_, value)| value.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        match vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'))
        {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);

    out
}
