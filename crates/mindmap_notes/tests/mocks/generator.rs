use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use mindmap_notes::TextGenerator;

/// Replies to prompts with scripted completions, in call order.
#[derive(Clone, Default)]
pub struct MockGenerator {
    pub script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Result<&'static str, &'static str>>,
    {
        let script = script
            .into_iter()
            .map(|step| step.map(str::to_string).map_err(str::to_string))
            .collect();

        Self {
            script: Arc::new(Mutex::new(script)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for MockGenerator {
    type Error = anyhow::Error;

    fn model(&self) -> &str {
        "mock-gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(msg)) => Err(anyhow::anyhow!("{}", msg)),
            None => Err(anyhow::anyhow!("no scripted completion left")),
        }
    }
}
