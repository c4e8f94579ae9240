use mindmap_datastore::StatusStore;

use crate::{llm::TextGenerator, yt::TranscriptFetcher, NotesProcessor};

pub struct NotesProcessorBuilder<D = (), F = (), G = ()> {
    store: D,
    transcript_fetcher: F,
    generator: G,
}

impl NotesProcessorBuilder {
    pub fn new() -> Self {
        Self {
            store: (),
            transcript_fetcher: (),
            generator: (),
        }
    }
}

impl Default for NotesProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, F, G> NotesProcessorBuilder<D, F, G> {
    pub fn store<D2: StatusStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> NotesProcessorBuilder<D2, F, G> {
        NotesProcessorBuilder {
            store,
            transcript_fetcher: self.transcript_fetcher,
            generator: self.generator,
        }
    }

    pub fn transcript_fetcher<F2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcript_fetcher: F2,
    ) -> NotesProcessorBuilder<D, F2, G> {
        NotesProcessorBuilder {
            store: self.store,
            transcript_fetcher,
            generator: self.generator,
        }
    }

    pub fn generator<G2: TextGenerator + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> NotesProcessorBuilder<D, F, G2> {
        NotesProcessorBuilder {
            store: self.store,
            transcript_fetcher: self.transcript_fetcher,
            generator,
        }
    }
}

impl<D, F, G> NotesProcessorBuilder<D, F, G>
where
    D: StatusStore + Send + Sync + 'static,
    F: TranscriptFetcher + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    pub fn build(self) -> NotesProcessor<D, F, G> {
        NotesProcessor {
            store: self.store,
            transcript_fetcher: self.transcript_fetcher,
            generator: self.generator,
        }
    }
}
