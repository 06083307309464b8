use crate::error::Result;
use crate::model::Corpus;
use crate::store::CorpusSource;

/// Serves an already-built corpus. Used by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    corpus: Corpus,
}

impl InMemorySource {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

impl CorpusSource for InMemorySource {
    fn load(&self) -> Result<Corpus> {
        Ok(self.corpus.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory corpus ({} topics)", self.corpus.topic_count())
    }
}
