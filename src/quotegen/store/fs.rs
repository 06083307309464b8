use crate::error::{QuoteError, Result};
use crate::model::Corpus;
use crate::store::CorpusSource;
use std::fs;
use std::path::PathBuf;

/// Corpus read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for FileSource {
    fn load(&self) -> Result<Corpus> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            QuoteError::Corpus(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        Corpus::from_json(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
