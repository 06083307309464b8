use crate::error::Result;
use crate::model::Corpus;
use crate::store::CorpusSource;

const BUNDLED_QUOTES: &str = include_str!("../../../data/quotes.json");

#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl CorpusSource for BundledSource {
    fn load(&self) -> Result<Corpus> {
        Corpus::from_json(BUNDLED_QUOTES)
    }

    fn describe(&self) -> String {
        "bundled quotes".to_string()
    }
}
