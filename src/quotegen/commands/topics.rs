use crate::commands::{CmdMessage, CmdResult};
use crate::model::Corpus;

/// A topic shortcut: a corpus key and how many quotes it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub name: String,
    pub quote_count: usize,
}

pub fn run(corpus: &Corpus) -> CmdResult {
    let topics: Vec<TopicSummary> = corpus
        .topics()
        .map(|(name, quotes)| TopicSummary {
            name: name.to_string(),
            quote_count: quotes.len(),
        })
        .collect();

    let mut result = CmdResult::default();
    if topics.is_empty() {
        result.add_message(CmdMessage::warning("The corpus has no topics"));
    }
    result.with_topics(topics)
}

/// Resolves a shortcut given either as a 1-based position or as a topic name.
pub fn resolve_shortcut<'a>(corpus: &'a Corpus, choice: &str) -> Option<&'a str> {
    let choice = choice.trim();
    if let Ok(n) = choice.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| corpus.topic_names().nth(i));
    }
    corpus.lookup(choice).map(|(key, _)| key)
}
