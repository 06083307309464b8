//! Quote selection.
//!
//! A topic is looked up case-insensitively. When it is unknown (or known but
//! empty) every quote in the corpus becomes a candidate. Candidates are then
//! shuffled, and the [`SelectionPolicy`] decides how many are returned.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Corpus, Quote, Topic};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Return the whole shuffled candidate set.
    #[default]
    Full,
    /// Return at most this many shuffled candidates.
    Capped(usize),
}

impl SelectionPolicy {
    pub fn from_limit(limit: Option<usize>) -> Self {
        match limit {
            Some(n) => SelectionPolicy::Capped(n),
            None => SelectionPolicy::Full,
        }
    }

    fn apply(self, mut quotes: Vec<Quote>) -> Vec<Quote> {
        if let SelectionPolicy::Capped(n) = self {
            quotes.truncate(n);
        }
        quotes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub topic: Topic,
    /// Corpus key the topic resolved to; `None` when all topics were pooled.
    pub matched: Option<String>,
    pub quotes: Vec<Quote>,
}

impl Selection {
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }
}

/// Returns a shuffled permutation of the candidate set for `topic`.
pub fn select_quotes<R: Rng + ?Sized>(topic: &str, corpus: &Corpus, rng: &mut R) -> Vec<Quote> {
    let (_, mut candidates) = candidates(topic, corpus);
    candidates.shuffle(rng);
    candidates
}

fn candidates(topic: &str, corpus: &Corpus) -> (Option<String>, Vec<Quote>) {
    match corpus.lookup(topic) {
        Some((key, quotes)) => (Some(key.to_string()), quotes.to_vec()),
        None => (None, corpus.pooled()),
    }
}

pub fn run<R: Rng + ?Sized>(
    corpus: &Corpus,
    topic: &Topic,
    policy: SelectionPolicy,
    rng: &mut R,
) -> CmdResult {
    let (matched, mut quotes) = candidates(topic.as_str(), corpus);
    let candidate_count = quotes.len();
    quotes.shuffle(rng);
    let quotes = policy.apply(quotes);

    debug!(
        topic = topic.as_str(),
        matched = matched.as_deref().unwrap_or("<all>"),
        candidates = candidate_count,
        returned = quotes.len(),
        "selected quotes"
    );

    let message = if quotes.is_empty() {
        CmdMessage::warning("No quotes available")
    } else if matched.is_some() {
        CmdMessage::success(format!(
            "Found {} {} for \"{}\"",
            quotes.len(),
            plural(quotes.len()),
            topic
        ))
    } else {
        CmdMessage::info(format!(
            "No quotes for \"{}\"; showing {} {} from all topics",
            topic,
            quotes.len(),
            plural(quotes.len())
        ))
    };

    CmdResult::default()
        .with_selection(Selection {
            topic: topic.clone(),
            matched,
            quotes,
        })
        .with_message(message)
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "quote"
    } else {
        "quotes"
    }
}
