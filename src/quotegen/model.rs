use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Separator between quotation and attribution in a raw quote string.
pub const ATTRIBUTION_DELIMITER: &str = " - ";

pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic";

/// A single quote as stored in the corpus, e.g. `"Stay hungry - Steve Jobs"`.
///
/// The raw string is kept verbatim; [`Quote::text`] and [`Quote::attribution`]
/// split it on the first [`ATTRIBUTION_DELIMITER`] for display. Everything
/// after that first delimiter is the attribution, so `"A - B - C"` is
/// attributed to `"B - C"` rather than dropping the `" - C"` tail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(String);

impl Quote {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The quotation itself, without attribution.
    pub fn text(&self) -> &str {
        match self.0.split_once(ATTRIBUTION_DELIMITER) {
            Some((text, _)) => text.trim(),
            None => self.0.trim(),
        }
    }

    /// The author, if the quote carries one.
    pub fn attribution(&self) -> Option<&str> {
        self.0
            .split_once(ATTRIBUTION_DELIMITER)
            .map(|(_, author)| author.trim())
            .filter(|author| !author.is_empty())
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Quote {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Quote {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A validated, non-empty topic as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Trims the input and rejects it when nothing is left.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QuoteError::Validation(EMPTY_TOPIC_MESSAGE.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key: the topic lower-cased.
    pub fn normalized(&self) -> String {
        normalize_topic(&self.0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_topic(topic: &str) -> String {
    topic.trim().to_lowercase()
}

/// Read-only mapping of topic name to its quotes.
///
/// Keys are lower-cased on construction. Once built, a corpus is never
/// mutated; all accessors hand out shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    topics: BTreeMap<String, Vec<Quote>>,
}

impl Corpus {
    /// Builds a corpus from `(topic, quotes)` pairs. Topics that collide once
    /// lower-cased have their quotes concatenated.
    pub fn from_topics<I, K, Q>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<Q>)>,
        K: AsRef<str>,
        Q: Into<Quote>,
    {
        let mut topics: BTreeMap<String, Vec<Quote>> = BTreeMap::new();
        for (topic, quotes) in entries {
            topics
                .entry(normalize_topic(topic.as_ref()))
                .or_default()
                .extend(quotes.into_iter().map(Into::into));
        }
        Self { topics }
    }

    /// Parses a JSON document of the form `{"topic": ["quote", ...], ...}`.
    pub fn from_json(source: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(source)
            .map_err(|e| QuoteError::Corpus(format!("invalid corpus document: {}", e)))?;
        Ok(Self::from_topics(raw))
    }

    /// Quotes for a topic, matched case-insensitively.
    ///
    /// A topic that is present but has no quotes is reported as absent.
    pub fn lookup(&self, topic: &str) -> Option<(&str, &[Quote])> {
        self.topics
            .get_key_value(&normalize_topic(topic))
            .filter(|(_, quotes)| !quotes.is_empty())
            .map(|(key, quotes)| (key.as_str(), quotes.as_slice()))
    }

    /// Every quote of every topic, in topic key order.
    pub fn pooled(&self) -> Vec<Quote> {
        self.topics.values().flatten().cloned().collect()
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn topics(&self) -> impl Iterator<Item = (&str, &[Quote])> {
        self.topics
            .iter()
            .map(|(key, quotes)| (key.as_str(), quotes.as_slice()))
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn quote_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.quote_count() == 0
    }
}
