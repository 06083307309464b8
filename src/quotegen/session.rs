//! # Session State
//!
//! A session is the state one viewer holds while browsing quotes:
//!
//! ```text
//!            submit               complete
//!   Idle ─────────────▶ Loading ─────────────▶ Ready { quotes, cursor }
//!                          ▲                      │
//!                          └──────── submit ──────┘
//! ```
//!
//! - Submitting validates the topic first. An empty topic is rejected and
//!   nothing changes.
//! - While `Loading`, further submissions are ignored until the pending one
//!   completes.
//! - Entering `Ready` always puts the cursor on the first quote.
//! - `next` cycles the cursor and wraps around. With fewer than two quotes it
//!   does nothing.
//!
//! The session owns no corpus and does no selection itself; [`crate::api::QuoteApi::submit`]
//! drives it through a whole submission.

use crate::error::Result;
use crate::model::{Quote, Topic};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading {
        topic: Topic,
    },
    Ready {
        topic: Topic,
        quotes: Vec<Quote>,
        cursor: usize,
    },
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Started(Topic),
    /// Another submission is still loading.
    Ignored,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn submit(&mut self, input: &str) -> Result<Submission> {
        let topic = Topic::parse(input)?;

        if self.is_loading() {
            debug!(topic = topic.as_str(), "submission ignored while loading");
            return Ok(Submission::Ignored);
        }

        debug!(topic = topic.as_str(), "session loading");
        self.state = SessionState::Loading {
            topic: topic.clone(),
        };
        Ok(Submission::Started(topic))
    }

    /// Picking a topic shortcut behaves exactly like typing it.
    pub fn select_shortcut(&mut self, topic: &str) -> Result<Submission> {
        self.submit(topic)
    }

    /// Finishes the pending submission. Returns false when nothing was loading.
    pub fn complete(&mut self, quotes: Vec<Quote>) -> bool {
        let state = std::mem::take(&mut self.state);
        match state {
            SessionState::Loading { topic } => {
                debug!(topic = topic.as_str(), quotes = quotes.len(), "session ready");
                self.state = SessionState::Ready {
                    topic,
                    quotes,
                    cursor: 0,
                };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Advances to the next quote, wrapping at the end.
    pub fn next(&mut self) -> Option<&Quote> {
        if let SessionState::Ready { quotes, cursor, .. } = &mut self.state {
            if quotes.len() > 1 {
                *cursor = (*cursor + 1) % quotes.len();
            }
        }
        self.current()
    }

    pub fn current(&self) -> Option<&Quote> {
        match &self.state {
            SessionState::Ready { quotes, cursor, .. } => quotes.get(*cursor),
            _ => None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match &self.state {
            SessionState::Ready { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        match &self.state {
            SessionState::Ready { quotes, .. } => quotes,
            _ => &[],
        }
    }

    pub fn topic(&self) -> Option<&Topic> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Loading { topic } | SessionState::Ready { topic, .. } => Some(topic),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;

    fn quotes(n: usize) -> Vec<Quote> {
        (0..n).map(|i| Quote::new(format!("Q{}", i))).collect()
    }

    fn ready(n: usize) -> Session {
        let mut session = Session::new();
        session.submit("topic").unwrap();
        assert!(session.complete(quotes(n)));
        session
    }

    #[test]
    fn test_starts_idle() {
        let session = Session::new();
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.current().is_none());
        assert!(session.topic().is_none());
    }

    #[test]
    fn test_submit_enters_loading() {
        let mut session = Session::new();
        let outcome = session.submit("  Motivation ").unwrap();
        assert_eq!(outcome, Submission::Started(Topic::parse("Motivation").unwrap()));
        assert!(session.is_loading());
        assert_eq!(session.topic().unwrap().as_str(), "Motivation");
    }

    #[test]
    fn test_empty_submission_is_rejected_without_state_change() {
        let mut session = ready(2);
        session.next();

        let err = session.submit("   ").unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
        assert_eq!(session.cursor(), Some(1));
    }

    #[test]
    fn test_submission_while_loading_is_ignored() {
        let mut session = Session::new();
        session.submit("first").unwrap();
        assert_eq!(session.submit("second").unwrap(), Submission::Ignored);
        assert_eq!(session.topic().unwrap().as_str(), "first");
    }

    #[test]
    fn test_complete_outside_loading_is_noop() {
        let mut session = Session::new();
        assert!(!session.complete(quotes(2)));
        assert_eq!(session.state(), &SessionState::Idle);

        let mut session = ready(2);
        assert!(!session.complete(quotes(5)));
        assert_eq!(session.quotes().len(), 2);
    }

    #[test]
    fn test_new_submission_resets_cursor() {
        let mut session = ready(3);
        session.next();
        session.next();
        assert_eq!(session.cursor(), Some(2));

        session.select_shortcut("success").unwrap();
        assert!(session.is_loading());
        session.complete(quotes(4));
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.topic().unwrap().as_str(), "success");
    }

    #[test]
    fn test_next_wraps_after_n_steps() {
        let mut session = ready(4);
        let start = session.current().cloned();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(session.next().cloned().unwrap());
        }
        assert_eq!(session.current().cloned(), start);
        assert_eq!(seen[0], Quote::new("Q1"));
        assert_eq!(seen[3], Quote::new("Q0"));
    }

    #[test]
    fn test_next_is_noop_for_short_results() {
        let mut session = ready(1);
        session.next();
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.current(), Some(&Quote::new("Q0")));

        let mut session = ready(0);
        assert!(session.next().is_none());
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_next_before_ready() {
        let mut session = Session::new();
        assert!(session.next().is_none());
        session.submit("x").unwrap();
        assert!(session.next().is_none());
        assert!(session.is_loading());
    }
}
