//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every quotegen operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Loads** the corpus exactly once, from any [`CorpusSource`]
//! - **Validates** raw user input into [`Topic`]s
//! - **Dispatches** to the command functions
//! - **Drives** a [`Session`] through a complete submission
//!
//! Configuration is the one operation that does not need a corpus, so
//! [`QuoteApi::configure`] is an associated function: a broken corpus path can
//! still be fixed through it.
//!
//! It never prints, never exits and returns data, not strings.

use crate::clipboard::ClipboardSink;
use crate::commands::{self, CmdMessage, CmdResult, QuotePaths, SelectionPolicy};
use crate::config::QuoteConfig;
use crate::error::Result;
use crate::model::{Corpus, Quote, Topic};
use crate::session::{Session, Submission};
use crate::store::CorpusSource;
use rand::Rng;
use tracing::info;

pub struct QuoteApi {
    corpus: Corpus,
    config: QuoteConfig,
    policy: SelectionPolicy,
}

impl QuoteApi {
    pub fn load<S: CorpusSource + ?Sized>(source: &S, config: QuoteConfig) -> Result<Self> {
        let corpus = source.load()?;
        info!(
            source = %source.describe(),
            topics = corpus.topic_count(),
            quotes = corpus.quote_count(),
            "corpus loaded"
        );
        let policy = config.policy();
        Ok(Self {
            corpus,
            config,
            policy,
        })
    }

    /// Overrides the selection policy taken from the config.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn topics(&self) -> CmdResult {
        commands::topics::run(&self.corpus)
    }

    /// Resolves a topic shortcut given as a 1-based number or a topic name.
    pub fn shortcut(&self, choice: &str) -> Option<&str> {
        commands::topics::resolve_shortcut(&self.corpus, choice)
    }

    pub fn generate(&self, input: &str) -> Result<CmdResult> {
        self.generate_with_rng(input, &mut rand::rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Result<CmdResult> {
        let topic = Topic::parse(input)?;
        Ok(commands::generate::run(&self.corpus, &topic, self.policy, rng))
    }

    /// Runs one submission through `session`: validate, load, select, complete.
    ///
    /// The configured loading delay is spent between entering `Loading` and
    /// completing. An empty topic fails before the session changes.
    pub fn submit(&self, session: &mut Session, input: &str) -> Result<CmdResult> {
        self.submit_with_rng(session, input, &mut rand::rng())
    }

    pub fn submit_with_rng<R: Rng + ?Sized>(
        &self,
        session: &mut Session,
        input: &str,
        rng: &mut R,
    ) -> Result<CmdResult> {
        let topic = match session.submit(input)? {
            Submission::Started(topic) => topic,
            Submission::Ignored => {
                return Ok(CmdResult::default().with_message(CmdMessage::warning(
                    "Still loading the previous topic; submission ignored",
                )))
            }
        };

        let delay = self.config.loading_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let result = commands::generate::run(&self.corpus, &topic, self.policy, rng);
        let quotes = result
            .selection
            .as_ref()
            .map(|s| s.quotes.clone())
            .unwrap_or_default();
        session.complete(quotes);
        Ok(result)
    }

    pub fn copy_quote<C: ClipboardSink + ?Sized>(&self, sink: &C, quote: Option<&Quote>) -> CmdResult {
        commands::copy::run(sink, quote)
    }

    /// Shows or updates the config stored under `paths`. Never loads a corpus.
    pub fn configure(paths: &QuotePaths, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{MessageLevel, Selection, TopicSummary};
