use crate::config::QuoteConfig;
use std::path::PathBuf;

pub mod config;
pub mod copy;
pub mod generate;
pub mod topics;

pub use generate::{Selection, SelectionPolicy};
pub use topics::TopicSummary;

#[derive(Debug, Clone)]
pub struct QuotePaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub selection: Option<Selection>,
    pub topics: Vec<TopicSummary>,
    pub config: Option<QuoteConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_topics(mut self, topics: Vec<TopicSummary>) -> Self {
        self.topics = topics;
        self
    }

    pub fn with_config(mut self, config: QuoteConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
