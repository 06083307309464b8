//! Terminal styles.
//!
//! Templates refer to styles by name through the `style` filter; the names and
//! their `console::Style` live here. Each topic gets its own color through the
//! declarative [`TOPIC_COLORS`] table, so adding a topic never touches logic.

use console::{Color, Style};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const HEADING: &str = "heading";
    pub const QUOTE_TEXT: &str = "quote_text";
    pub const AUTHOR: &str = "author";
    pub const POSITION: &str = "position";
    pub const DIM: &str = "dim";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const TOPIC_DEFAULT: &str = "topic_default";
}

/// Topic key → tag color.
pub const TOPIC_COLORS: &[(&str, Color)] = &[
    ("motivation", Color::Red),
    ("success", Color::Green),
    ("dreams", Color::Magenta),
    ("leadership", Color::Blue),
    ("confidence", Color::Yellow),
    ("happiness", Color::Color256(214)),
    ("wisdom", Color::Color256(99)),
    ("change", Color::Cyan),
    ("failure", Color::Color256(167)),
    ("growth", Color::Color256(70)),
    ("creativity", Color::Color256(205)),
    ("perseverance", Color::Color256(136)),
];

/// Name of the style used for a topic tag; unknown topics share a default.
pub fn topic_style_name(topic: &str) -> String {
    if TOPIC_COLORS.iter().any(|(name, _)| *name == topic) {
        format!("topic_{}", topic)
    } else {
        names::TOPIC_DEFAULT.to_string()
    }
}

/// Named styles available to templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text`; unknown names are flagged with `(!?)` to catch template typos.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("(!?) {}", text),
        }
    }
}

pub static QUOTE_THEME: Lazy<Theme> = Lazy::new(|| {
    let theme = Theme::new()
        .add(names::HEADING, Style::new().bold())
        .add(names::QUOTE_TEXT, Style::new().italic())
        .add(names::AUTHOR, Style::new().color256(246))
        .add(names::POSITION, Style::new().yellow())
        .add(names::DIM, Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::TOPIC_DEFAULT, Style::new().bold());

    TOPIC_COLORS.iter().fold(theme, |theme, (topic, color)| {
        theme.add(
            &format!("topic_{}", topic),
            Style::new().fg(*color).bold(),
        )
    })
});
