//! # Rendering Module
//!
//! Turns command results into styled terminal text. Data is flattened into
//! small `Serialize` structs with layout already computed (wrapping,
//! numbering, padding), then fed to the minijinja templates in
//! `templates/`. The templates apply styles through a `style` filter backed by
//! [`QUOTE_THEME`]; with color off the filter leaves text untouched.

use super::styles::{names, topic_style_name, QUOTE_THEME};
use super::templates::{
    CURRENT_QUOTE_TEMPLATE, MESSAGES_TEMPLATE, QUOTES_TEMPLATE, TOPICS_TEMPLATE,
};
use minijinja::{Environment, Value};
use quotegen::api::{MessageLevel, TopicSummary};
use quotegen::commands::CmdMessage;
use quotegen::model::Quote;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width quote text is wrapped to.
pub const LINE_WIDTH: usize = 76;
pub const ATTRIBUTION_PREFIX: &str = "— ";

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct QuoteLineData {
    position: String,
    text: String,
    author: Option<String>,
    indent: String,
}

#[derive(Serialize)]
struct QuotesData {
    quotes: Vec<QuoteLineData>,
}

#[derive(Serialize)]
struct CurrentQuoteData {
    topic: String,
    topic_style: String,
    position: String,
    text: String,
    author: Option<String>,
}

#[derive(Serialize)]
struct TopicLineData {
    index: String,
    name: String,
    padding: String,
    count: String,
    style: String,
}

#[derive(Serialize)]
struct TopicsData {
    topics: Vec<TopicLineData>,
    empty: bool,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        QUOTE_THEME.apply(&name, &value.to_string(), use_color)
    });

    env.template_from_str(template)
        .and_then(|tmpl| tmpl.render(data))
        .map(|out| out.trim_end().to_string())
        .unwrap_or_else(|e| format!("(template error: {})", e))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

/// Renders every quote of a selection, numbered.
pub fn render_quotes(quotes: &[Quote], use_color: bool) -> String {
    let number_width = quotes.len().to_string().len();
    let data = QuotesData {
        quotes: quotes
            .iter()
            .enumerate()
            .map(|(i, quote)| {
                let position = format!("{:>width$}.", i + 1, width = number_width);
                let indent = " ".repeat(position.width() + 1);
                QuoteLineData {
                    text: wrap(
                        &quoted(quote.text()),
                        LINE_WIDTH.saturating_sub(indent.len()),
                        &indent,
                    ),
                    author: quote
                        .attribution()
                        .map(|a| format!("{}{}", ATTRIBUTION_PREFIX, a)),
                    position,
                    indent,
                }
            })
            .collect(),
    };
    render_template(QUOTES_TEMPLATE, &data, use_color)
}

/// Renders the quote under the cursor, with its position in the result set.
pub fn render_current(
    topic: &str,
    quote: &Quote,
    index: usize,
    total: usize,
    use_color: bool,
) -> String {
    let data = CurrentQuoteData {
        topic: topic.to_string(),
        topic_style: topic_style_name(&topic.to_lowercase()),
        position: format!("{}/{}", index + 1, total),
        text: wrap(&quoted(quote.text()), LINE_WIDTH, ""),
        author: quote
            .attribution()
            .map(|a| format!("{}{}", ATTRIBUTION_PREFIX, a)),
    };
    render_template(CURRENT_QUOTE_TEMPLATE, &data, use_color)
}

pub fn render_topics(topics: &[TopicSummary], use_color: bool) -> String {
    let name_width = topics.iter().map(|t| t.name.width()).max().unwrap_or(0);
    let index_width = topics.len().to_string().len() + 2;
    let data = TopicsData {
        empty: topics.is_empty(),
        topics: topics
            .iter()
            .enumerate()
            .map(|(i, topic)| TopicLineData {
                index: format!("{:>width$}", format!("[{}]", i + 1), width = index_width),
                name: topic.name.clone(),
                padding: " ".repeat(name_width.saturating_sub(topic.name.width())),
                count: format!("({})", topic.quote_count),
                style: topic_style_name(&topic.name),
            })
            .collect(),
    };
    render_template(TOPICS_TEMPLATE, &data, use_color)
}

fn quoted(text: &str) -> String {
    format!("\u{201c}{}\u{201d}", text)
}

/// Greedy word wrap on display width. Continuation lines start with `indent`.
fn wrap(text: &str, width: usize, indent: &str) -> String {
    let width = width.max(20);
    let mut out = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
        if line_width > 0 && line_width + 1 + word_width > width {
            out.push('\n');
            out.push_str(indent);
            line_width = 0;
        } else if line_width > 0 {
            out.push(' ');
            line_width += 1;
        }
        out.push_str(word);
        line_width += word_width;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![
            CmdMessage::success("Found 2 quotes"),
            CmdMessage::warning("careful"),
        ];
        assert_eq!(render_messages(&messages, false), "Found 2 quotes\ncareful");
    }

    #[test]
    fn test_render_quotes_with_and_without_author() {
        let quotes = vec![Quote::new("Stay hungry - Steve Jobs"), Quote::new("Keep going")];
        let out = render_quotes(&quotes, false);

        assert!(out.contains("1. \u{201c}Stay hungry\u{201d}"));
        assert!(out.contains("— Steve Jobs"));
        assert!(out.contains("2. \u{201c}Keep going\u{201d}"));
        assert_eq!(out.matches("— ").count(), 1);
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn test_render_current() {
        let quote = Quote::new("Stay hungry - Steve Jobs");
        let out = render_current("motivation", &quote, 1, 5, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "motivation 2/5");
        assert_eq!(lines[1], "\u{201c}Stay hungry\u{201d}");
        assert_eq!(lines[2], "— Steve Jobs");
    }

    #[test]
    fn test_render_current_anonymous() {
        let out = render_current("x", &Quote::new("Keep going"), 0, 1, false);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains("—"));
    }

    #[test]
    fn test_render_topics() {
        let topics = vec![
            TopicSummary {
                name: "motivation".into(),
                quote_count: 5,
            },
            TopicSummary {
                name: "wisdom".into(),
                quote_count: 3,
            },
        ];
        let out = render_topics(&topics, false);
        assert!(out.starts_with("Topics:"));
        assert!(out.contains("[1] motivation (5)"));
        assert!(out.contains("[2] wisdom     (3)"));
    }

    #[test]
    fn test_render_topics_empty() {
        assert_eq!(render_topics(&[], false), "No topics available.");
    }

    #[test]
    fn test_colored_output_has_ansi() {
        let out = render_messages(&[CmdMessage::error("boom")], true);
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn test_wrap() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let wrapped = wrap(text, 20, "  ");
        assert!(wrapped.lines().all(|l| l.width() <= 22));
        assert!(wrapped.lines().skip(1).all(|l| l.starts_with("  ")));
        assert_eq!(wrapped.split_whitespace().count(), 12);
    }
}
