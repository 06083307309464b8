//! Output templates.
//!
//! Templates are minijinja files kept next to this module and embedded with
//! `include_str!()`. Layout math (wrapping, padding, positions) is done in Rust
//! before rendering; templates only pick styles and structure.
//!
//! Whitespace is controlled explicitly with `{%-` / `-%}`. Callers trim the
//! trailing newline, so templates don't have to be careful about it.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const QUOTES_TEMPLATE: &str = include_str!("templates/quotes.tmp");
pub const CURRENT_QUOTE_TEMPLATE: &str = include_str!("templates/current_quote.tmp");
pub const TOPICS_TEMPLATE: &str = include_str!("templates/topics.tmp");
