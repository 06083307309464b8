//! # CLI Behavior
//!
//! This is **one possible UI client** for quotegen, not the application itself.
//! For the overall architecture, see the library docs in `lib.rs`.
//!
//! ## Commands
//!
//! - `quotegen` / `quotegen topics`: the topic shortcuts
//! - `quotegen generate <topic...>`: every selected quote at once, numbered.
//!   `--limit` caps the count, `--copy` copies the first quote
//! - `quotegen interactive`: one quote at a time with `/next` and `/copy`
//! - `quotegen config [key] [value]`: settings in `config.json`
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `interactive`: the session loop
//! - `render`: data → template → styled text
//! - `setup`: clap definitions
//! - `styles`: theme and per-topic colors
//! - `templates`: embedded minijinja templates

mod commands;
mod interactive;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
