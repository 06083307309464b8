//! # Quotegen Architecture
//!
//! Quotegen picks quotes for a topic. Type "motivation" and you get that
//! topic's quotes in a random order; type something the corpus doesn't know
//! and you get quotes from every topic instead.
//!
//! Like any small tool that might grow a second face, it is a **UI-agnostic
//! library** with a CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, templates, the interactive loop            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the corpus once, validates topics                  │
//! │  - Drives a Session through a submission                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Session (session.rs)        │
//! │  - Selection, topic listing, clipboard copy, config         │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Corpus Sources (store/)                                    │
//! │  - CorpusSource trait: bundled, file, in-memory             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Randomness
//!
//! Every function that shuffles takes the RNG as a parameter (`*_with_rng`
//! variants on the API). Production code passes `rand::rng()`; tests pass a
//! seeded `StdRng` so orderings are reproducible.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Selection, topics, copy and config logic
//! - [`session`]: The Idle → Loading → Ready state machine
//! - [`store`]: Corpus sources
//! - [`model`]: `Quote`, `Topic`, `Corpus`
//! - [`config`]: Persisted settings
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`init`]: Context setup (config dir, corpus choice)
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
