//! # Corpus Sources
//!
//! The quote corpus is read-only data loaded once at startup. [`CorpusSource`]
//! abstracts where it comes from so the API can be built over any of:
//!
//! - [`bundled::BundledSource`]: the JSON document compiled into the binary
//! - [`fs::FileSource`]: a JSON document on disk, chosen with `--corpus` or
//!   the `corpus` config key
//! - [`memory::InMemorySource`]: a prepared [`Corpus`], for tests
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "motivation": ["The way to get started is to quit talking and begin doing. - Walt Disney"],
//!   "success": ["..."]
//! }
//! ```
//!
//! Topic keys are lower-cased while loading.

use crate::error::Result;
use crate::model::Corpus;

pub mod bundled;
pub mod fs;
pub mod memory;

pub trait CorpusSource {
    /// Load the full corpus.
    fn load(&self) -> Result<Corpus>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}
