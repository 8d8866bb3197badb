//! Corpus model, schema validator and seeded reference content for the Ren documentation.
//!
//! This crate is the "content core": it defines what a valid documentation corpus looks like,
//! turns raw content snapshots into normalized immutable values, and ships the Ren reference
//! content itself. It contains deterministic, IO-free code that both the query layer and any
//! loading/authoring tooling build on.
//!
//! ## Notes
//! - No IO, no global mutable state, no compiler types: a corpus is a plain value that is
//!   validated once and then only ever read.
//! - Lookup performance is out of scope here; the tree is authored-order sequences. Constant
//!   time lookups come from the index layer built on top (see the `ren_query` crate).
//!
//! ## Examples
//! ```rust
//! use ren_corpus::seed;
//!
//! let corpus = seed::corpus();
//! let entry = corpus.entry("Standard Library", "rename").unwrap();
//! assert_eq!(entry.functions.len(), 1);
//! ```

pub mod model;
pub mod raw;
pub mod seed;
pub mod validate;

pub use model::{Category, CodeExample, Corpus, Entry, Function, Section};
pub use raw::RawCorpus;
pub use validate::{ContentError, ContentPath, Violation, ViolationKind, validate};
