#![forbid(unsafe_code)]
//! Ren Documentation Corpus & Query Engine
//!
//! This crate is the serving boundary over the Ren reference corpus: the
//! [`adapter::RenderSource`] contract that presentation layers pull documentation through,
//! the hot-reloading [`service::DocService`], and the author-facing CLI. The content core
//! lives in `ren_corpus` (model, validator, seeded content) and the lookup machinery in
//! `ren_query` (index builder, query engine).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli`
//!   module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod adapter;
pub mod cli;
pub mod service;

pub use adapter::{FunctionDoc, RenderSource, SearchResult};
pub use service::DocService;

pub use ren_corpus::{ContentError, Corpus, RawCorpus, validate};
pub use ren_query::{SearchHit, Snapshot};
