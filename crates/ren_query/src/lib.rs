//! Index builder and query engine over validated Ren documentation corpora.
//!
//! Builds the derived lookup structures (name index, full-text index, category index) for a
//! corpus and answers lookups against them: exact and prefix name matches, scored full-text
//! search, category listings and related entries.
//!
//! ## Notes
//! - Everything here operates on already-validated, immutable data and cannot fail; queries
//!   return empty results instead of errors.
//! - Given the same corpus, index construction and every query result are reproducible:
//!   ordered maps throughout, ties always broken by corpus order.
//!
//! ## Examples
//! ```rust
//! use ren_corpus::seed;
//! use ren_query::Snapshot;
//!
//! let snapshot = Snapshot::new(seed::corpus().clone());
//! let hits = snapshot.lookup_exact("push");
//! assert!(!hits.is_empty());
//! ```

pub mod index;
pub mod snapshot;
pub mod token;

pub use index::{EntryRef, FunctionRef, Index};
pub use snapshot::{EntryHit, FunctionHit, RelatedEntry, SearchHit, Snapshot};
