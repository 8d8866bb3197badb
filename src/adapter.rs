//! The contract the presentation layer pulls documentation through.
//!
//! A renderer (docs site, editor plugin, terminal viewer) only ever sees this trait and the
//! normalized corpus shapes it returns; raw or unvalidated content never crosses this
//! boundary. The trait is implemented both by a single [`Snapshot`] (for tests and one-shot
//! tools) and by the hot-reloading [`crate::service::DocService`].

use ren_corpus::{Entry, Function, Section};
use ren_query::Snapshot;

/// One function together with its location labels, resolved to owned values so results
/// outlive the snapshot they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDoc {
    pub section: String,
    pub category: String,
    pub entry: String,
    pub function: Function,
}

/// One scored search result as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub doc: FunctionDoc,
    pub score: u32,
}

/// Read-only documentation source for renderers.
///
/// ## Notes
/// - Every operation is total: misses are empty results or `None`, never errors.
/// - Implementations answer from one immutable snapshot per call; a reload between two
///   calls may change answers but never corrupts an in-flight one.
pub trait RenderSource {
    /// All doc sections in authored order.
    fn get_sections(&self) -> Vec<Section>;

    /// One entry by section and entry name, searching every category of the section.
    fn get_entry(&self, section: &str, entry: &str) -> Option<Entry>;

    /// Scored full-text search, ranked as the query engine ranks.
    fn search(&self, term: &str) -> Vec<SearchResult>;

    /// Case-insensitive exact name lookup in corpus order.
    fn lookup(&self, name: &str) -> Vec<FunctionDoc>;
}

impl RenderSource for Snapshot {
    fn get_sections(&self) -> Vec<Section> {
        self.corpus().sections().to_vec()
    }

    fn get_entry(&self, section: &str, entry: &str) -> Option<Entry> {
        self.corpus().entry(section, entry).cloned()
    }

    fn search(&self, term: &str) -> Vec<SearchResult> {
        Snapshot::search(self, term)
            .into_iter()
            .filter_map(|hit| {
                let doc = function_doc(self, hit.reference)?;
                Some(SearchResult { doc, score: hit.score })
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Vec<FunctionDoc> {
        self.lookup_exact(name)
            .iter()
            .filter_map(|&reference| function_doc(self, reference))
            .collect()
    }
}

fn function_doc(snapshot: &Snapshot, reference: ren_query::FunctionRef) -> Option<FunctionDoc> {
    let hit = snapshot.resolve(reference)?;
    Some(FunctionDoc {
        section: hit.section.name.clone(),
        category: hit.category.name.clone(),
        entry: hit.entry.name.clone(),
        function: hit.function.clone(),
    })
}
