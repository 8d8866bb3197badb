//! Hot-reloading snapshot service: the single mutable reference in the whole system.
//!
//! Everything below this point is immutable values; the service owns one atomic "current
//! snapshot" slot. Readers clone the `Arc` and query their snapshot without locking; a
//! reload validates and builds a full replacement off to the side and then swaps the slot.
//! In-flight readers keep the snapshot they already hold.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ren_corpus::validate::ContentError;
use ren_corpus::{Corpus, RawCorpus, seed, validate};
use ren_query::Snapshot;
use tracing::{info, warn};

use crate::adapter::{FunctionDoc, RenderSource, SearchResult};

/// Serves one current corpus snapshot and supports replacement without restart.
pub struct DocService {
    current: RwLock<Arc<Snapshot>>,
}

impl DocService {
    /// Start serving a validated corpus.
    pub fn new(corpus: Corpus) -> Self {
        Self { current: RwLock::new(Arc::new(Snapshot::new(corpus))) }
    }

    /// Start serving the shipped Ren reference content.
    pub fn builtin() -> Self {
        Self::new(seed::corpus().clone())
    }

    /// The current snapshot. Callers hold it for as long as they like; a concurrent reload
    /// never invalidates it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.read())
    }

    /// Validate raw content and, on success, atomically replace the current snapshot.
    ///
    /// ## Returns
    /// - `Err(ContentError)` with the full violation list when the content is rejected; the
    ///   previous snapshot stays active and keeps serving queries.
    pub fn reload(&self, raw: &RawCorpus) -> Result<(), ContentError> {
        match validate(raw) {
            Ok(corpus) => {
                // Build the replacement before taking the write lock; readers are only
                // blocked for the pointer swap.
                let next = Arc::new(Snapshot::new(corpus));
                let functions = next.corpus().function_count();
                *self.write() = next;
                info!(functions, "swapped in new corpus snapshot");
                Ok(())
            }
            Err(error) => {
                warn!(
                    violations = error.violations.len(),
                    "rejected content reload; keeping current snapshot"
                );
                Err(error)
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Arc<Snapshot>> {
        // A poisoned lock only means a reader panicked mid-swap observation; the Arc inside
        // is always a complete snapshot.
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<Snapshot>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderSource for DocService {
    fn get_sections(&self) -> Vec<ren_corpus::Section> {
        self.snapshot().get_sections()
    }

    fn get_entry(&self, section: &str, entry: &str) -> Option<ren_corpus::Entry> {
        self.snapshot().get_entry(section, entry)
    }

    fn search(&self, term: &str) -> Vec<SearchResult> {
        RenderSource::search(&*self.snapshot(), term)
    }

    fn lookup(&self, name: &str) -> Vec<FunctionDoc> {
        self.snapshot().lookup(name)
    }
}
