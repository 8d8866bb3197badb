//! One immutable corpus snapshot with its index, and the query operations over it.
//!
//! A [`Snapshot`] is built once from a validated corpus and then only ever read. Any number
//! of concurrent readers may query one snapshot without locking; hot reload is "build a new
//! snapshot, swap the reference", which is the serving boundary's job, not this crate's.
//!
//! Queries have no failure mode: unknown names, absent categories and empty terms all come
//! back as empty results. An end user of the docs never sees an error from this layer.

use std::collections::BTreeMap;

use ren_corpus::{Category, Corpus, Entry, Function, Section};
use tracing::debug;

use crate::index::{EntryRef, FunctionRef, Index};
use crate::token::distinct_tokens;

/// A validated corpus paired with its lookup structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    corpus: Corpus,
    index: Index,
}

/// One scored search result.
///
/// Score is `2 * matched-token-count`, plus `1` when the whole query equals the entry or
/// function name (case-insensitively). The bonus is strictly smaller than one token's
/// weight, so a result matching more tokens always outranks a bonus-only difference; equal
/// scores fall back to corpus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub reference: FunctionRef,
    pub score: u32,
}

/// One related-entries result: an entry sharing indexed tokens with the subject entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedEntry {
    pub reference: EntryRef,
    pub shared_tokens: u32,
}

/// A function reference resolved against its snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FunctionHit<'a> {
    pub section: &'a Section,
    pub category: &'a Category,
    pub entry: &'a Entry,
    pub function: &'a Function,
}

/// An entry reference resolved against its snapshot.
#[derive(Debug, Clone, Copy)]
pub struct EntryHit<'a> {
    pub section: &'a Section,
    pub category: &'a Category,
    pub entry: &'a Entry,
}

impl Snapshot {
    /// Build a snapshot (index included) from a validated corpus.
    pub fn new(corpus: Corpus) -> Self {
        let index = Index::build(&corpus);
        debug!(functions = corpus.function_count(), "built corpus snapshot");
        Self { corpus, index }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Case-insensitive exact name lookup.
    ///
    /// ## Returns
    /// - Every function whose entry or function name equals `name` (ignoring case), in
    ///   corpus order. Empty for unknown or empty names; never an error.
    pub fn lookup_exact(&self, name: &str) -> &[FunctionRef] {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return &[];
        }
        self.index.functions_named(&needle)
    }

    /// Case-insensitive prefix lookup over entry/function names.
    ///
    /// Results are deduplicated and in corpus order. Empty prefixes match nothing rather
    /// than everything.
    pub fn lookup_prefix(&self, prefix: &str) -> Vec<FunctionRef> {
        let needle = prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut refs: Vec<FunctionRef> = self
            .index
            .names_with_prefix(&needle)
            .flat_map(|(_, refs)| refs.iter().copied())
            .collect();
        refs.sort_unstable();
        refs.dedup();
        refs
    }

    /// Full-text search.
    ///
    /// Tokenizes `term` exactly like the indexer, unions the per-token hits, and ranks by
    /// score descending with corpus order as the final tie-break (see [`SearchHit`]).
    /// Identical queries always return identical rankings.
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        let query_tokens = distinct_tokens(term);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut matched: BTreeMap<FunctionRef, u32> = BTreeMap::new();
        for token in &query_tokens {
            for &reference in self.index.functions_matching_token(token) {
                *matched.entry(reference).or_insert(0) += 1;
            }
        }

        let exact = self.index.functions_named(&term.trim().to_lowercase());
        let mut hits: Vec<SearchHit> = matched
            .into_iter()
            .map(|(reference, matched_tokens)| SearchHit {
                reference,
                score: 2 * matched_tokens + u32::from(exact.contains(&reference)),
            })
            .collect();
        hits.sort_by(|a, b| b.score.cmp(&a.score).then(a.reference.cmp(&b.reference)));
        hits
    }

    /// Entries of a category by authored name, in authored order; empty when absent.
    pub fn list_category(&self, name: &str) -> &[EntryRef] {
        self.index.category_entries(name)
    }

    /// Entries related to `(section, entry)`: other entries sharing indexed tokens, ranked
    /// by shared-token count descending, corpus order tie-break, subject excluded.
    pub fn related_entries(&self, section: &str, entry: &str) -> Vec<RelatedEntry> {
        let Some(subject) = self.find_entry(section, entry) else {
            return Vec::new();
        };

        let subject_tokens = self.entry_tokens(subject);
        let mut shared: BTreeMap<EntryRef, u32> = BTreeMap::new();
        for token in &subject_tokens {
            let mut counted: Option<EntryRef> = None;
            for reference in self.index.functions_matching_token(token) {
                let entry_ref = reference.entry_ref();
                if entry_ref == subject {
                    continue;
                }
                // A token may hit several functions of one entry; count it once per entry.
                if counted != Some(entry_ref) {
                    *shared.entry(entry_ref).or_insert(0) += 1;
                    counted = Some(entry_ref);
                }
            }
        }

        let mut related: Vec<RelatedEntry> = shared
            .into_iter()
            .map(|(reference, shared_tokens)| RelatedEntry { reference, shared_tokens })
            .collect();
        related.sort_by(|a, b| b.shared_tokens.cmp(&a.shared_tokens).then(a.reference.cmp(&b.reference)));
        related
    }

    /// Resolve a function reference. `None` only for references that were not produced by
    /// this snapshot.
    pub fn resolve(&self, reference: FunctionRef) -> Option<FunctionHit<'_>> {
        let section = self.corpus.sections.get(reference.section)?;
        let category = section.categories.get(reference.category)?;
        let entry = category.entries.get(reference.entry)?;
        let function = entry.functions.get(reference.function)?;
        Some(FunctionHit { section, category, entry, function })
    }

    /// Resolve an entry reference. `None` only for foreign references.
    pub fn resolve_entry(&self, reference: EntryRef) -> Option<EntryHit<'_>> {
        let section = self.corpus.sections.get(reference.section)?;
        let category = section.categories.get(reference.category)?;
        let entry = category.entries.get(reference.entry)?;
        Some(EntryHit { section, category, entry })
    }

    fn find_entry(&self, section: &str, entry: &str) -> Option<EntryRef> {
        let (s, found_section) = self
            .corpus
            .sections
            .iter()
            .enumerate()
            .find(|(_, candidate)| candidate.name == section)?;
        for (c, category) in found_section.categories.iter().enumerate() {
            for (e, candidate) in category.entries.iter().enumerate() {
                if candidate.name == entry {
                    return Some(EntryRef { section: s, category: c, entry: e });
                }
            }
        }
        None
    }

    fn entry_tokens(&self, reference: EntryRef) -> Vec<String> {
        let Some(hit) = self.resolve_entry(reference) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut push_all = |text: &str| {
            for token in distinct_tokens(text) {
                if !out.contains(&token) {
                    out.push(token);
                }
            }
        };
        push_all(&hit.entry.name);
        push_all(&hit.category.name);
        for function in &hit.entry.functions {
            push_all(&function.name);
            for signature in &function.signatures {
                push_all(signature);
            }
            push_all(&function.description);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ren_corpus::{RawCorpus, validate};

    fn snapshot(json: &str) -> Snapshot {
        Snapshot::new(validate(&RawCorpus::from_json_str(json).unwrap()).unwrap())
    }

    fn hash_map_snapshot() -> Snapshot {
        snapshot(
            r#"[
            {"name": "Standard Library", "categories": [
                {"name": "Hash Map", "entries": [
                    {"name": "insert", "functions": [
                        {"name": "insert", "sig": "fn insert<K, V>(m: *{K: V}, k: K, v: V)", "desc": "Inserts a key-value pair into the hash map."}
                    ]},
                    {"name": "get", "functions": [
                        {"name": "get", "sig": "fn get<K, V>(m: {K: V}, k: K) -> ?V", "desc": "Retrieves a value from the hash map by key."}
                    ]},
                    {"name": "remove", "functions": [
                        {"name": "remove", "sig": "fn remove<K, V>(m: *{K: V}, k: K)", "desc": "Removes a key from the hash map."}
                    ]},
                    {"name": "iter", "functions": [
                        {"name": "iter", "sig": "fn iter<K, V>(m: {K: V}) -> <(K, V)>", "desc": "Iterates over the pairs of the hash map."}
                    ]}
                ]},
                {"name": "Filesystem", "entries": [
                    {"name": "rename", "functions": [
                        {"name": "rename", "sig": "fn rename(old: <char>, new: <char>) -> int ? <char>", "desc": "Renames a file or directory."}
                    ]}
                ]}
            ]}
        ]"#,
        )
    }

    #[test]
    fn lookup_exact_is_case_insensitive_and_total() {
        let snapshot = hash_map_snapshot();
        assert_eq!(snapshot.lookup_exact("INSERT").len(), 1);
        assert_eq!(snapshot.lookup_exact("insert").len(), 1);
        assert!(snapshot.lookup_exact("no_such_name").is_empty());
        assert!(snapshot.lookup_exact("").is_empty());
        assert!(snapshot.lookup_exact("   ").is_empty());
    }

    #[test]
    fn search_ranks_category_matches_above_unrelated_functions() {
        let snapshot = hash_map_snapshot();
        let hits = snapshot.search("hash map");
        // All four Hash Map functions hit both tokens; rename hits neither.
        let top: Vec<usize> = hits.iter().take(4).map(|h| h.reference.entry).collect();
        assert_eq!(top, [0, 1, 2, 3], "hash map functions lead in corpus order");
        assert!(hits.iter().all(|h| h.reference.category == 0), "rename never matches");
    }

    #[test]
    fn search_is_deterministic_and_total() {
        let snapshot = hash_map_snapshot();
        assert_eq!(snapshot.search("hash map"), snapshot.search("hash map"));
        assert!(snapshot.search("").is_empty());
        assert!(snapshot.search("?!").is_empty());
    }

    #[test]
    fn exact_name_bonus_breaks_equal_token_counts_only() {
        let snapshot = snapshot(
            r#"[
            {"name": "S", "categories": [
                {"name": "C", "entries": [
                    {"name": "helper", "functions": [
                        {"name": "helper", "sig": "fn helper()", "desc": "Talks about the insert operation at length."}
                    ]},
                    {"name": "insert", "functions": [
                        {"name": "insert", "sig": "fn insert()", "desc": "Inserts."}
                    ]}
                ]}
            ]}
        ]"#,
        );
        let hits = snapshot.search("insert");
        assert_eq!(hits.len(), 2);
        // Both match the single token; the exact-named entry wins on the bonus even though
        // it comes later in corpus order.
        assert_eq!(hits[0].reference.entry, 1);
        assert_eq!(hits[0].score, 3);
        assert_eq!(hits[1].score, 2);
    }

    #[test]
    fn matched_token_count_dominates_the_exact_bonus() {
        let snapshot = snapshot(
            r#"[
            {"name": "S", "categories": [
                {"name": "C", "entries": [
                    {"name": "map", "functions": [
                        {"name": "map", "sig": "fn map()", "desc": "About maps."}
                    ]},
                    {"name": "map_sum", "functions": [
                        {"name": "map_sum", "sig": "fn map_sum()", "desc": "Sums a map."}
                    ]}
                ]}
            ]}
        ]"#,
        );
        let hits = snapshot.search("map sum");
        // map_sum matches both tokens (score 4); map matches one plus no bonus for the
        // two-word query (score 2).
        assert_eq!(hits[0].reference.entry, 1);
        assert_eq!(hits[0].score, 4);
        assert_eq!(hits[1].reference.entry, 0);
        assert_eq!(hits[1].score, 2);
    }

    #[test]
    fn list_category_passes_through_in_order() {
        let snapshot = hash_map_snapshot();
        let entries: Vec<usize> = snapshot.list_category("Hash Map").iter().map(|r| r.entry).collect();
        assert_eq!(entries, [0, 1, 2, 3]);
        assert!(snapshot.list_category("Nope").is_empty());
    }

    #[test]
    fn prefix_lookup_is_deduplicated_and_corpus_ordered() {
        let snapshot = hash_map_snapshot();
        let refs = snapshot.lookup_prefix("i");
        // insert and iter, in corpus order.
        let entries: Vec<usize> = refs.iter().map(|r| r.entry).collect();
        assert_eq!(entries, [0, 3]);
        assert!(snapshot.lookup_prefix("").is_empty());
    }

    #[test]
    fn related_entries_share_tokens_and_exclude_self() {
        let snapshot = hash_map_snapshot();
        let related = snapshot.related_entries("Standard Library", "insert");
        assert!(!related.is_empty());
        let subject = snapshot.find_entry("Standard Library", "insert").unwrap();
        assert!(related.iter().all(|r| r.reference != subject));
        // The other hash map entries share far more tokens with insert than rename does.
        let first = snapshot.resolve_entry(related[0].reference).unwrap();
        assert_eq!(first.category.name, "Hash Map");
    }

    #[test]
    fn foreign_references_resolve_to_none() {
        let snapshot = hash_map_snapshot();
        let foreign = FunctionRef { section: 9, category: 9, entry: 9, function: 9 };
        assert!(snapshot.resolve(foreign).is_none());
    }
}
