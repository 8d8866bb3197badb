//! Lookup structures derived from a validated corpus.
//!
//! Built once per corpus snapshot, never updated incrementally. All maps are ordered by key
//! and every reference list is in corpus traversal order, so two builds over the same corpus
//! are indistinguishable: no observable ordering ever depends on hash iteration.

use std::collections::BTreeMap;
use std::ops::Bound;

use ren_corpus::Corpus;
use tracing::debug;

use crate::token::{distinct_tokens, tokens};

/// Position of one function in a corpus: indices along the section/category/entry/function
/// path, in authored order.
///
/// ## Notes
/// - The derived ordering is exactly corpus traversal order, which is what every tie-break
///   in the query layer uses.
/// - A reference is only meaningful against the corpus it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionRef {
    pub section: usize,
    pub category: usize,
    pub entry: usize,
    pub function: usize,
}

impl FunctionRef {
    /// Drop the function index, keeping the position of the owning entry.
    pub fn entry_ref(self) -> EntryRef {
        EntryRef { section: self.section, category: self.category, entry: self.entry }
    }
}

/// Position of one entry in a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryRef {
    pub section: usize,
    pub category: usize,
    pub entry: usize,
}

/// The three lookup structures of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Lowercased entry/function name to corpus-ordered function references. Duplicate
    /// names across categories are legitimate overload reuse, so values are always lists.
    names: BTreeMap<String, Vec<FunctionRef>>,
    /// Lowercased token to corpus-ordered function references. Tokens come from the
    /// function's name, signature lines and description, plus its entry and category labels
    /// so navigation text is searchable too.
    text: BTreeMap<String, Vec<FunctionRef>>,
    /// Category name (authored spelling) to corpus-ordered entry references, concatenated
    /// across sections when a category name recurs.
    categories: BTreeMap<String, Vec<EntryRef>>,
}

impl Index {
    /// Build the index for one validated corpus.
    ///
    /// ## Notes
    /// - Cost is linear in total content size; this runs once per snapshot.
    /// - Cannot fail: the corpus is already validated and the build only reads it.
    pub fn build(corpus: &Corpus) -> Self {
        let mut names: BTreeMap<String, Vec<FunctionRef>> = BTreeMap::new();
        let mut text: BTreeMap<String, Vec<FunctionRef>> = BTreeMap::new();
        let mut categories: BTreeMap<String, Vec<EntryRef>> = BTreeMap::new();

        for (s, section) in corpus.sections.iter().enumerate() {
            for (c, category) in section.categories.iter().enumerate() {
                let per_category = categories.entry(category.name.clone()).or_default();
                for (e, entry) in category.entries.iter().enumerate() {
                    per_category.push(EntryRef { section: s, category: c, entry: e });

                    for (f, function) in entry.functions.iter().enumerate() {
                        let reference = FunctionRef { section: s, category: c, entry: e, function: f };

                        push_name(&mut names, &entry.name, reference);
                        if !function.name.eq_ignore_ascii_case(&entry.name) {
                            push_name(&mut names, &function.name, reference);
                        }

                        for token in function_tokens(category, entry, function) {
                            let refs = text.entry(token).or_default();
                            if refs.last() != Some(&reference) {
                                refs.push(reference);
                            }
                        }
                    }
                }
            }
        }

        debug!(
            names = names.len(),
            tokens = text.len(),
            categories = categories.len(),
            "built corpus index"
        );
        Self { names, text, categories }
    }

    /// Function references for a lowercased entry/function name; empty when unknown.
    pub fn functions_named(&self, lowercased: &str) -> &[FunctionRef] {
        self.names.get(lowercased).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Function references whose indexed text contains a lowercased token; empty when unknown.
    pub fn functions_matching_token(&self, token: &str) -> &[FunctionRef] {
        self.text.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entry references of a category by authored name; empty when the category does not
    /// exist. Absence is a valid state, not an error.
    pub fn category_entries(&self, name: &str) -> &[EntryRef] {
        self.categories.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All indexed names starting with a lowercased prefix, in lexicographic name order.
    pub fn names_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [FunctionRef])> + 'a {
        self.names
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(name, _)| name.starts_with(prefix))
            .map(|(name, refs)| (name.as_str(), refs.as_slice()))
    }
}

fn push_name(names: &mut BTreeMap<String, Vec<FunctionRef>>, name: &str, reference: FunctionRef) {
    let refs = names.entry(name.to_lowercase()).or_default();
    if refs.last() != Some(&reference) {
        refs.push(reference);
    }
}

/// Distinct index tokens for one function, first-seen order.
fn function_tokens(
    category: &ren_corpus::Category,
    entry: &ren_corpus::Entry,
    function: &ren_corpus::Function,
) -> Vec<String> {
    let mut out = distinct_tokens(&function.name);
    let mut push_all = |text: &str| {
        for token in tokens(text) {
            if !out.contains(&token) {
                out.push(token);
            }
        }
    };
    push_all(&entry.name);
    push_all(&category.name);
    for signature in &function.signatures {
        push_all(signature);
    }
    push_all(&function.description);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ren_corpus::{RawCorpus, validate};

    fn corpus(json: &str) -> Corpus {
        validate(&RawCorpus::from_json_str(json).unwrap()).unwrap()
    }

    fn two_push_corpus() -> Corpus {
        corpus(
            r#"[
            {"name": "Standard Library", "categories": [
                {"name": "Data Structures", "entries": [
                    {"name": "push", "functions": [
                        {"name": "push", "sig": "fn push<T>(list: *[T], el: T)", "desc": "Pushes an element to a list."}
                    ]}
                ]},
                {"name": "Slice & List Manipulation", "entries": [
                    {"name": "push", "functions": [
                        {"name": "push", "sig": "fn push<T>(sl: *<T>, el: T)", "desc": "Appends to a slice-backed list."}
                    ]}
                ]}
            ]}
        ]"#,
        )
    }

    #[test]
    fn duplicate_names_map_to_a_corpus_ordered_list() {
        let corpus = two_push_corpus();
        let index = Index::build(&corpus);
        let refs = index.functions_named("push");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].category, 0, "Data Structures' push comes first");
        assert_eq!(refs[1].category, 1);
        assert!(refs[0] < refs[1]);
    }

    #[test]
    fn entry_and_function_name_share_one_reference() {
        let corpus = two_push_corpus();
        let index = Index::build(&corpus);
        // Entry and function are both named "push"; the reference must not double up.
        assert_eq!(index.functions_named("push").len(), 2);
    }

    #[test]
    fn category_index_preserves_entry_order_and_handles_misses() {
        let corpus = two_push_corpus();
        let index = Index::build(&corpus);
        assert_eq!(index.category_entries("Data Structures").len(), 1);
        assert!(index.category_entries("No Such Category").is_empty());
    }

    #[test]
    fn text_index_covers_category_labels() {
        let corpus = corpus(
            r#"[
            {"name": "S", "categories": [
                {"name": "Hash Map", "entries": [
                    {"name": "insert", "functions": [
                        {"name": "insert", "sig": "fn insert<K, V>(m: *{K: V}, k: K, v: V)", "desc": "Inserts a pair."}
                    ]}
                ]}
            ]}
        ]"#,
        );
        let index = Index::build(&corpus);
        assert_eq!(index.functions_matching_token("hash").len(), 1);
        assert_eq!(index.functions_matching_token("map").len(), 1);
        assert_eq!(index.functions_matching_token("insert").len(), 1);
    }

    #[test]
    fn building_twice_is_reproducible() {
        let corpus = two_push_corpus();
        assert_eq!(Index::build(&corpus), Index::build(&corpus));
    }

    #[test]
    fn prefix_scan_walks_names_in_order() {
        let corpus = two_push_corpus();
        let index = Index::build(&corpus);
        let names: Vec<&str> = index.names_with_prefix("pu").map(|(n, _)| n).collect();
        assert_eq!(names, ["push"]);
        assert_eq!(index.names_with_prefix("zz").count(), 0);
    }
}
