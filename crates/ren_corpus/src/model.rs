//! Normalized documentation corpus model.
//!
//! The corpus is a strict tree: sections own categories, categories own entries, and entries own
//! functions. Ordering at every level is the authored display order and is preserved exactly, so
//! containers are ordered sequences rather than sets.
//!
//! ## Notes
//! - Values of these types only come out of [`crate::validate::validate`]; construct new content
//!   through the raw types in [`crate::raw`] and validate it.
//! - There is no mutation API. "Updating" a corpus means validating fresh raw content into a new
//!   [`Corpus`] and replacing the old one wholesale.
//! - Name uniqueness is guaranteed per container where the schema requires it (category names
//!   within a section, entry names within a category), never globally: the same function name
//!   legitimately recurs across categories as distinct overloads.

use serde::Serialize;

/// A fully validated documentation corpus: the root of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corpus {
    pub sections: Vec<Section>,
}

/// A top-level doc set, e.g. "Language Overview" or "Standard Library".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub categories: Vec<Category>,
}

/// A named grouping of entries used for navigation, e.g. "Filesystem".
///
/// Category names are unique within their section but may recur across sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// A named documentation topic grouping one or more functions.
///
/// ## Notes
/// - Most entries hold exactly one function; entries with several functions document overloads
///   or closely related constructs under one topic (e.g. `parse` for ints and for strings).
/// - Entry names are unique within their category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub functions: Vec<Function>,
}

/// One documented function or construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Human label. Not required to be unique: overloads share a name.
    pub name: String,
    /// Ordered overload signatures, one per line of the authored signature.
    /// Always non-empty; kept as a list so overload data stays lossless.
    pub signatures: Vec<String>,
    /// Free-form description text.
    pub description: String,
    /// Usage examples in authored order. Empty when the source had none.
    pub examples: Vec<CodeExample>,
    /// Optional usage warning (e.g. "Shouldn't be used - called automatically").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The single normalized example shape.
///
/// Source content carries examples either as bare pre-formatted text blocks or as
/// code/description pairs; validation unifies both into this shape (see [`crate::raw`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeExample {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Corpus {
    /// Return all sections in authored order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by name.
    ///
    /// ## Notes
    /// - Section names are not required to be unique at the root; the first match in authored
    ///   order wins.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Find an entry by section name and entry name, searching every category of the section.
    ///
    /// ## Returns
    /// - `None` when either the section or the entry does not exist. Absence is a valid,
    ///   representable state here, not an error.
    pub fn entry(&self, section: &str, entry: &str) -> Option<&Entry> {
        self.section(section)?
            .categories
            .iter()
            .flat_map(|c| c.entries.iter())
            .find(|e| e.name == entry)
    }

    /// Count all functions in the corpus.
    pub fn function_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.categories)
            .flat_map(|c| &c.entries)
            .map(|e| e.functions.len())
            .sum()
    }
}

impl Section {
    /// Find a category of this section by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}

impl Category {
    /// Find an entry of this category by name.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::raw::RawCorpus;
    use crate::validate::validate;

    fn fixture() -> crate::model::Corpus {
        let json = r#"[
            {
                "name": "Standard Library",
                "categories": [
                    {
                        "name": "Filesystem",
                        "entries": [
                            {"name": "rename", "functions": [
                                {"name": "rename", "sig": "fn rename(old: <char>, new: <char>) -> int ? <char>", "desc": "Renames a file."}
                            ]},
                            {"name": "mkdir", "functions": [
                                {"name": "mkdir", "sig": "fn mkdir(path: <char>) -> int ? <char>", "desc": "Creates a directory."}
                            ]}
                        ]
                    }
                ]
            }
        ]"#;
        let raw = RawCorpus::from_json_str(json).unwrap();
        validate(&raw).unwrap()
    }

    #[test]
    fn traversal_preserves_authored_order() {
        let corpus = fixture();
        let names: Vec<&str> = corpus.sections()[0].categories[0]
            .entries
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["rename", "mkdir"]);
    }

    #[test]
    fn entry_lookup_spans_categories() {
        let corpus = fixture();
        assert!(corpus.entry("Standard Library", "mkdir").is_some());
        assert!(corpus.entry("Standard Library", "nope").is_none());
        assert!(corpus.entry("Nope", "mkdir").is_none());
    }

    #[test]
    fn section_lookup_is_exact() {
        let corpus = fixture();
        assert!(corpus.section("Standard Library").is_some());
        // Lookup on the store is by authored spelling; case-insensitive matching is the
        // index's job.
        assert!(corpus.section("standard library").is_none());
    }
}
