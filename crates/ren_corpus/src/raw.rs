//! Raw, pre-validation content tree.
//!
//! This is the serde surface for content snapshots as the authoring/build step produces them.
//! It is deliberately permissive: two example shapes and two signature shapes coexist across
//! corpus snapshot generations, and the short legacy field spellings (`sig`, `desc`, `example`,
//! `warn`) are accepted alongside the canonical ones. Nothing downstream of
//! [`crate::validate::validate`] ever sees these types.
//!
//! ## Notes
//! - Serialization always emits the canonical spellings and shapes, so re-serializing a
//!   normalized corpus yields a canonical snapshot (see [`RawCorpus::from`]).
//! - A snapshot file may be either a bare JSON array of sections or an object with a
//!   `sections` key; [`RawCorpus::from_json_str`] accepts both.

use serde::{Deserialize, Serialize};

use crate::model;

/// Root of a raw content snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCorpus {
    pub sections: Vec<RawSection>,
}

/// A raw top-level doc set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    pub name: String,
    pub categories: Vec<RawCategory>,
}

/// A raw category of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub name: String,
    pub entries: Vec<RawEntry>,
}

/// A raw entry: a named topic with one or more functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub functions: Vec<RawFunction>,
}

/// A raw documented function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFunction {
    pub name: String,
    #[serde(alias = "sig")]
    pub signature: RawSignature,
    #[serde(alias = "desc")]
    pub description: String,
    /// Optional; when present the schema requires it non-empty.
    #[serde(default, alias = "example", skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<RawExample>>,
    #[serde(default, alias = "warn", skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Signature as authored: a single string (possibly newline-joined overload lines) or an
/// explicit list of overload strings.
///
/// Older snapshots stack two `fn` lines inside one string; newer ones spell the list out.
/// Validation splits the joined form so overload data stays an ordered list either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSignature {
    Joined(String),
    Lines(Vec<String>),
}

/// Example as authored: a bare pre-formatted text block, or a code/description pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawExample {
    Text(String),
    Code {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl RawCorpus {
    /// Parse a snapshot from JSON text.
    ///
    /// ## Notes
    /// - Accepts both a bare array of sections (the historical snapshot layout) and an object
    ///   with a `sections` key.
    ///
    /// ## Examples
    /// ```rust
    /// use ren_corpus::raw::RawCorpus;
    ///
    /// let bare = RawCorpus::from_json_str("[]").unwrap();
    /// let keyed = RawCorpus::from_json_str(r#"{"sections": []}"#).unwrap();
    /// assert_eq!(bare, keyed);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Vec<RawSection>>(json) {
            Ok(sections) => Ok(Self { sections }),
            Err(_) => serde_json::from_str::<Self>(json),
        }
    }
}

impl From<&model::Corpus> for RawCorpus {
    /// Build the canonical raw form of a normalized corpus.
    ///
    /// Validating the result reproduces the corpus identically, which is the round-trip
    /// property the schema promises: validation is idempotent over its own output.
    fn from(corpus: &model::Corpus) -> Self {
        Self {
            sections: corpus.sections.iter().map(RawSection::from).collect(),
        }
    }
}

impl From<&model::Section> for RawSection {
    fn from(section: &model::Section) -> Self {
        Self {
            name: section.name.clone(),
            categories: section.categories.iter().map(RawCategory::from).collect(),
        }
    }
}

impl From<&model::Category> for RawCategory {
    fn from(category: &model::Category) -> Self {
        Self {
            name: category.name.clone(),
            entries: category.entries.iter().map(RawEntry::from).collect(),
        }
    }
}

impl From<&model::Entry> for RawEntry {
    fn from(entry: &model::Entry) -> Self {
        Self {
            name: entry.name.clone(),
            functions: entry.functions.iter().map(RawFunction::from).collect(),
        }
    }
}

impl From<&model::Function> for RawFunction {
    fn from(function: &model::Function) -> Self {
        let signature = if function.signatures.len() == 1 {
            RawSignature::Joined(function.signatures[0].clone())
        } else {
            RawSignature::Lines(function.signatures.clone())
        };
        let examples = if function.examples.is_empty() {
            None
        } else {
            Some(function.examples.iter().map(RawExample::from).collect())
        };
        Self {
            name: function.name.clone(),
            signature,
            description: function.description.clone(),
            examples,
            warning: function.warning.clone(),
        }
    }
}

impl From<&model::CodeExample> for RawExample {
    fn from(example: &model::CodeExample) -> Self {
        match &example.description {
            Some(description) => RawExample::Code {
                code: example.code.clone(),
                description: Some(description.clone()),
            },
            None => RawExample::Text(example.code.clone()),
        }
    }
}
