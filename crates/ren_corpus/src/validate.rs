//! Schema validation: raw content in, normalized corpus or a complete violation report out.
//!
//! Validation is a pure function over the raw tree. It never stops at the first problem:
//! every violation is collected with a path locating it, so a content author can fix the whole
//! snapshot in one pass instead of iterating error-by-error.
//!
//! ## Notes
//! - On failure no corpus is produced; the snapshot is rejected as a whole.
//! - Validation is idempotent: running the canonical raw form of a validated corpus back
//!   through [`validate`] reproduces the corpus identically.

use std::collections::HashMap;
use std::fmt;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::model::{Category, CodeExample, Corpus, Entry, Function, Section};
use crate::raw::{RawCategory, RawCorpus, RawEntry, RawExample, RawFunction, RawSection, RawSignature};

/// Location of a violation inside the raw tree.
///
/// Renders as `section[i].category[j].entry[k].function[l].<field>`, truncated at the level
/// the violation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPath {
    pub section: usize,
    pub category: Option<usize>,
    pub entry: Option<usize>,
    pub function: Option<usize>,
    pub field: &'static str,
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section[{}]", self.section)?;
        if let Some(c) = self.category {
            write!(f, ".category[{c}]")?;
        }
        if let Some(e) = self.entry {
            write!(f, ".entry[{e}]")?;
        }
        if let Some(func) = self.function {
            write!(f, ".function[{func}]")?;
        }
        write!(f, ".{}", self.field)
    }
}

/// What went wrong at one location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("name must be a non-empty string")]
    EmptyName,
    #[error("signature must contain at least one non-empty overload line")]
    EmptySignature,
    #[error("description must be non-empty")]
    EmptyDescription,
    #[error("examples, when present, must be a non-empty sequence")]
    EmptyExamples,
    #[error("duplicate entry name {name:?} within category {category:?}")]
    DuplicateEntry { name: String, category: String },
    #[error("duplicate category name {name:?} within section {section:?}")]
    DuplicateCategory { name: String, section: String },
}

/// One schema violation with its location.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{path}: {kind}")]
pub struct Violation {
    pub path: ContentPath,
    pub kind: ViolationKind,
}

/// The complete set of schema violations for a rejected snapshot.
///
/// Fatal to building that snapshot, never to the process: a service holding a previously
/// validated snapshot simply keeps serving it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("content validation failed with {} violation(s)", .violations.len())]
#[diagnostic(
    code(ren_corpus::content),
    help("fix every listed violation and reload; the snapshot was rejected as a whole")
)]
pub struct ContentError {
    #[related]
    pub violations: Vec<Violation>,
}

impl ContentError {
    /// Render the violation list as plain text, one violation per line, in document order.
    pub fn to_report(&self) -> String {
        let mut out = String::new();
        for violation in &self.violations {
            out.push_str(&violation.to_string());
            out.push('\n');
        }
        out
    }
}

/// Validate a raw content snapshot into a normalized corpus.
///
/// ## Parameters
/// - `raw`: the content tree exactly as the authoring step produced it.
///
/// ## Returns
/// - `Ok(Corpus)` with example and signature shapes unified.
/// - `Err(ContentError)` carrying every violation found, in document order.
///
/// ## Notes
/// - Pure: no IO, no global state, input is not consumed.
pub fn validate(raw: &RawCorpus) -> Result<Corpus, ContentError> {
    let mut violations = Vec::new();
    let sections = raw
        .sections
        .iter()
        .enumerate()
        .map(|(s, section)| check_section(s, section, &mut violations))
        .collect();

    if violations.is_empty() {
        let corpus = Corpus { sections };
        debug!(
            sections = corpus.sections.len(),
            functions = corpus.function_count(),
            "validated content snapshot"
        );
        Ok(corpus)
    } else {
        debug!(violations = violations.len(), "rejected content snapshot");
        Err(ContentError { violations })
    }
}

fn check_section(s: usize, raw: &RawSection, violations: &mut Vec<Violation>) -> Section {
    if raw.name.trim().is_empty() {
        violations.push(Violation {
            path: ContentPath { section: s, category: None, entry: None, function: None, field: "name" },
            kind: ViolationKind::EmptyName,
        });
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (c, category) in raw.categories.iter().enumerate() {
        if seen.insert(&category.name, c).is_some() {
            violations.push(Violation {
                path: ContentPath {
                    section: s,
                    category: Some(c),
                    entry: None,
                    function: None,
                    field: "name",
                },
                kind: ViolationKind::DuplicateCategory {
                    name: category.name.clone(),
                    section: raw.name.clone(),
                },
            });
        }
    }

    Section {
        name: raw.name.clone(),
        categories: raw
            .categories
            .iter()
            .enumerate()
            .map(|(c, category)| check_category(s, c, category, violations))
            .collect(),
    }
}

fn check_category(s: usize, c: usize, raw: &RawCategory, violations: &mut Vec<Violation>) -> Category {
    if raw.name.trim().is_empty() {
        violations.push(Violation {
            path: ContentPath { section: s, category: Some(c), entry: None, function: None, field: "name" },
            kind: ViolationKind::EmptyName,
        });
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (e, entry) in raw.entries.iter().enumerate() {
        if seen.insert(&entry.name, e).is_some() {
            violations.push(Violation {
                path: ContentPath {
                    section: s,
                    category: Some(c),
                    entry: Some(e),
                    function: None,
                    field: "name",
                },
                kind: ViolationKind::DuplicateEntry {
                    name: entry.name.clone(),
                    category: raw.name.clone(),
                },
            });
        }
    }

    Category {
        name: raw.name.clone(),
        entries: raw
            .entries
            .iter()
            .enumerate()
            .map(|(e, entry)| check_entry(s, c, e, entry, violations))
            .collect(),
    }
}

fn check_entry(s: usize, c: usize, e: usize, raw: &RawEntry, violations: &mut Vec<Violation>) -> Entry {
    if raw.name.trim().is_empty() {
        violations.push(Violation {
            path: ContentPath { section: s, category: Some(c), entry: Some(e), function: None, field: "name" },
            kind: ViolationKind::EmptyName,
        });
    }

    Entry {
        name: raw.name.clone(),
        functions: raw
            .functions
            .iter()
            .enumerate()
            .map(|(f, function)| check_function(s, c, e, f, function, violations))
            .collect(),
    }
}

fn check_function(
    s: usize,
    c: usize,
    e: usize,
    f: usize,
    raw: &RawFunction,
    violations: &mut Vec<Violation>,
) -> Function {
    let at = |field: &'static str| ContentPath {
        section: s,
        category: Some(c),
        entry: Some(e),
        function: Some(f),
        field,
    };

    if raw.name.trim().is_empty() {
        violations.push(Violation { path: at("name"), kind: ViolationKind::EmptyName });
    }

    let signatures = signature_lines(&raw.signature);
    if signatures.is_empty() {
        violations.push(Violation { path: at("signature"), kind: ViolationKind::EmptySignature });
    }

    if raw.description.trim().is_empty() {
        violations.push(Violation { path: at("description"), kind: ViolationKind::EmptyDescription });
    }

    let examples = match &raw.examples {
        None => Vec::new(),
        Some(raw_examples) => {
            if raw_examples.is_empty() {
                violations.push(Violation { path: at("examples"), kind: ViolationKind::EmptyExamples });
            }
            raw_examples.iter().map(normalize_example).collect()
        }
    };

    Function {
        name: raw.name.clone(),
        signatures,
        description: raw.description.clone(),
        examples,
        warning: raw.warning.clone(),
    }
}

/// Split a raw signature into its non-empty overload lines.
///
/// The joined form stacks overloads as newline-separated lines inside one string; the list
/// form spells them out. Both normalize to the same ordered list.
fn signature_lines(raw: &RawSignature) -> Vec<String> {
    let lines: Vec<&str> = match raw {
        RawSignature::Joined(text) => text.split('\n').collect(),
        RawSignature::Lines(lines) => lines.iter().flat_map(|l| l.split('\n')).collect(),
    };
    lines
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

fn normalize_example(raw: &RawExample) -> CodeExample {
    match raw {
        RawExample::Text(code) => CodeExample { code: code.clone(), description: None },
        RawExample::Code { code, description } => CodeExample {
            code: code.clone(),
            description: description.as_deref().filter(|d| !d.is_empty()).map(str::to_owned),
        },
    }
}
