//! The shipped Ren reference content.
//!
//! This module is a registry-first rendition of the Ren documentation: the full reference
//! tree ("Language Overview", "Standard Library", "Built-in") is constructed in code and
//! validated exactly once at first use. It goes through the same [`crate::validate`] door as
//! externally loaded snapshots, so the seed can never bypass the schema.
//!
//! ## Notes
//! - Content edits happen here (or in an external snapshot); the model stays
//!   load-format-agnostic.
//! - A guardrail test asserts the seed validates cleanly, so a content mistake fails CI
//!   instead of panicking in a consumer.

use std::sync::OnceLock;

use crate::model::Corpus;
use crate::raw::{RawCategory, RawCorpus, RawEntry, RawExample, RawFunction, RawSection, RawSignature};
use crate::validate::validate;

mod builtin;
mod overview;
mod stdlib;

/// Build the raw seed content tree.
///
/// Mostly useful for tests and for re-serializing the shipped content; consumers usually
/// want [`corpus`].
pub fn raw() -> RawCorpus {
    RawCorpus {
        sections: vec![overview::section(), stdlib::section(), builtin::section()],
    }
}

/// Return the validated, shipped reference corpus.
///
/// Validated on first call and cached for the process lifetime.
pub fn corpus() -> &'static Corpus {
    static CORPUS: OnceLock<Corpus> = OnceLock::new();
    CORPUS.get_or_init(|| {
        validate(&raw()).expect("INVARIANT: seeded reference content must validate")
    })
}

// Small constructors so the content modules read as tables, not as struct-literal noise.

fn sect(name: &str, categories: Vec<RawCategory>) -> RawSection {
    RawSection { name: name.to_owned(), categories }
}

fn cat(name: &str, entries: Vec<RawEntry>) -> RawCategory {
    RawCategory { name: name.to_owned(), entries }
}

fn entry(name: &str, functions: Vec<RawFunction>) -> RawEntry {
    RawEntry { name: name.to_owned(), functions }
}

fn func(name: &str, sig: &str, desc: &str, examples: Vec<RawExample>) -> RawFunction {
    RawFunction {
        name: name.to_owned(),
        signature: RawSignature::Joined(sig.to_owned()),
        description: desc.to_owned(),
        examples: if examples.is_empty() { None } else { Some(examples) },
        warning: None,
    }
}

/// Single-function entry named after its function; the overwhelmingly common case.
fn doc(name: &str, sig: &str, desc: &str, examples: Vec<RawExample>) -> RawEntry {
    entry(name, vec![func(name, sig, desc, examples)])
}

/// Single-function entry carrying a usage warning instead of examples.
fn doc_warn(name: &str, sig: &str, desc: &str, warn: &str) -> RawEntry {
    let mut function = func(name, sig, desc, Vec::new());
    function.warning = Some(warn.to_owned());
    entry(name, vec![function])
}

/// Bare pre-formatted example block.
fn ex(code: &str) -> RawExample {
    RawExample::Text(code.to_owned())
}

/// Example with an explanation of what the code shows.
fn exd(code: &str, desc: &str) -> RawExample {
    RawExample::Code { code: code.to_owned(), description: Some(desc.to_owned()) }
}
