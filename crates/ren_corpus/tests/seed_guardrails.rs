//! Guardrails for the shipped reference content.
//!
//! The seed goes through the same validator as external snapshots; these tests make a content
//! mistake fail in CI instead of panicking at first use in a consumer.

use std::collections::HashSet;

use ren_corpus::raw::RawCorpus;
use ren_corpus::{seed, validate};

#[test]
fn seed_content_validates_cleanly() {
    let raw = seed::raw();
    let corpus = validate(&raw).expect("seed content must validate");
    assert!(corpus.function_count() > 0);
}

#[test]
fn seed_sections_are_the_expected_doc_sets() {
    let corpus = seed::corpus();
    let names: Vec<&str> = corpus.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Language Overview", "Standard Library", "Built-in"]);
}

#[test]
fn seed_section_names_are_unique() {
    // Not a schema rule, but the shipped content should never shadow itself.
    let corpus = seed::corpus();
    let mut seen = HashSet::new();
    for section in corpus.sections() {
        assert!(seen.insert(&section.name), "duplicate section {:?}", section.name);
    }
}

#[test]
fn filesystem_category_keeps_authored_entry_order() {
    let corpus = seed::corpus();
    let filesystem = corpus
        .section("Standard Library")
        .and_then(|s| s.category("Filesystem"))
        .expect("Filesystem category");
    let names: Vec<&str> = filesystem.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["rename", "mkdir", "rmdir", "rm", "exists", "is_dir", "list_dir"]
    );
}

#[test]
fn parse_entry_documents_both_overloads() {
    let corpus = seed::corpus();
    let parse = corpus.entry("Standard Library", "parse").expect("parse entry");
    let names: Vec<&str> = parse.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["parse (int)", "parse (string)"]);
}

#[test]
fn warned_functions_carry_their_warnings() {
    let corpus = seed::corpus();
    let alloc = corpus.entry("Standard Library", "alloc").expect("alloc entry");
    assert!(alloc.functions[0].warning.as_deref().unwrap().contains("preferred"));

    let sp = corpus.entry("Built-in", "sp").expect("sp entry");
    assert_eq!(sp.functions[0].warning.as_deref(), Some("Probably shouldn't use this."));
}

#[test]
fn seed_round_trips_through_canonical_serialization() {
    let corpus = seed::corpus();
    let canonical = RawCorpus::from(corpus);
    let json = serde_json::to_string(&canonical).unwrap();
    let reparsed = RawCorpus::from_json_str(&json).unwrap();
    let again = validate(&reparsed).expect("canonical seed serialization must validate");
    assert_eq!(corpus, &again);
}
