//! Integration tests for the serving boundary: hot reload semantics and the render adapter.

use std::sync::{Arc, OnceLock};

use proptest::prelude::*;
use rendocs::{DocService, RawCorpus, RenderSource};

fn shared_service() -> &'static DocService {
    static SERVICE: OnceLock<DocService> = OnceLock::new();
    SERVICE.get_or_init(DocService::builtin)
}

fn raw(json: &str) -> RawCorpus {
    RawCorpus::from_json_str(json).unwrap()
}

fn small_valid() -> RawCorpus {
    raw(r#"[
        {"name": "Tiny", "categories": [
            {"name": "Only", "entries": [
                {"name": "solo", "functions": [
                    {"name": "solo", "sig": "fn solo()", "desc": "The only function."}
                ]}
            ]}
        ]}
    ]"#)
}

fn invalid() -> RawCorpus {
    raw(r#"[
        {"name": "", "categories": [
            {"name": "C", "entries": [
                {"name": "x", "functions": [
                    {"name": "x", "sig": "", "desc": ""}
                ]}
            ]}
        ]}
    ]"#)
}

#[test]
fn service_starts_on_the_builtin_reference() {
    let service = DocService::builtin();
    let sections = service.get_sections();
    assert_eq!(sections[0].name, "Language Overview");
    assert!(service.get_entry("Standard Library", "rename").is_some());
}

#[test]
fn rejected_reload_keeps_the_old_snapshot_serving() {
    let service = DocService::builtin();
    let before = service.snapshot();

    let error = service.reload(&invalid()).unwrap_err();
    assert_eq!(error.violations.len(), 3, "the whole violation list is reported");

    // Same snapshot object, still answering queries.
    assert!(Arc::ptr_eq(&before, &service.snapshot()));
    assert!(!service.lookup("rename").is_empty());
}

#[test]
fn successful_reload_swaps_atomically_without_invalidating_readers() {
    let service = DocService::builtin();
    let in_flight = service.snapshot();

    service.reload(&small_valid()).unwrap();

    // New readers see the replacement...
    let sections = service.get_sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name, "Tiny");
    assert!(service.get_entry("Standard Library", "rename").is_none());

    // ...while the snapshot taken before the reload still answers from the old corpus.
    assert!(!in_flight.lookup_exact("rename").is_empty());
}

#[test]
fn adapter_results_carry_normalized_shapes() {
    let service = DocService::builtin();

    let docs = service.lookup("push");
    assert!(!docs.is_empty());
    let push = &docs[0];
    assert_eq!(push.section, "Standard Library");
    assert_eq!(push.category, "Data Structures");
    assert_eq!(push.entry, "push");
    assert!(!push.function.signatures.is_empty());
    assert!(!push.function.description.is_empty());

    let results = service.search("heap allocated list");
    assert!(!results.is_empty());
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn lookup_finds_every_overload_of_an_entry() {
    let service = DocService::builtin();
    // "parse" is one entry with two overload functions; the entry name finds both.
    let docs = service.lookup("parse");
    let names: Vec<&str> = docs.iter().map(|d| d.function.name.as_str()).collect();
    assert_eq!(names, ["parse (int)", "parse (string)"]);
}

#[test]
fn empty_queries_are_empty_results_never_errors() {
    let service = DocService::builtin();
    assert!(service.search("").is_empty());
    assert!(service.lookup("").is_empty());
    assert!(service.snapshot().list_category("").is_empty());
}

proptest! {
    #[test]
    fn adapter_queries_are_total_on_arbitrary_input(input in ".*") {
        let service = shared_service();
        // Misses and junk come back as empty results or None, never as panics or errors.
        let _ = service.search(&input);
        let _ = service.lookup(&input);
        let _ = service.get_entry(&input, &input);
        for result in service.search(&input) {
            prop_assert!(!result.doc.function.signatures.is_empty());
        }
    }
}

#[test]
fn rejected_snapshot_report_lists_every_violation_with_its_path() {
    let error = rendocs::validate(&invalid()).unwrap_err();
    insta::assert_snapshot!(error.to_report().trim_end(), @r"
    section[0].name: name must be a non-empty string
    section[0].category[0].entry[0].function[0].signature: signature must contain at least one non-empty overload line
    section[0].category[0].entry[0].function[0].description: description must be non-empty
    ");
}

#[test]
fn search_listing_ranks_by_score_then_corpus_order() {
    let corpus = rendocs::validate(&raw(r#"[
        {"name": "S", "categories": [
            {"name": "Hash Map", "entries": [
                {"name": "insert", "functions": [
                    {"name": "insert", "sig": "fn insert()", "desc": "Inserts into the hash map."}
                ]},
                {"name": "get", "functions": [
                    {"name": "get", "sig": "fn get()", "desc": "Reads from the hash map."}
                ]}
            ]}
        ]}
    ]"#))
    .unwrap();
    let service = DocService::new(corpus);

    let listing: Vec<String> = service
        .search("hash map")
        .iter()
        .map(|r| format!("{}  {} > {} > {}", r.score, r.doc.section, r.doc.category, r.doc.entry))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    4  S > Hash Map > insert
    4  S > Hash Map > get
    ");
}
