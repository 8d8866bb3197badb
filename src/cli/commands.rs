//! Command implementations.
//!
//! Each command builds its output from the public query contract only; nothing here reaches
//! into index internals.

use std::fs;
use std::path::Path;

use ren_corpus::{RawCorpus, validate};

use crate::adapter::RenderSource;
use crate::cli::{CliError, CliResult};
use crate::service::DocService;

/// Build the service this invocation queries: the built-in reference, or a snapshot file.
pub fn open_service(snapshot: Option<&Path>) -> CliResult<DocService> {
    match snapshot {
        None => Ok(DocService::builtin()),
        Some(path) => {
            let raw = load_raw(path)?;
            let corpus = validate(&raw).map_err(|error| {
                CliError::failure(format!("{}:\n{}", path.display(), error.to_report()))
            })?;
            Ok(DocService::new(corpus))
        }
    }
}

/// `sections`: list doc sections with their categories.
pub fn sections(service: &DocService) -> CliResult<()> {
    for section in service.get_sections() {
        println!("{}", section.name);
        for category in &section.categories {
            println!("  {} ({} entries)", category.name, category.entries.len());
        }
    }
    Ok(())
}

/// `category <name>`: list the entries of a category in authored order.
pub fn category(service: &DocService, name: &str) -> CliResult<()> {
    let snapshot = service.snapshot();
    let entries = snapshot.list_category(name);
    if entries.is_empty() {
        println!("no category named {name:?}");
        return Ok(());
    }
    for &reference in entries {
        if let Some(hit) = snapshot.resolve_entry(reference) {
            println!("{} > {} > {}", hit.section.name, hit.category.name, hit.entry.name);
        }
    }
    Ok(())
}

/// `lookup <name>`: case-insensitive exact lookup.
pub fn lookup(service: &DocService, name: &str) -> CliResult<()> {
    let docs = service.lookup(name);
    if docs.is_empty() {
        println!("no entry or function named {name:?}");
        return Ok(());
    }
    for doc in docs {
        println!("{} > {} > {}", doc.section, doc.category, doc.entry);
        for signature in &doc.function.signatures {
            println!("    {signature}");
        }
        println!("  {}", doc.function.description);
        if let Some(warning) = &doc.function.warning {
            println!("  warning: {warning}");
        }
        println!();
    }
    Ok(())
}

/// `search <term>`: scored full-text search, best first.
pub fn search(service: &DocService, term: &str, limit: usize) -> CliResult<()> {
    let results = service.search(term);
    if results.is_empty() {
        println!("no matches for {term:?}");
        return Ok(());
    }
    for result in results.iter().take(limit) {
        println!(
            "{:>3}  {} > {} > {}",
            result.score, result.doc.section, result.doc.category, result.doc.entry
        );
    }
    let shown = results.len().min(limit);
    if shown < results.len() {
        println!("({} more; raise --limit to see them)", results.len() - shown);
    }
    Ok(())
}

/// `check <file>`: validate a snapshot file, printing the complete violation report.
///
/// With `--canonical`, a valid snapshot is re-serialized in canonical form (canonical field
/// spellings, unified example shapes) to stdout.
pub fn check(path: &Path, canonical: bool) -> CliResult<()> {
    let raw = load_raw(path)?;
    match validate(&raw) {
        Ok(corpus) => {
            if canonical {
                let text = serde_json::to_string_pretty(&RawCorpus::from(&corpus))
                    .map_err(|error| CliError::failure(format!("cannot serialize: {error}")))?;
                println!("{text}");
            } else {
                println!(
                    "{}: ok ({} sections, {} functions)",
                    path.display(),
                    corpus.sections().len(),
                    corpus.function_count()
                );
            }
            Ok(())
        }
        Err(error) => {
            // The full report in one pass, rendered as rich diagnostics.
            eprintln!("{:?}", miette::Report::new(error.clone()));
            Err(CliError::failure(format!(
                "{}: rejected with {} violation(s)",
                path.display(),
                error.violations.len()
            )))
        }
    }
}

fn load_raw(path: &Path) -> CliResult<RawCorpus> {
    let text = fs::read_to_string(path)
        .map_err(|error| CliError::failure(format!("cannot read {}: {error}", path.display())))?;
    RawCorpus::from_json_str(&text)
        .map_err(|error| CliError::failure(format!("cannot parse {}: {error}", path.display())))
}
