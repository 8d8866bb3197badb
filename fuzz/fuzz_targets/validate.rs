#![no_main]

use libfuzzer_sys::fuzz_target;
use ren_corpus::{RawCorpus, validate};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the snapshot parser
        if let Ok(raw) = RawCorpus::from_json_str(s) {
            // If parsing succeeds, fuzz the validator; rejection is fine, panicking is not
            let _ = validate(&raw);
        }
    }
});
