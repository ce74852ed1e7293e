#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_stats::extract::extract_stats;

fuzz_target!(|data: &[u8]| {
    // Arbitrary markup must never panic, and must always produce a stamped record
    if let Ok(html) = std::str::from_utf8(data) {
        let record = extract_stats(html, "fuzz").expect("extraction tolerates any markup");
        assert!(record.last_updated.is_some());
    }
});
