#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_stats::models::StatsRecord;

fuzz_target!(|data: &[u8]| {
    // Parsing a hand-edited stats file should return Ok or Err, never panic
    let _ = serde_yaml::from_slice::<StatsRecord>(data);
});
