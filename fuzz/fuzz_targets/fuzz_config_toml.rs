#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and key suggestions must never panic
        let _ = folder_diff::config::parse_with_warnings(content, Path::new("fuzz.toml"));
        let _ = toml::from_str::<folder_diff::Config>(content);
    }
});
