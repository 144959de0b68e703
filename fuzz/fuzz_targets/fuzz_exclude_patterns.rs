#![no_main]

use libfuzzer_sys::fuzz_target;

use folder_diff::domain::value_objects::ExcludePatterns;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut lines = text.lines();
        let name = lines.next().unwrap_or_default();
        if let Ok(patterns) = ExcludePatterns::new(lines) {
            let _ = patterns.is_excluded(name);
        }
    }
});
