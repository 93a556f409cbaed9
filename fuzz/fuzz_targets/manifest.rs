#![no_main]

use beangen::{FailurePolicy, SupplierCodegen, parse_manifest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // If the manifest parses, every bean must generate or be skipped without panicking
        if let Ok(beans) = parse_manifest(s) {
            let _ = SupplierCodegen::default()
                .with_failure_policy(FailurePolicy::Skip)
                .generate(&beans);
        }
    }
});
