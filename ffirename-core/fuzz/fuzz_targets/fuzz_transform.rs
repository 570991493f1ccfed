#![no_main]

use ffirename_core::transform;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    // Bias half the inputs toward the prefixed grammar
    let candidates = [input.to_string(), format!("FFI-{input}")];

    for name in &candidates {
        if let Ok(Some(renamed)) = transform(name) {
            assert!(name.starts_with("FFI-"));
            assert!(renamed.matches('_').count() >= 5);
        }
    }
});
