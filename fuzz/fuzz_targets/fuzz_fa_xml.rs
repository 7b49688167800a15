#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(invoice) = ksef_naglowek::fa::from_fa_xml(s) {
            let _ = ksef_naglowek::header::generate_header(Some(&invoice), None);
        }
    }
});
