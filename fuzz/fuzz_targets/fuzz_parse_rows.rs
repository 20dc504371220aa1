#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = csvtojson::parse_rows(s, ',', None);
        let _ = csvtojson::parse_rows(s, ';', Some('#'));
    }
});
