#![no_main]
use libfuzzer_sys::fuzz_target;
use csvtojson::{Options, convert_reader};

fuzz_target!(|data: &[u8]| {
    let opts = Options {
        comment: Some('#'),
        ..Options::default()
    };
    if let Ok(out) = convert_reader(data, &opts) {
        let value: serde_json::Value = serde_json::from_slice(&out)
            .unwrap_or_else(|e| panic!("invalid JSON output: {}\n{}", e, String::from_utf8_lossy(&out)));
        assert!(value.is_array());
    }
});
