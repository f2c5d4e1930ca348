#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let first = strictjson::parse(data);
    let second = strictjson::parse(data);
    // Same buffer, fresh state: identical outcome.
    assert_eq!(first, second);

    if let Err(err) = &first {
        assert!(err.offset() <= data.len(), "offset past end of buffer");
    }

    // The wide path must agree with the narrow one on pure-ASCII input.
    if data.is_ascii() {
        let wide: Vec<u16> = data.iter().map(|&b| u16::from(b)).collect();
        match (&first, strictjson::parse_wide(&wide)) {
            (Ok(_), Ok(_)) => {}
            (Err(narrow), Err(wide)) => {
                assert_eq!(narrow.kind(), wide.kind());
                assert_eq!(narrow.offset(), wide.offset());
            }
            _ => panic!("narrow and wide parses disagree"),
        }
    }
});
