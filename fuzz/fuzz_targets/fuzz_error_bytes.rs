// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz RestError decoding from arbitrary bytes.
//!
//! Verifies:
//! 1. Strict decoding never panics.
//! 2. Anything that decodes re-encodes to an equal value.
//! 3. Lossy decoding never panics and agrees with strict decoding.
//! 4. Rendering never panics.
#![no_main]
use libfuzzer_sys::fuzz_target;
use rest_error::RestError;

fuzz_target!(|data: &[u8]| {
    // --- Property 1 & 2: strict decode and round-trip ---
    let strict = RestError::from_bytes(data);
    if let Ok(ref err) = strict {
        let back = RestError::from_bytes(&err.to_bytes()).expect("re-encoded body must decode");
        assert_eq!(&back, err);
        let _ = serde_json::to_value(err).expect("RestError must serialize");
    }

    // --- Property 3: lossy decode ---
    let lossy = RestError::from_bytes_lossy(data);
    match strict {
        Ok(err) => assert_eq!(lossy, err),
        Err(_) => {
            assert_eq!(lossy.status_code(), 400);
            assert_eq!(lossy.kind(), "bad_request");
        }
    }

    // --- Property 4: rendering ---
    let rendered = lossy.render();
    assert!(rendered.starts_with("message: "));
});
