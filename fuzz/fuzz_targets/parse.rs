#![no_main]

use libfuzzer_sys::fuzz_target;
use monkey::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Scanning never fails; the last token is always EOF.
        let tokens = lexer::lex(s);
        assert!(tokens.last().is_some_and(|t| t.is_eof()));

        // Parsing never fails either; render whatever was recovered.
        let output = parser::parse(s);
        let _ = output.program.to_string();
    }
});
