#![no_main]

use asciihex::{Scanner, TokenKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut last_pos = 0;
    let mut bytes = Vec::new();
    let mut outcome = None;

    for token in Scanner::new(data) {
        assert!(token.pos >= last_pos && token.pos <= data.len());
        last_pos = token.pos;
        match token.kind {
            TokenKind::Byte(b) => bytes.push(b),
            TokenKind::EndOfInput => outcome = Some(Ok(())),
            TokenKind::Error(err) => outcome = Some(Err((err, token.pos))),
        }
    }

    match (asciihex::decode(data), outcome.expect("stream must end with a terminal token")) {
        (Ok(decoded), Ok(())) => {
            assert_eq!(decoded, bytes);
            // Valid input re-encodes to the canonical form, which decodes
            // to the same bytes.
            assert_eq!(asciihex::decode(&asciihex::encode(&decoded)).unwrap(), decoded);
        }
        (Err(err), Err((kind, pos))) => {
            assert_eq!(err.kind(), &kind);
            assert_eq!(err.position(), pos);
        }
        (left, right) => panic!("decode and scan disagree: {left:?} vs {right:?}"),
    }
});
