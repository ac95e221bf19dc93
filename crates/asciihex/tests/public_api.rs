#![expect(missing_docs)]

use std::thread;

use asciihex::{
    DecodeError, Escaped, Scanner, SyntaxError, Token, TokenKind, decode, decode_into, encode,
    encode_into, encoded_len, scan,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_thread_safe() {
    assert_send_sync::<Scanner<'static>>();
    assert_send_sync::<Token>();
    assert_send_sync::<DecodeError>();
    assert_send_sync::<Escaped<'static>>();
}

#[test]
fn independent_decodes_run_concurrently() {
    let handles: Vec<_> = (0..8u8)
        .map(|seed| {
            thread::spawn(move || {
                let data: Vec<u8> = (0..=255u8).map(|b| b.wrapping_mul(seed | 1)).collect();
                let text = encode(&data);
                assert_eq!(decode(&text).unwrap(), data);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn consumer_can_stop_after_the_first_token() {
    let mut scanner = scan("x~ZZ");
    let first = scanner.next().unwrap();
    assert_eq!(first.kind, TokenKind::Byte(b'x'));
    assert_eq!(scanner.position(), 1);
    drop(scanner);
}

#[test]
fn tokens_convert_into_results() {
    let results: Vec<Result<Token, DecodeError>> =
        Scanner::new("a^").map(Token::into_result).collect();
    assert!(results[0].is_ok());
    let err = results[1].clone().unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::UnexpectedEndOfInput);
    assert_eq!(err.position(), 2);
    assert!(Token {
        kind: TokenKind::EndOfInput,
        pos: 0
    }
    .is_terminal());
}

#[test]
fn appending_helpers_compose() {
    let mut text = String::new();
    encode_into(b"\x00", &mut text);
    encode_into(b"~", &mut text);
    assert_eq!(text, "^@~~");
    assert_eq!(encoded_len(b"\x00~"), text.len());
    assert_eq!(Escaped(b"\x00~").to_string(), text);

    let mut out = Vec::new();
    decode_into(&text, &mut out).unwrap();
    decode_into("~FF", &mut out).unwrap();
    assert_eq!(out, [0x00, b'~', 0xFF]);
}
