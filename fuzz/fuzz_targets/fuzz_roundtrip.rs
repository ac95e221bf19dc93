#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    data: Vec<u8>,
    /// Where to cut the encoded text when checking early termination.
    cut: u16,
}

fuzz_target!(|input: Input| {
    let text = asciihex::encode(&input.data);
    assert_eq!(text.len(), asciihex::encoded_len(&input.data));
    assert!(text.bytes().all(|b| (0x20..=0x7E).contains(&b)));

    let decoded = asciihex::decode(&text).expect("encoder output must decode");
    assert_eq!(decoded, input.data);

    // Pulling a prefix of the token stream must agree with the full decode.
    let take = usize::from(input.cut) % (input.data.len() + 1);
    let prefix: Vec<u8> = asciihex::scan(&text)
        .take(take)
        .filter_map(|t| t.byte())
        .collect();
    assert_eq!(prefix, input.data[..take]);
});
