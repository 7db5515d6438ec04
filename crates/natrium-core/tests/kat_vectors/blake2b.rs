//! BLAKE2b known-answer tests (RFC 7693 Appendix A and the reference
//! keyed KAT), checked through `generic_hash`.

use natrium_core::Natrium;

use super::hex_to_bytes;

/// RFC 7693 Appendix A: unkeyed BLAKE2b-512("abc").
#[test]
fn rfc7693_abc_unkeyed() {
    let ctx = Natrium::init().unwrap();
    let expected = hex_to_bytes(
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
         7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
    );
    let out = ctx.generic_hash(b"abc", b"", 64).unwrap();
    assert_eq!(out, expected);
}

/// Reference keyed KAT, first entry: key `00..3f`, empty input.
///
/// Exercises the path where the padded key block is the final block.
#[test]
fn keyed_kat_empty_message() {
    let ctx = Natrium::init().unwrap();
    let key: Vec<u8> = (0u8..64).collect();
    let expected = hex_to_bytes(
        "10ebb67700b1868efb4417987acf4690ae9d972fb7a590c2f02871799aaa4786\
         b5e996e8f0f4eb981fc214b005f42d2ff4233499391653df7aefcbc13fc51568",
    );
    let out = ctx.generic_hash(b"", &key, 64).unwrap();
    assert_eq!(out, expected);
}

/// Short digest with a 32-byte key: the digest length is a hash parameter,
/// not a truncation.
#[test]
fn keyed_16_byte_digest() {
    let ctx = Natrium::init().unwrap();
    let key = [b'k'; 32];
    let expected = hex_to_bytes("b77cf54c3af4d2165382effe4d5ef5fa");
    let out = ctx.generic_hash(b"hello", &key, 16).unwrap();
    assert_eq!(out, expected);
}

/// Reference keyed KAT, last entry: key `00..3f`, input `00..fe`.
#[test]
fn keyed_kat_last_entry() {
    let ctx = Natrium::init().unwrap();
    let key: Vec<u8> = (0u8..64).collect();
    let message: Vec<u8> = (0u8..255).collect();
    let expected = hex_to_bytes(
        "142709d62e28fcccd0af97fad0f8465b971e82201dc51070faa0372aa43e9248\
         4be1c1e73ba10906d5d1853db6a4106e0a7bf9800d373d6dee2d46d62ef2a461",
    );
    let out = ctx.generic_hash(&message, &key, 64).unwrap();
    assert_eq!(out, expected);
}

/// Keyed input of exactly one block: the message block must stay buffered
/// and be compressed as the final block.
#[test]
fn keyed_message_of_exactly_one_block() {
    let ctx = Natrium::init().unwrap();
    let key: Vec<u8> = (0u8..64).collect();
    let message: Vec<u8> = (0u8..128).collect();
    let expected = hex_to_bytes(
        "72065ee4dd91c2d8509fa1fc28a37c7fc9fa7d5b3f8ad3d0d7a25626b57b1b44\
         788d4caf806290425f9890a3a2a35a905ab4b37acfd0da6e4517b2525c9651e4",
    );
    let out = ctx.generic_hash(&message, &key, 64).unwrap();
    assert_eq!(out, expected);
}
