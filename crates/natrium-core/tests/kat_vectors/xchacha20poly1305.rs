//! draft-irtf-cfrg-xchacha, Appendix A.3.1: XChaCha20-Poly1305 AEAD.

use natrium_core::Natrium;

use super::hex_to_bytes;

const PLAINTEXT: &[u8] = b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";

fn key() -> Vec<u8> {
    (0x80u8..0xa0).collect()
}

fn nonce() -> Vec<u8> {
    (0x40u8..0x58).collect()
}

fn expected_combined() -> Vec<u8> {
    hex_to_bytes(
        "bd6d179d3e83d43b9576579493c0e939572a1700252bfaccbed2902c21396cbb\
         731c7f1b0b4aa6440bf3a82f4eda7e39ae64c6708c54c216cb96b72e1213b452\
         2f8c9ba40db5d945b11b69b982c1bb9e3f3fac2bc369488f76b2383565d3fff9\
         21f9664c97637da9768812f615c68b13b52e\
         c0875924c1c7987947deafd8780acf49",
    )
}

#[test]
fn draft_a_3_1_encrypt() {
    let ctx = Natrium::init().unwrap();
    let aad = hex_to_bytes("50515253c0c1c2c3c4c5c6c7");
    let ct = ctx
        .aead_encrypt(PLAINTEXT, &aad, &nonce(), &key())
        .expect("encrypt should succeed");
    assert_eq!(ct, expected_combined());
}

#[test]
fn draft_a_3_1_decrypt() {
    let ctx = Natrium::init().unwrap();
    let aad = hex_to_bytes("50515253c0c1c2c3c4c5c6c7");
    let pt = ctx
        .aead_decrypt(&expected_combined(), &aad, &nonce(), &key())
        .expect("published ciphertext must authenticate");
    assert_eq!(pt.expose(), PLAINTEXT);
}

/// Empty message, empty AD: output is the bare tag.
#[test]
fn empty_message_tag_only() {
    let ctx = Natrium::init().unwrap();
    let ct = ctx.aead_encrypt(b"", b"", &[9u8; 24], &[7u8; 32]).unwrap();
    assert_eq!(ct, hex_to_bytes("ae202d5fa2cf2692b85fecc6994810f6"));
}
