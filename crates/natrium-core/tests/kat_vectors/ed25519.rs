//! RFC 8032 Section 7.1: Ed25519 known-answer tests through the
//! 64-byte `seed || public key` secret key format.

use natrium_core::Natrium;

use super::hex_to_bytes;

fn secret_key(seed_hex: &str, pk_hex: &str) -> Vec<u8> {
    let mut sk = hex_to_bytes(seed_hex);
    sk.extend_from_slice(&hex_to_bytes(pk_hex));
    sk
}

/// Test vector #1 (empty message).
#[test]
fn rfc8032_test_vector_1_empty_message() {
    let ctx = Natrium::init().unwrap();
    let pk = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    let sk = secret_key(
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        pk,
    );
    let expected_sig = hex_to_bytes(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
         5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    );

    let sig = ctx.sign_detached(b"", &sk).expect("signing should succeed");
    assert_eq!(sig.as_slice(), expected_sig.as_slice());

    let echoed = ctx
        .sign_verify_detached(b"", &expected_sig, &hex_to_bytes(pk))
        .expect("published signature must verify");
    assert!(echoed.is_empty());
}

/// Test vector #2 (single byte `0x72`).
#[test]
fn rfc8032_test_vector_2_single_byte() {
    let ctx = Natrium::init().unwrap();
    let pk = "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c";
    let sk = secret_key(
        "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        pk,
    );
    let expected_sig = hex_to_bytes(
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
         085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    );

    let sig = ctx.sign_detached(&[0x72], &sk).unwrap();
    assert_eq!(sig.as_slice(), expected_sig.as_slice());

    let echoed = ctx
        .sign_verify_detached(&[0x72], &expected_sig, &hex_to_bytes(pk))
        .unwrap();
    assert_eq!(echoed, &[0x72]);
}
