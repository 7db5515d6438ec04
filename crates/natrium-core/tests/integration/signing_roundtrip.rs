//! Ed25519 sign → verify roundtrips, cross-key rejection and error kinds.

use natrium_core::{CryptoError, ErrorKind, Natrium, SIGN_BYTES, SIGN_PUBLICKEYBYTES};

fn ctx() -> Natrium {
    Natrium::init().expect("init should succeed")
}

#[test]
fn roundtrip_1_byte_message() {
    let ctx = ctx();
    let kp = ctx.sign_keypair().expect("keygen should succeed");
    let sig = ctx.sign_detached(&[0x42], kp.secret.expose()).unwrap();
    assert_eq!(sig.len(), SIGN_BYTES);
    ctx.sign_verify_detached(&[0x42], &sig, &kp.public)
        .expect("verification should succeed");
}

#[test]
fn roundtrip_1mb_message() {
    let ctx = ctx();
    let kp = ctx.sign_keypair().unwrap();
    let message = vec![0xCD_u8; 1_048_576];
    let sig = ctx.sign_detached(&message, kp.secret.expose()).unwrap();
    let echoed = ctx.sign_verify_detached(&message, &sig, &kp.public).unwrap();
    assert_eq!(echoed.len(), message.len());
    assert!(std::ptr::eq(echoed, message.as_slice()), "echo must not copy");
}

#[test]
fn signing_is_deterministic() {
    let ctx = ctx();
    let kp = ctx.sign_keypair().unwrap();
    let a = ctx.sign_detached(b"same", kp.secret.expose()).unwrap();
    let b = ctx.sign_detached(b"same", kp.secret.expose()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cross_keypair_verification_fails() {
    let ctx = ctx();
    let kp_a = ctx.sign_keypair().unwrap();
    let kp_b = ctx.sign_keypair().unwrap();
    let sig = ctx.sign_detached(b"signed with key A", kp_a.secret.expose()).unwrap();
    let result = ctx.sign_verify_detached(b"signed with key A", &sig, &kp_b.public);
    assert!(matches!(result, Err(CryptoError::IncorrectSignature)));
}

#[test]
fn flipped_signature_bit_fails() {
    let ctx = ctx();
    let kp = ctx.sign_keypair().unwrap();
    let mut sig = ctx.sign_detached(b"message", kp.secret.expose()).unwrap();
    sig[10] ^= 0x04;
    let err = ctx.sign_verify_detached(b"message", &sig, &kp.public).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VerificationFailed);
}

#[test]
fn public_key_one_byte_short_is_a_size_error_not_a_crash() {
    let ctx = ctx();
    let kp = ctx.sign_keypair().unwrap();
    let sig = ctx.sign_detached(b"message", kp.secret.expose()).unwrap();
    let err = ctx
        .sign_verify_detached(b"message", &sig, &kp.public[..SIGN_PUBLICKEYBYTES - 1])
        .unwrap_err();
    assert!(matches!(
        err,
        CryptoError::InvalidPublicKeySize {
            expected: 32,
            actual: 31
        }
    ));
}

#[test]
fn all_zero_public_key_is_rejected_cleanly() {
    let ctx = ctx();
    let kp = ctx.sign_keypair().unwrap();
    let sig = ctx.sign_detached(b"message", kp.secret.expose()).unwrap();
    let result = ctx.sign_verify_detached(b"message", &sig, &[0u8; SIGN_PUBLICKEYBYTES]);
    assert!(matches!(result, Err(CryptoError::IncorrectSignature)));
}
