use proptest::prelude::*;
use sm2dsa::{
    CurveParams, SecretKey,
    dsa::{
        Signature, SigningKey,
        signature::{RandomizedSigner, Verifier},
    },
    num_bigint::BigUint,
};

const IDENTITY: &str = "test@example.com";

/// Helper function to create a signing key from test data
fn create_test_signing_key() -> SigningKey {
    // Use a fixed test key for deterministic testing
    let n = &CurveParams::sm2().n;
    let d = BigUint::from_bytes_be(&[42u8; 32]) % (n - 1u32) + 1u32;
    SigningKey::new(IDENTITY, &SecretKey::new(d).unwrap()).unwrap()
}

fn sign(sk: &SigningKey, msg: &[u8]) -> Signature {
    sk.try_sign_with_rng(&mut rand::thread_rng(), msg).unwrap()
}

#[test]
fn test_varying_message_lengths() {
    let sk = create_test_signing_key();
    let test_messages = vec![
        vec![],          // Empty message
        vec![1u8; 1],    // 1 byte
        vec![2u8; 32],   // 32 bytes
        vec![3u8; 1024], // 1KB
    ];

    for msg in test_messages {
        let sig = sign(&sk, &msg);
        assert!(sk.verifying_key().verify(&msg, &sig).is_ok());
    }
}

#[test]
fn test_signature_tampering() {
    let sk = create_test_signing_key();
    let msg = b"test message";
    let sig = sign(&sk, msg);
    let mut tampered_sig = sig.to_bytes();

    // Modify each byte of signature
    for i in 0..64 {
        tampered_sig[i] ^= 1;
        match Signature::from_bytes(&tampered_sig) {
            Err(_) => (), // pushed out of range: rejected at parse time
            Ok(invalid_sig) => {
                assert!(sk.verifying_key().verify(msg, &invalid_sig).is_err());
            }
        }
        tampered_sig[i] ^= 1; // Restore
    }
}

#[test]
fn test_special_messages() {
    let sk = create_test_signing_key();
    let special_msgs = vec![
        vec![0u8; 32],      // All zeros
        vec![255u8; 32],    // All ones
        b"\n\r\t".to_vec(), // Control chars
    ];

    for msg in special_msgs {
        let sig = sign(&sk, &msg);
        assert!(sk.verifying_key().verify(&msg, &sig).is_ok());
    }
}

#[test]
fn test_distinct_identities_do_not_cross_verify() {
    let secret_key = SecretKey::random(&mut rand::thread_rng()).unwrap();
    let sk_a = SigningKey::new("alice@example.com", &secret_key).unwrap();
    let sk_b = SigningKey::new("bob@example.com", &secret_key).unwrap();
    let msg = b"test message";

    let sig = sign(&sk_a, msg);
    assert!(sk_a.verifying_key().verify(msg, &sig).is_ok());
    assert!(sk_b.verifying_key().verify(msg, &sig).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_signature_consistency(
        msg1 in any::<Vec<u8>>(),
        msg2 in any::<Vec<u8>>()
    ) {
        let sk = create_test_signing_key();
        let sig1 = sign(&sk, &msg1);
        let sig2 = sign(&sk, &msg1); // Same message
        let sig3 = sign(&sk, &msg2); // Different message

        // Same message should verify with both signatures
        prop_assert!(sk.verifying_key().verify(&msg1, &sig1).is_ok());
        prop_assert!(sk.verifying_key().verify(&msg1, &sig2).is_ok());

        // Different messages should have different signatures
        if msg1 != msg2 {
            prop_assert_ne!(sig1.to_bytes(), sig3.to_bytes());
        }
    }
}
