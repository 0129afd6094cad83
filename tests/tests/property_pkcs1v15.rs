//! Property-based tests for RSASSA-PKCS1-v1_5

use proptest::prelude::*;
use proptest::sample::Index;
use rsassa_sign::traditional::rsa::{encode, HashAlgorithm, Pkcs1v15, VerifyOutcome};
use rsassa_sign::Error;
use rsassa_tests::rsa1024;

/// Arbitrary message, empty included
fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

fn hash() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

proptest! {
    // Every case performs at least one private-key exponentiation
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn sign_verify_roundtrip(msg in message(), hash in hash()) {
        let (public, private) = rsa1024();
        let scheme = Pkcs1v15::new(hash);

        let sig = scheme.sign(&private, &msg).unwrap();
        prop_assert_eq!(sig.len(), public.size());
        prop_assert_eq!(
            scheme.verify(&public, &msg, sig.as_bytes()).unwrap(),
            VerifyOutcome::Valid
        );
    }

    #[test]
    fn signing_is_deterministic(msg in message()) {
        let (_, private) = rsa1024();
        let scheme = Pkcs1v15::default();

        let a = scheme.sign(&private, &msg).unwrap();
        let b = scheme.sign(&private, &msg).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn tampered_message_is_rejected(
        msg in prop::collection::vec(any::<u8>(), 1..512),
        at in any::<Index>(),
        flip in 1u8..=255,
    ) {
        let (public, private) = rsa1024();
        let scheme = Pkcs1v15::default();
        let sig = scheme.sign(&private, &msg).unwrap();

        let mut tampered = msg.clone();
        tampered[at.index(msg.len())] ^= flip;
        prop_assert!(!scheme.verify(&public, &tampered, sig.as_bytes()).unwrap().is_valid());
    }

    #[test]
    fn tampered_signature_is_rejected(msg in message(), bit in 0usize..1024) {
        let (public, private) = rsa1024();
        let scheme = Pkcs1v15::default();
        let mut sig = scheme.sign(&private, &msg).unwrap().into_vec();

        sig[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!scheme.verify(&public, &msg, &sig).unwrap().is_valid());
    }
}

proptest! {
    #[test]
    fn encoding_fills_k_bytes(msg in message(), k in 62usize..600) {
        let em = encode(HashAlgorithm::Sha256, &msg, k).unwrap();
        let digest = HashAlgorithm::Sha256.digest(&msg).unwrap();
        let bytes = em.as_bytes();

        prop_assert_eq!(bytes.len(), k);
        prop_assert_eq!(&bytes[..2], &[0x00u8, 0x01][..]);
        prop_assert!(bytes[2..k - 52].iter().all(|&b| b == 0xff));
        prop_assert_eq!(bytes[k - 52], 0x00);
        prop_assert_eq!(&bytes[k - 32..], digest.as_ref());
    }

    #[test]
    fn encoding_below_minimum_fails(msg in message(), k in 0usize..62) {
        prop_assert_eq!(
            encode(HashAlgorithm::Sha256, &msg, k),
            Err(Error::EncodingTooShort { required: 62, actual: k })
        );
    }
}
