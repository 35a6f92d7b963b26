// FrodoKEM end-to-end tests through the public API

use frodokem_api::{Error, Kem, Pke, Serialize, SerializeSecret};
use frodokem_kem::frodo::{
    Frodo1344, Frodo1344Params, Frodo640, Frodo640Params, Frodo640Pke, Frodo976, FrodoCiphertext,
    FrodoKem, FrodoParams, FrodoPublicKey, FrodoSecretKey,
};
use frodokem_algorithms::{ExtendableOutputFunction, ShakeXof128};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

fn roundtrip<K: Kem>(seed: u64) {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let keypair = K::keypair(&mut rng).unwrap();
    let (pk, sk) = (K::public_key(&keypair), K::secret_key(&keypair));
    for _ in 0..3 {
        let (ct, ss1) = K::encapsulate(&mut rng, &pk).unwrap();
        let ss2 = K::decapsulate(&sk, &ct).unwrap();
        assert_eq!(
            *ss1.to_bytes_zeroizing(),
            *ss2.to_bytes_zeroizing(),
            "{} disagreed",
            K::name()
        );
    }
}

#[test]
fn test_agreement_all_sets() {
    roundtrip::<Frodo640>(1);
    roundtrip::<Frodo976>(2);
    roundtrip::<Frodo1344>(3);
}

fn sizes<P: FrodoParams>(pk: usize, sk: usize, ct: usize, ss: usize) {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let (public, secret) = FrodoKem::<P>::keypair(&mut rng).unwrap();
    let (ciphertext, shared) = FrodoKem::<P>::encapsulate(&mut rng, &public).unwrap();
    assert_eq!(public.to_bytes().len(), pk);
    assert_eq!(secret.to_bytes_zeroizing().len(), sk);
    assert_eq!(ciphertext.to_bytes().len(), ct);
    assert_eq!(shared.len(), ss);
}

#[test]
fn test_object_sizes() {
    sizes::<Frodo640Params>(9616, 19888, 9720, 16);
    sizes::<Frodo1344Params>(21520, 43088, 21632, 32);
}

#[test]
fn test_rng_determinism() {
    let run = || {
        let mut rng = ChaChaRng::seed_from_u64(99);
        let (pk, _) = Frodo640::keypair(&mut rng).unwrap();
        let (ct, ss) = Frodo640::encapsulate(&mut rng, &pk).unwrap();
        (pk.to_bytes(), ct.to_bytes(), ss)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_serialized_keys_interoperate() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    let (pk, sk) = Frodo640::keypair(&mut rng).unwrap();

    let pk_bytes = pk.to_bytes();
    let sk_bytes = sk.to_bytes_zeroizing();
    drop(sk);

    let pk = FrodoPublicKey::<Frodo640Params>::from_bytes(&pk_bytes).unwrap();
    let sk = FrodoSecretKey::<Frodo640Params>::from_bytes(&sk_bytes).unwrap();
    let (ct, ss1) = Frodo640::encapsulate(&mut rng, &pk).unwrap();
    let ct = FrodoCiphertext::<Frodo640Params>::from_bytes(&ct.to_bytes()).unwrap();
    assert_eq!(ss1, Frodo640::decapsulate(&sk, &ct).unwrap());
    assert_eq!(sk.public_key(), pk);
}

#[test]
fn test_wrong_lengths_are_reported() {
    assert!(matches!(
        FrodoPublicKey::<Frodo640Params>::from_bytes(&[0u8; 9615]),
        Err(Error::InvalidKey { .. })
    ));
    assert!(matches!(
        FrodoSecretKey::<Frodo640Params>::from_bytes(&[0u8; 100]),
        Err(Error::InvalidKey { .. })
    ));
    assert!(matches!(
        FrodoCiphertext::<Frodo640Params>::from_bytes(&[0u8; 9719]),
        Err(Error::InvalidCiphertext { .. })
    ));
    assert!(matches!(
        Frodo640::keypair_from_seed(&[0u8; 10]),
        Err(Error::InsufficientRandomness {
            needed: 48,
            available: 10,
            ..
        })
    ));
}

#[test]
fn test_corrupted_ciphertext_rejected_implicitly() {
    let (pk, sk) = Frodo640::keypair_from_seed(&[0x11u8; 48]).unwrap();
    let sk_bytes = sk.to_bytes_zeroizing();
    let mut rng = ChaChaRng::seed_from_u64(5);
    let (ct, ss) = Frodo640::encapsulate(&mut rng, &pk).unwrap();

    for _ in 0..8 {
        let mut bad = ct.clone();
        let pos = (rng.next_u32() as usize) % bad.len();
        bad.as_mut()[pos] ^= 1 << (rng.next_u32() % 8);

        let rejected = Frodo640::decapsulate(&sk, &bad).unwrap();
        assert_ne!(rejected, ss);
        assert_eq!(rejected, Frodo640::decapsulate(&sk, &bad).unwrap());

        // Fallback secret is XOF(ct || s)
        let expected = ShakeXof128::generate_parts(&[bad.as_ref(), &sk_bytes[..16]], 16).unwrap();
        assert_eq!(rejected.as_ref(), &expected[..]);
    }
}

#[test]
fn test_rejection_depends_on_secret_seed() {
    let mut rng = ChaChaRng::seed_from_u64(6);
    let (pk, sk) = Frodo640::keypair(&mut rng).unwrap();
    let (ct, _) = Frodo640::encapsulate(&mut rng, &pk).unwrap();

    let mut sk_bytes = sk.to_bytes_zeroizing();
    sk_bytes[0] ^= 0xff;
    let other = FrodoSecretKey::<Frodo640Params>::from_bytes(&sk_bytes).unwrap();

    let mut bad = ct.clone();
    bad.as_mut()[0] ^= 0x01;
    assert_ne!(
        Frodo640::decapsulate(&sk, &bad).unwrap(),
        Frodo640::decapsulate(&other, &bad).unwrap()
    );
    // The genuine path never reads s
    assert_eq!(
        Frodo640::decapsulate(&sk, &ct).unwrap(),
        Frodo640::decapsulate(&other, &ct).unwrap()
    );
}

#[test]
fn test_pke_statistical_correctness() {
    let mut rng = ChaChaRng::seed_from_u64(21);
    let (pk, sk) = Frodo640Pke::keypair(&mut rng).unwrap();
    let mut failures = 0;
    for _ in 0..20 {
        let mut msg = [0u8; 16];
        rng.fill_bytes(&mut msg);
        let ct = Frodo640Pke::encrypt(&pk, &msg, &mut rng).unwrap();
        if Frodo640Pke::decrypt(&sk, &ct).unwrap()[..] != msg[..] {
            failures += 1;
        }
    }
    assert_eq!(failures, 0);
}

#[test]
fn test_pke_key_works_with_kem_public_key() {
    let mut rng = ChaChaRng::seed_from_u64(23);
    let (pk, _) = Frodo640::keypair(&mut rng).unwrap();
    let msg = [0x3cu8; 16];
    // KEM and PKE share the public key format
    let ct = Frodo640Pke::encrypt(&pk, &msg, &mut rng).unwrap();
    assert_eq!(ct.len(), 9720);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_any_message_decapsulates(mu in prop::collection::vec(any::<u8>(), 16)) {
            let (pk, sk) = Frodo640::keypair_from_seed(&[0x5au8; 48]).unwrap();
            let (ct, ss) = Frodo640::encapsulate_with_message(&pk, &mu).unwrap();
            prop_assert_eq!(Frodo640::decapsulate(&sk, &ct).unwrap(), ss);
        }
    }
}
