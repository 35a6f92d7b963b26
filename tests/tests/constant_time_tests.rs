// Decapsulation must do the same hashing work whether or not the
// ciphertext re-encrypts correctly. Counted with an instrumented XOF
// rather than timed.

use frodokem_api::Kem;
use frodokem_tests::constant_time::{measure, CountingFrodo640, XofCounts};
use frodokem_kem::frodo::Frodo640;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

#[test]
fn test_xof_parity_genuine_vs_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = CountingFrodo640::keypair(&mut rng).unwrap();
    let (ct, ss) = CountingFrodo640::encapsulate(&mut rng, &pk).unwrap();

    let (genuine, genuine_counts) = measure(|| CountingFrodo640::decapsulate(&sk, &ct).unwrap());
    assert_eq!(genuine, ss);

    for &pos in &[0usize, 4000, 9719] {
        let mut bad = ct.clone();
        bad.as_mut()[pos] ^= 0x02;
        let (rejected, counts) = measure(|| CountingFrodo640::decapsulate(&sk, &bad).unwrap());
        assert_ne!(rejected, ss);
        assert_eq!(counts, genuine_counts, "flip at byte {}", pos);
    }

    // One instance per row of A, seedSE expansion, seed derivation and the
    // two candidate secrets
    assert_eq!(genuine_counts.instances, 640 + 1 + 1 + 2);
}

#[test]
fn test_xof_parity_all_zero_ciphertext() {
    let mut rng = ChaChaRng::seed_from_u64(43);
    let (pk, sk) = CountingFrodo640::keypair(&mut rng).unwrap();
    let (ct, _) = CountingFrodo640::encapsulate(&mut rng, &pk).unwrap();

    let (_, genuine) = measure(|| CountingFrodo640::decapsulate(&sk, &ct).unwrap());
    let zero = frodokem_kem::frodo::FrodoCiphertext::from_vec(vec![0u8; 9720]).unwrap();
    let (_, rejected) = measure(|| CountingFrodo640::decapsulate(&sk, &zero).unwrap());
    assert_eq!(genuine, rejected);
}

#[test]
fn test_instrumentation_does_not_change_results() {
    let seed = [0x24u8; 48];
    let (pk_a, sk_a) = CountingFrodo640::keypair_from_seed(&seed).unwrap();
    let (pk_b, _) = Frodo640::keypair_from_seed(&seed).unwrap();
    assert_eq!(pk_a.as_ref(), pk_b.as_ref());

    let mu = [0x42u8; 16];
    let (ct_a, ss_a) = CountingFrodo640::encapsulate_with_message(&pk_a, &mu).unwrap();
    let (ct_b, ss_b) = Frodo640::encapsulate_with_message(&pk_b, &mu).unwrap();
    assert_eq!(ct_a.as_ref(), ct_b.as_ref());
    assert_eq!(ss_a, ss_b);

    let (_, counts) = measure(|| CountingFrodo640::decapsulate(&sk_a, &ct_a).unwrap());
    assert_ne!(counts, XofCounts::default());
}
