use aes::{Aes128, Aes256};

use crate::ffx::FpeInteger;

const KEY: &[u8; 16] = b"testtesttestaaaa";

#[test]
fn zero_rounds_is_identity() {
    for (radix, width) in [(2, 8), (10, 7), (36, 5), (2, 96)] {
        let ff = FpeInteger::<Aes128>::with_rounds(KEY, 0, radix, width).unwrap();
        let max = ff.domain_size() - 1;
        for m in (0..64).chain(Some(max)) {
            assert_eq!(ff.encrypt(m), Ok(m));
            assert_eq!(ff.decrypt(m), Ok(m));
        }
    }
}

#[test]
fn single_round_only_touches_high_half() {
    // Round 0 adds into the high half, so the low digits survive.
    let ff = FpeInteger::<Aes128>::with_rounds(KEY, 1, 10, 6).unwrap();
    for m in [0, 1, 999, 123_456, 999_999] {
        let ct = ff.encrypt(m).unwrap();
        assert_eq!(ct % 1_000, m % 1_000);
        assert_eq!(ff.decrypt(ct), Ok(m));
    }
}

#[test]
fn odd_round_counts() {
    for rounds in [1, 3, 7, 9, 11] {
        let ff = FpeInteger::<Aes128>::with_rounds(KEY, rounds, 10, 4).unwrap();
        for m in 0..10_000 {
            let ct = ff.encrypt(m).unwrap();
            assert!(ct < 10_000);
            assert_eq!(ff.decrypt(ct), Ok(m));
        }
    }
}

#[test]
fn test_18_rounds() {
    let key = [0u8; 32];
    let ff = FpeInteger::<Aes256>::with_rounds(&key, 18, 2, 24).unwrap();
    let ten = FpeInteger::<Aes256>::binary(&key, 24).unwrap();

    let pt = 0xefcdab;
    let ct = ff.encrypt(pt).unwrap();
    assert_eq!(ct, 7778966);
    assert_ne!(ct, ten.encrypt(pt).unwrap());
    assert_eq!(ff.decrypt(ct), Ok(pt));
}
