use proptest::prelude::*;
use randkey_entropy::{EntropySource, SystemEntropy};

const TRIALS: usize = 100_000;

#[test]
fn residues_are_equally_likely() {
    let source = SystemEntropy::new();
    let upper = 7_u64;
    let mut counts = [0_usize; 7];

    for _ in 0..TRIALS {
        let value = source.uniform(upper).unwrap();
        counts[value as usize] += 1;
    }

    // Expected 14285.7 per bucket with a standard deviation of about 111;
    // a band of +-1000 is over nine deviations wide.
    let expected = TRIALS as f64 / upper as f64;
    for (residue, count) in counts.iter().enumerate() {
        let deviation = (*count as f64 - expected).abs();
        assert!(
            deviation < 1_000.0,
            "residue {residue} drawn {count} times, expected about {expected:.0}"
        );
    }
}

#[test]
fn consecutive_draws_differ() {
    let source = SystemEntropy::new();
    let first = source.next_u64().unwrap();
    let second = source.next_u64().unwrap();
    assert_ne!(first, second);
}

proptest! {
    #[test]
    fn uniform_never_reaches_upper_bound(upper in 1_u64..) {
        let value = SystemEntropy::new().uniform(upper).unwrap();
        prop_assert!(value < upper);
    }
}
