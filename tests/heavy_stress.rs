#![cfg(feature = "heavy")]
use std::time::{Duration, Instant};

use rand::{rngs::StdRng, Rng, SeedableRng};
use yielding_lev::{Scheduler, Step};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_many_quanta() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 6_000);
    let t = random_dna(&mut rng, 6_000);
    let scheduler = Scheduler::new();
    let mut handle = scheduler.begin(&s, &t).unwrap();
    let mut worst = Duration::ZERO;
    let d = loop {
        let started = Instant::now();
        let step = scheduler.step(&mut handle);
        worst = worst.max(started.elapsed());
        if let Step::Done(d) = step {
            break d;
        }
    };
    assert!(d <= 6_000);
    assert!(handle.steps() > 1, "36M cells should not fit one quantum");
    // Generous: one throttle interval of overshoot on a slow CI machine.
    assert!(worst < Duration::from_millis(50), "worst quantum {worst:?}");
}

#[test]
fn heavy_unbalanced_initialization_yields() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = random_dna(&mut rng, 4_000_000);
    let t = random_dna(&mut rng, 1);
    let scheduler = Scheduler::new();
    let mut handle = scheduler.begin(&s, &t).unwrap();
    assert!(!handle.checkpoint().unwrap().matrix_initialized());
    while scheduler.step(&mut handle) == Step::Continue {}
    let d = handle.distance().unwrap();
    assert!(d == 3_999_999 || d == 4_000_000);
}
