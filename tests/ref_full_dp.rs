use std::time::Duration;

use proptest::prelude::*;
use yielding_lev::{distance, Scheduler, SchedulerBuilder};

fn full_levenshtein(s: &[u8], t: &[u8]) -> u32 {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for i in 0..=n {
        dp[i][0] = i as u32;
    }
    for j in 0..=m {
        dp[0][j] = j as u32;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = if s[i - 1] == t[j - 1] { 0 } else { 1 };
            let del = dp[i - 1][j] + 1;
            let ins = dp[i][j - 1] + 1;
            let sub = dp[i - 1][j - 1] + cost;
            dp[i][j] = del.min(ins).min(sub);
        }
    }
    dp[n][m]
}

/// Every phase checks the clock after every cell and the clock always says
/// the quantum is over, so each step writes exactly one cell.
fn one_cell_per_step() -> Scheduler {
    SchedulerBuilder::new()
        .with_quantum(Duration::ZERO)
        .with_init_check_interval(1)
        .with_fill_check_interval(1)
        .with_inline_init_cutoff(0)
        .build()
}

#[test]
fn textbook_pairs() {
    assert_eq!(distance(b"kitten", b"sitting").unwrap(), 3);
    assert_eq!(distance(b"flaw", b"lawn").unwrap(), 2);
    assert_eq!(distance(b"", b"").unwrap(), 0);
    assert_eq!(distance(b"", b"abc").unwrap(), 3);
    assert_eq!(distance(b"intention", b"execution").unwrap(), 5);
    assert_eq!(distance(b"GATTACA", b"GCATGCU").unwrap(), 4);
}

#[test]
fn non_utf8_bytes_are_compared_bytewise() {
    assert_eq!(distance(&[0xff, 0x00, 0x80], &[0xff, 0x80]).unwrap(), 1);
}

proptest! {
    #[test]
    fn matches_full_dp(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(distance(s, t).unwrap(), full_levenshtein(s, t));
    }

    #[test]
    fn symmetric(a in "[a-d]{0,10}", b in "[a-d]{0,10}") {
        prop_assert_eq!(
            distance(a.as_bytes(), b.as_bytes()).unwrap(),
            distance(b.as_bytes(), a.as_bytes()).unwrap()
        );
    }

    #[test]
    fn identity_and_empty(a in proptest::collection::vec(any::<u8>(), 0..32)) {
        prop_assert_eq!(distance(&a, &a).unwrap(), 0);
        prop_assert_eq!(distance(&a, b"").unwrap(), a.len() as u32);
        prop_assert_eq!(distance(b"", &a).unwrap(), a.len() as u32);
    }

    #[test]
    fn triangle_inequality(
        a in "[ab]{0,8}",
        b in "[ab]{0,8}",
        c in "[ab]{0,8}",
    ) {
        let (a, b, c) = (a.as_bytes(), b.as_bytes(), c.as_bytes());
        let ac = distance(a, c).unwrap();
        let ab = distance(a, b).unwrap();
        let bc = distance(b, c).unwrap();
        prop_assert!(ac <= ab + bc);
    }

    #[test]
    fn bounded_by_longer_input(a in "[xyz]{0,10}", b in "[xyz]{0,10}") {
        let d = distance(a.as_bytes(), b.as_bytes()).unwrap();
        prop_assert!(d as usize <= a.len().max(b.len()));
        prop_assert!(d as usize >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn quantum_count_invariance(a in "[ACGT]{0,10}", b in "[ACGT]{0,10}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let whole = Scheduler::new().compute(s, t).unwrap();
        let sliced = one_cell_per_step().compute(s, t).unwrap();
        prop_assert_eq!(whole, sliced);
    }
}
