//! Example: two long computations sharing one thread with a heartbeat task.
//!
//! Run with:
//! `cargo run --example interleave`
//!
//! The heartbeat keeps ticking while both distances are computed, because
//! every quantum ends by handing control back to the executor.

use std::cell::Cell;
use std::rc::Rc;

use yielding_lev::Scheduler;

fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| b'a' + ((i as u8).wrapping_mul(seed) % 4)).collect()
}

fn main() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let local = tokio::task::LocalSet::new();

    local.block_on(&runtime, async {
        let beats = Rc::new(Cell::new(0u64));
        let done = Rc::new(Cell::new(false));
        let heartbeat = {
            let beats = beats.clone();
            let done = done.clone();
            tokio::task::spawn_local(async move {
                while !done.get() {
                    beats.set(beats.get() + 1);
                    tokio::task::yield_now().await;
                }
            })
        };

        let scheduler = Scheduler::new();
        let (a, b, c) = (pattern(3_000, 3), pattern(3_000, 5), pattern(2_500, 7));
        let first = scheduler.compute_async(&a, &b).expect("valid input");
        let second = scheduler.compute_async(&b, &c).expect("valid input");
        let (d1, d2) = tokio::join!(first, second);
        done.set(true);
        heartbeat.await.expect("heartbeat");

        println!("d(a, b) = {d1}");
        println!("d(b, c) = {d2}");
        println!("heartbeats while computing: {}", beats.get());
    });
}
