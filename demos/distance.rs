//! Example: edit distance of two strings given on the command line.
//!
//! Run with:
//! `cargo run --example distance -- kitten sitting`

use std::env;

use yielding_lev::{Scheduler, Step};

fn main() {
    let mut args = env::args().skip(1);
    let (a, b) = match (args.next(), args.next()) {
        (Some(a), Some(b)) => (a, b),
        _ => ("kitten".to_string(), "sitting".to_string()),
    };

    let scheduler = Scheduler::new();
    let mut handle = match scheduler.begin(a.as_bytes(), b.as_bytes()) {
        Ok(h) => h,
        Err(err) => {
            eprintln!("distance: {err}");
            std::process::exit(2);
        }
    };

    let distance = loop {
        match scheduler.step(&mut handle) {
            Step::Done(d) => break d,
            Step::Continue => {
                let p = handle.progress();
                println!("  yielded at {:.1}%", 100.0 * p.fraction());
            }
        }
    };

    println!("distance({a:?}, {b:?}) = {distance}");
    println!("dispatch calls: {}", handle.steps());
}
