use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use yielding_lev::SchedulerBuilder;

fn one_cell_per_poll() -> yielding_lev::Scheduler {
    SchedulerBuilder::new()
        .with_quantum(Duration::ZERO)
        .with_init_check_interval(1)
        .with_fill_check_interval(1)
        .with_inline_init_cutoff(0)
        .build()
}

#[tokio::test(flavor = "current_thread")]
async fn future_resolves_to_distance() {
    let d = one_cell_per_poll()
        .compute_async(b"kitten", b"sitting")
        .unwrap()
        .await;
    assert_eq!(d, 3);
}

#[tokio::test(flavor = "current_thread")]
async fn empty_input_resolves_on_first_poll() {
    let fut = one_cell_per_poll().compute_async(b"", b"abc").unwrap();
    assert!(fut.handle().is_done());
    assert_eq!(fut.await, 3);
}

#[tokio::test(flavor = "current_thread")]
async fn other_tasks_run_between_quanta() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let ticks = Rc::new(Cell::new(0u64));
            let finished = Rc::new(Cell::new(false));

            let ticker = {
                let ticks = ticks.clone();
                let finished = finished.clone();
                tokio::task::spawn_local(async move {
                    while !finished.get() {
                        ticks.set(ticks.get() + 1);
                        tokio::task::yield_now().await;
                    }
                })
            };

            let a = vec![b'a'; 40];
            let b = vec![b'b'; 40];
            let d = one_cell_per_poll().compute_async(&a, &b).unwrap().await;
            finished.set(true);
            ticker.await.unwrap();

            assert_eq!(d, 40);
            assert!(ticks.get() > 0, "ticker never ran while distance was computed");
        })
        .await;
}

#[tokio::test(flavor = "current_thread")]
async fn dropping_the_future_abandons_the_work() {
    let a = vec![b'x'; 500];
    let b = vec![b'y'; 500];
    let fut = one_cell_per_poll().compute_async(&a, &b).unwrap();
    let res = tokio::time::timeout(Duration::ZERO, fut).await;
    assert!(res.is_err());
}
