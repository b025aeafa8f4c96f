//! Driving a computation from an async executor.
//!
//! [`DistanceFuture`] runs exactly one quantum per poll. When the quantum
//! runs out it wakes itself and returns `Pending`, which puts it at the back
//! of the executor's queue so every other ready task runs before the next
//! quantum. Dropping the future abandons the computation and frees the
//! matrix.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::Result;
use crate::scheduler::{Handle, Scheduler, Step};

#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct DistanceFuture {
    scheduler: Scheduler,
    handle: Handle,
}

impl DistanceFuture {
    pub fn new(scheduler: Scheduler, handle: Handle) -> Self {
        Self { scheduler, handle }
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Future for DistanceFuture {
    type Output = u32;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<u32> {
        let this = self.get_mut();
        match this.scheduler.step(&mut this.handle) {
            Step::Done(distance) => Poll::Ready(distance),
            Step::Continue => {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}

impl Scheduler {
    /// Begin a computation and return a future that yields to the executor
    /// between quanta.
    pub fn compute_async(&self, s1: &[u8], s2: &[u8]) -> Result<DistanceFuture> {
        let handle = self.begin(s1, s2)?;
        Ok(DistanceFuture::new(self.clone(), handle))
    }
}
