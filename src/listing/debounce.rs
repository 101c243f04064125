// ABOUTME: Cancellable delayed task used to coalesce rapid filter changes
// ABOUTME: Rescheduling aborts the pending timer; work already started runs to completion

use std::future::Future;
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Cancels the pending timer, even after its `JoinHandle` was taken.
    timer: Option<AbortHandle>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: None,
            pending: None,
        }
    }

    /// Runs `work` once `delay` has passed without another `schedule` call.
    pub fn schedule<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.cancel() {
            debug!("Debounced task rescheduled");
        }
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so that a later cancel only stops the timer, never the work.
            let _ = tokio::spawn(work).await;
        });
        self.timer = Some(handle.abort_handle());
        self.pending = Some(handle);
    }

    /// Aborts a pending timer. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        self.pending = None;
        match self.timer.take() {
            Some(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Hands out the scheduled task to await without holding `self`.
    /// A later `schedule` or `cancel` can still abort its timer.
    pub fn take_pending(&mut self) -> Option<JoinHandle<()>> {
        self.pending.take()
    }

    /// Waits for the scheduled work (if any) to run and finish.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.take_pending() {
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
