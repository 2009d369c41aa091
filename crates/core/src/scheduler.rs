use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::CoreError;

/// A single-slot deferred action, e.g. hiding a transient banner.
///
/// At most one action is pending. Scheduling again cancels the pending one
/// and restarts the full delay. Dropping the timer cancels whatever is still
/// pending.
#[derive(Debug)]
pub struct DismissTimer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl DismissTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle of the ambient tokio runtime. Call before mutating any state
    /// that the scheduled action is supposed to undo.
    pub fn runtime() -> Result<Handle, CoreError> {
        Ok(Handle::try_current()?)
    }

    /// Run `action` on `handle` once the delay elapses, unless cancelled or
    /// superseded first.
    pub fn schedule<F>(&mut self, handle: &Handle, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let deadline = Instant::now() + self.delay;
        let cancelled = token.clone();
        let fired = token.clone();
        handle.spawn(async move {
            tokio::select! {
                // Cancellation wins when the deadline has also passed.
                biased;
                _ = cancelled.cancelled() => {
                    debug!("deferred action superseded");
                }
                _ = tokio::time::sleep_until(deadline) => {
                    // Mark as done so `is_pending` turns false.
                    fired.cancel();
                    action();
                }
            }
        });
        self.pending = Some(token);
    }

    /// Cancel the pending action, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// True while an action is scheduled and neither fired nor cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
