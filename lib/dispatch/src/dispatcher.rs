use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{abortable, AbortHandle};
use tokio::time::{delay_until, Duration, Instant};
use tracing::{debug, trace};

use crate::Policy;

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

struct Pending<A> {
    id: u64,
    args: A,
    abort: AbortHandle,
}

struct State<A> {
    next_id: u64,
    pending: Option<Pending<A>>,
}

struct Inner<A> {
    policy: Policy,
    delay: Duration,
    callback: Callback<A>,
    state: Mutex<State<A>>,
}

impl<A> Inner<A> {
    fn state(&self) -> MutexGuard<'_, State<A>> {
        // The callback never runs under the lock so the state is always consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the callback if the timer `id` is still the pending one
    ///
    /// Once the pending entry has been taken here the call can no longer be cancelled
    fn fire(&self, id: u64) {
        let pending = {
            let mut state = self.state();
            if state.pending.as_ref().map(|p| p.id) == Some(id) {
                state.pending.take()
            } else {
                None
            }
        };

        if let Some(pending) = pending {
            debug!(id, "firing");
            (self.callback)(pending.args);
        }
    }
}

/// Wraps a callback so that rapid calls to [`Dispatcher::invoke`] result in a
/// single delayed execution
///
/// Timers are spawned onto the current tokio runtime, so `invoke` must be called
/// from within one. Dropping the dispatcher cancels any pending call.
pub struct Dispatcher<A> {
    inner: Arc<Inner<A>>,
}

impl<A: Send + 'static> Dispatcher<A> {
    pub fn new<F>(policy: Policy, callback: F, delay: Duration) -> Dispatcher<A>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Dispatcher {
            inner: Arc::new(Inner {
                policy,
                delay,
                callback: Box::new(callback),
                state: Mutex::new(State {
                    next_id: 0,
                    pending: None,
                }),
            }),
        }
    }

    pub fn debounce<F>(callback: F, delay: Duration) -> Dispatcher<A>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(Policy::Debounce, callback, delay)
    }

    pub fn throttle<F>(callback: F, delay: Duration) -> Dispatcher<A>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(Policy::Throttle, callback, delay)
    }

    /// Schedules the callback to run with `args` once the delay has elapsed
    pub fn invoke(&self, args: A) {
        let deadline = Instant::now() + self.inner.delay;
        let mut state = self.inner.state();

        if let Some(pending) = &state.pending {
            match self.inner.policy {
                Policy::Throttle => {
                    trace!(id = pending.id, "suppressed");
                    return;
                }
                Policy::Debounce => {
                    trace!(id = pending.id, "restarting");
                    pending.abort.abort();
                }
            }
        }

        let id = state.next_id;
        state.next_id += 1;

        let inner = Arc::clone(&self.inner);
        let (timer, abort) = abortable(async move {
            delay_until(deadline).await;
            inner.fire(id);
        });

        state.pending = Some(Pending { id, args, abort });
        drop(state);

        tokio::spawn(timer);
        debug!(id, delay = ?self.inner.delay, "scheduled");
    }
}

impl<A> Dispatcher<A> {
    pub fn policy(&self) -> Policy {
        self.inner.policy
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state().pending.is_some()
    }

    /// Discards the pending call, if any, without running the callback
    pub fn cancel(&self) {
        let pending = self.inner.state().pending.take();
        if let Some(pending) = pending {
            pending.abort.abort();
            debug!(id = pending.id, "cancelled");
        }
    }

    /// Runs the pending call immediately, returning false if nothing was pending
    pub fn flush(&self) -> bool {
        let pending = self.inner.state().pending.take();
        match pending {
            Some(pending) => {
                pending.abort.abort();
                debug!(id = pending.id, "flushing");
                (self.inner.callback)(pending.args);
                true
            }
            None => false,
        }
    }
}

impl<A> Drop for Dispatcher<A> {
    fn drop(&mut self) {
        self.cancel()
    }
}
