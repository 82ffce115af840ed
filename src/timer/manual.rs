//! Virtual-clock scheduler.
//!
//! Time only moves when the host calls [`ManualScheduler::advance`] or
//! [`ManualScheduler::run_until_idle`]. Timers fire in due order, ties in
//! scheduling order, and timers scheduled while firing are picked up in the
//! same pass if they fall inside the window.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{Scheduler, TimerError, TimerKey};

#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), TimerKey>,
    index: HashMap<TimerKey, (Duration, u64)>,
    unavailable: Option<String>,
}

impl ManualInner {
    fn pop_due(&mut self, deadline: Option<Duration>) -> Option<TimerKey> {
        let (&slot, _) = self.queue.iter().next()?;
        if deadline.is_some_and(|deadline| slot.0 > deadline) {
            return None;
        }
        let key = self.queue.remove(&slot)?;
        self.index.remove(&key);
        self.now = self.now.max(slot.0);
        Some(key)
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    /// Number of outstanding timers.
    pub fn pending(&self) -> usize {
        self.inner.lock().queue.len()
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.inner.lock().index.contains_key(&key)
    }

    /// Due time of a pending timer.
    pub fn due_at(&self, key: TimerKey) -> Option<Duration> {
        self.inner.lock().index.get(&key).map(|slot| slot.0)
    }

    /// Refuse every `schedule` call until [`ManualScheduler::restore`].
    pub fn make_unavailable(&self, reason: impl Into<String>) {
        self.inner.lock().unavailable = Some(reason.into());
    }

    pub fn restore(&self) {
        self.inner.lock().unavailable = None;
    }

    /// Move the clock forward by `by`, reporting each timer that comes due.
    ///
    /// The lock is released while `on_fire` runs, so the handler may
    /// schedule and cancel timers.
    pub fn advance(&self, by: Duration, mut on_fire: impl FnMut(TimerKey)) {
        let deadline = self.now() + by;
        loop {
            let next = self.inner.lock().pop_due(Some(deadline));
            match next {
                Some(key) => on_fire(key),
                None => break,
            }
        }
        let mut inner = self.inner.lock();
        inner.now = inner.now.max(deadline);
    }

    /// Fire timers until none are left, however far the clock has to move.
    pub fn run_until_idle(&self, mut on_fire: impl FnMut(TimerKey)) {
        loop {
            let next = self.inner.lock().pop_due(None);
            match next {
                Some(key) => on_fire(key),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, key: TimerKey, delay: Duration) -> Result<(), TimerError> {
        let mut inner = self.inner.lock();
        if let Some(reason) = &inner.unavailable {
            return Err(TimerError::Unavailable {
                reason: reason.clone(),
            });
        }
        if let Some(slot) = inner.index.remove(&key) {
            inner.queue.remove(&slot);
        }
        inner.seq += 1;
        let slot = (inner.now + delay, inner.seq);
        inner.queue.insert(slot, key);
        inner.index.insert(key, slot);
        Ok(())
    }

    fn cancel(&self, key: TimerKey) {
        let mut inner = self.inner.lock();
        if let Some(slot) = inner.index.remove(&key) {
            inner.queue.remove(&slot);
        }
    }
}
