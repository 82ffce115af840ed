//! Tokio-backed scheduler.
//!
//! Each timer is a spawned task sleeping for its delay. Expired keys are
//! sent over an unbounded channel which the host drains and routes to the
//! owning instance.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{Scheduler, TimerError, TimerKey};

#[derive(Clone)]
pub struct TokioScheduler {
    tasks: Arc<Mutex<HashMap<TimerKey, JoinHandle<()>>>>,
    fired_tx: mpsc::UnboundedSender<TimerKey>,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its expired timers arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerKey>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            fired_tx,
        };
        (scheduler, fired_rx)
    }

    /// Number of timers still sleeping.
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, key: TimerKey, delay: Duration) -> Result<(), TimerError> {
        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        if self.fired_tx.is_closed() {
            return Err(TimerError::Closed);
        }

        let tasks = Arc::clone(&self.tasks);
        let fired_tx = self.fired_tx.clone();
        // Hold the lock across spawn so the task cannot remove its entry
        // before it has been inserted.
        let mut guard = self.tasks.lock();
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tasks.lock().remove(&key);
            if fired_tx.send(key).is_err() {
                tracing::debug!(instance = %key.instance, token = %key.token, "Timer fired after receiver closed");
            }
        });
        if let Some(previous) = guard.insert(key, task) {
            previous.abort();
        }
        Ok(())
    }

    fn cancel(&self, key: TimerKey) {
        if let Some(task) = self.tasks.lock().remove(&key) {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{InstanceId, TimerToken};

    fn key(n: u64) -> TimerKey {
        TimerKey {
            instance: InstanceId::new(),
            token: TimerToken(n),
        }
    }

    #[test]
    fn scheduling_outside_a_runtime_fails() {
        let (scheduler, _rx) = TokioScheduler::new();
        let err = scheduler.schedule(key(1), Duration::from_millis(5)).unwrap_err();
        assert!(matches!(err, TimerError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_fired_key() {
        let (scheduler, mut rx) = TokioScheduler::new();
        let k = key(1);
        scheduler.schedule(k, Duration::from_millis(500)).unwrap();
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(rx.recv().await, Some(k));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_is_not_delivered() {
        let (scheduler, mut rx) = TokioScheduler::new();
        let cancelled = key(1);
        let kept = key(2);
        scheduler.schedule(cancelled, Duration::from_millis(100)).unwrap();
        scheduler.schedule(kept, Duration::from_millis(200)).unwrap();
        scheduler.cancel(cancelled);

        assert_eq!(rx.recv().await, Some(kept));
    }

    #[tokio::test]
    async fn closed_receiver_is_reported() {
        let (scheduler, rx) = TokioScheduler::new();
        drop(rx);
        let err = scheduler.schedule(key(1), Duration::ZERO).unwrap_err();
        assert!(matches!(err, TimerError::Closed));
    }
}
