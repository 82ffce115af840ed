//! Timer service used by transition instances.
//!
//! Schedulers never call into an engine. They report expired timers as
//! [`TimerKey`] values and the host routes each one to the instance that
//! owns it, which keeps every instance single-threaded and free of
//! re-entrant timer callbacks.

mod manual;
mod tokio_impl;

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

pub use manual::ManualScheduler;
pub use tokio_impl::TokioScheduler;

/// Identity of one transition instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-instance timer sequence number, allocated by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Globally unique timer identity: owning instance plus token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerKey {
    pub instance: InstanceId,
    pub token: TimerToken,
}

/// Errors that can occur when scheduling a timer.
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("No async runtime available to drive timers")]
    NoRuntime,

    #[error("Timer service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Timer service has shut down")]
    Closed,
}

/// One-shot timer service.
///
/// Implementations are cheap to clone and shared by every instance of a
/// group. A cancelled key must never be reported as fired afterwards
/// unless it was already in flight; owners ignore stale keys.
pub trait Scheduler: Clone {
    /// Arrange for `key` to be reported as fired after `delay`.
    fn schedule(&self, key: TimerKey, delay: Duration) -> Result<(), TimerError>;

    /// Cancel a pending timer. Unknown keys are ignored.
    fn cancel(&self, key: TimerKey);
}
