//! Errors surfaced by a transition instance.

use thiserror::Error;

use crate::timer::TimerError;

use super::effect::LifecycleHook;
use super::status::TransitionStatus;

/// Errors that can occur while driving a transition instance.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The phase timer could not be scheduled. The instance is faulted.
    #[error("Failed to schedule timer for {status} phase: {source}")]
    Schedule {
        status: TransitionStatus,
        #[source]
        source: TimerError,
    },

    /// A caller callback returned an error. Internal state is already committed.
    #[error("{hook} callback failed: {source}")]
    Callback {
        hook: LifecycleHook,
        #[source]
        source: anyhow::Error,
    },

    #[error("Transition is faulted after a scheduling failure")]
    Faulted,

    #[error("Transition has been torn down")]
    TornDown,
}
