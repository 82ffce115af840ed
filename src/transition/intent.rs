//! Intents for the transition reducer.

use crate::mvi::Intent;
use crate::timer::TimerToken;

use super::props::TransitionProps;

/// Events that drive a transition instance.
#[derive(Debug, Clone)]
pub enum TransitionIntent {
    /// Instance enters the host tree with its first props.
    Mount(TransitionProps),

    /// Host delivered new props.
    PropsChanged(TransitionProps),

    /// A phase timer expired. Carries the props current at expiry since
    /// they decide the resting state and the duration of a queued phase.
    TimerElapsed {
        token: TimerToken,
        props: TransitionProps,
    },

    /// The timer for `token` could not be scheduled.
    ScheduleFailed { token: TimerToken },

    /// Instance is being torn down.
    Unmount,
}

impl Intent for TransitionIntent {}
