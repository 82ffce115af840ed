//! Side effects requested by the transition reducer.

use std::fmt;
use std::time::Duration;

use crate::mvi::Effect;
use crate::timer::TimerToken;

use super::status::TransitionStatus;

/// Lifecycle notification points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleHook {
    /// A phase began.
    Start,
    /// A phase's timer ran out.
    Complete,
    /// A show phase finished. Reports `Entered` even when a queued hide
    /// starts straight away and the instance never rests there.
    Show,
    /// A hide phase finished. Reports `Exited` or `Unmounted` even when a
    /// queued show starts straight away and that status is skipped.
    Hide,
}

impl fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Start => "onStart",
            Self::Complete => "onComplete",
            Self::Show => "onShow",
            Self::Hide => "onHide",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionEffect {
    /// Call the caller's callback for `hook` with `status`.
    Invoke {
        hook: LifecycleHook,
        status: TransitionStatus,
    },
    Schedule {
        token: TimerToken,
        delay: Duration,
    },
    Cancel {
        token: TimerToken,
    },
}

impl Effect for TransitionEffect {}
