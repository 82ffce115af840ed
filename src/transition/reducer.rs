//! Reducer for the transition lifecycle.

use crate::mvi::Reducer;
use crate::timer::TimerToken;

use super::effect::{LifecycleHook, TransitionEffect};
use super::intent::TransitionIntent;
use super::props::TransitionProps;
use super::state::TransitionState;
use super::status::TransitionStatus;

/// Reducer for transition state transitions.
///
/// Pure function. Timers and callbacks are described as effects and run
/// by [`crate::transition::TransitionEngine`] in the order returned.
pub struct TransitionReducer;

type Reduced = (TransitionState, Vec<TransitionEffect>);

impl Reducer for TransitionReducer {
    type State = TransitionState;
    type Intent = TransitionIntent;
    type Effect = TransitionEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Reduced {
        match intent {
            TransitionIntent::Mount(props) => {
                let state = TransitionState::initial(&props);
                commit(state, &props)
            }

            TransitionIntent::PropsChanged(props) => {
                let state = derive(state, &props);
                commit(state, &props)
            }

            TransitionIntent::TimerElapsed { token, props } => {
                if state.pending_timer != Some(token) {
                    // Stale delivery of a superseded or cancelled timer
                    return (state, Vec::new());
                }
                complete(state, &props)
            }

            TransitionIntent::ScheduleFailed { token } => {
                if state.pending_timer != Some(token) {
                    return (state, Vec::new());
                }
                restore_resting(state)
            }

            TransitionIntent::Unmount => {
                let mut state = state;
                let effects = state
                    .pending_timer
                    .take()
                    .map(|token| TransitionEffect::Cancel { token })
                    .into_iter()
                    .collect();
                state.animating = false;
                state.next_status = None;
                (state, effects)
            }
        }
    }
}

/// Status correction and queued-transition derivation for new props.
fn derive(mut state: TransitionState, props: &TransitionProps) -> TransitionState {
    if props.visible {
        if state.status == TransitionStatus::Unmounted {
            state.status = TransitionStatus::Exited;
        }
        state.next_status = if state.status.is_showing() {
            None
        } else {
            Some(TransitionStatus::Entering)
        };
    } else {
        state.next_status = if state.status.is_showing() {
            Some(TransitionStatus::Exiting)
        } else {
            None
        };
    }
    state
}

/// Start the queued phase now, or flip the queue if a phase is in flight.
fn commit(mut state: TransitionState, props: &TransitionProps) -> Reduced {
    if state.next_status.is_none() {
        return (state, Vec::new());
    }

    if state.animating {
        // Never interrupt the running timer; the queue is consulted when it completes
        state.next_status = Some(match state.status {
            TransitionStatus::Entering => TransitionStatus::Exiting,
            _ => TransitionStatus::Entering,
        });
        return (state, Vec::new());
    }

    state.next_status = Some(match state.status {
        TransitionStatus::Entered => TransitionStatus::Exiting,
        _ => TransitionStatus::Entering,
    });
    start(state, props, Vec::new())
}

/// Consume the queued status and begin its phase.
fn start(
    mut state: TransitionState,
    props: &TransitionProps,
    mut effects: Vec<TransitionEffect>,
) -> Reduced {
    let Some(status) = state.next_status.take() else {
        return (state, effects);
    };
    let Some(phase) = status.phase() else {
        return (state, effects);
    };

    debug_assert!(
        state.pending_timer.is_none(),
        "phase started while timer {:?} is outstanding",
        state.pending_timer
    );
    if let Some(stale) = state.pending_timer.take() {
        effects.push(TransitionEffect::Cancel { token: stale });
    }

    state.timer_seq += 1;
    let token = TimerToken(state.timer_seq);
    state.status = status;
    state.animating = true;
    state.pending_timer = Some(token);

    effects.push(TransitionEffect::Invoke {
        hook: LifecycleHook::Start,
        status,
    });
    effects.push(TransitionEffect::Schedule {
        token,
        delay: props.duration.resolve(phase),
    });
    (state, effects)
}

/// The current phase's timer ran out.
fn complete(mut state: TransitionState, props: &TransitionProps) -> Reduced {
    let finished = state.status;
    state.pending_timer = None;
    let mut effects = vec![TransitionEffect::Invoke {
        hook: LifecycleHook::Complete,
        status: finished,
    }];

    let (resting, hook) = match finished {
        TransitionStatus::Entering => (TransitionStatus::Entered, LifecycleHook::Show),
        _ if props.unmount_on_hide => (TransitionStatus::Unmounted, LifecycleHook::Hide),
        _ => (TransitionStatus::Exited, LifecycleHook::Hide),
    };
    effects.push(TransitionEffect::Invoke {
        hook,
        status: resting,
    });

    // A queued reversal starts straight from the finished phase
    if state.next_status.is_some() {
        return start(state, props, effects);
    }

    state.status = resting;
    state.animating = false;
    (state, effects)
}

/// Undo a phase whose timer could not be scheduled, leaving the instance at
/// the resting state it was leaving.
fn restore_resting(mut state: TransitionState) -> Reduced {
    state.status = match state.status {
        TransitionStatus::Exiting => TransitionStatus::Entered,
        _ => TransitionStatus::Exited,
    };
    state.animating = false;
    state.pending_timer = None;
    state.next_status = None;
    (state, Vec::new())
}
