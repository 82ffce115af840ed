//! Imperative shell around [`TransitionReducer`].
//!
//! The engine owns the props, callbacks and scheduler of one instance. It
//! feeds intents to the reducer and executes the returned effects in order.

use std::mem;

use crate::mvi::Reducer;
use crate::render::{render_child, Element};
use crate::timer::{InstanceId, Scheduler, TimerKey, TimerToken};

use super::callbacks::TransitionCallbacks;
use super::effect::TransitionEffect;
use super::error::TransitionError;
use super::intent::TransitionIntent;
use super::props::TransitionProps;
use super::reducer::TransitionReducer;
use super::state::TransitionState;
use super::status::TransitionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Liveness {
    Live,
    /// A timer could not be scheduled. Rendering still works, updates don't.
    Faulted,
    TornDown,
}

/// One animated-visibility instance.
pub struct TransitionEngine<S: Scheduler> {
    id: InstanceId,
    props: TransitionProps,
    state: TransitionState,
    scheduler: S,
    callbacks: TransitionCallbacks,
    liveness: Liveness,
}

impl<S: Scheduler> TransitionEngine<S> {
    /// Mount a new instance. Starts the show phase right away when
    /// `transition_on_mount` is set on visible props.
    pub fn mount(
        props: TransitionProps,
        scheduler: S,
        callbacks: TransitionCallbacks,
    ) -> Result<Self, TransitionError> {
        let mut engine = Self {
            id: InstanceId::new(),
            props: props.clone(),
            state: TransitionState::default(),
            scheduler,
            callbacks,
            liveness: Liveness::Live,
        };
        engine.dispatch(TransitionIntent::Mount(props))?;
        Ok(engine)
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn props(&self) -> &TransitionProps {
        &self.props
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn status(&self) -> TransitionStatus {
        self.state.status
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    pub fn is_faulted(&self) -> bool {
        self.liveness == Liveness::Faulted
    }

    pub fn is_torn_down(&self) -> bool {
        self.liveness == Liveness::TornDown
    }

    /// Scheduler key of the outstanding timer, if any.
    pub fn pending_timer(&self) -> Option<TimerKey> {
        self.state.pending_timer.map(|token| self.key(token))
    }

    /// Deliver new props from the host.
    pub fn set_props(&mut self, props: TransitionProps) -> Result<(), TransitionError> {
        match self.liveness {
            Liveness::Live => {}
            Liveness::Faulted => return Err(TransitionError::Faulted),
            Liveness::TornDown => return Err(TransitionError::TornDown),
        }
        self.props = props.clone();
        self.dispatch(TransitionIntent::PropsChanged(props))
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<(), TransitionError> {
        let props = self.props.clone().with_visible(visible);
        self.set_props(props)
    }

    /// Route an expired timer to this instance. Tokens that are not the
    /// outstanding timer, and any delivery after teardown, are ignored.
    pub fn handle_timer(&mut self, token: TimerToken) -> Result<(), TransitionError> {
        if self.liveness != Liveness::Live {
            tracing::debug!(instance = %self.id, %token, "Ignoring timer for inactive transition");
            return Ok(());
        }
        let props = self.props.clone();
        self.dispatch(TransitionIntent::TimerElapsed { token, props })
    }

    /// Render `child` for the current state. `None` while unmounted.
    pub fn render(&self, child: &Element) -> Option<Element> {
        render_child(child, &self.props, &self.state)
    }

    /// Cancel any outstanding timer. No callback fires afterwards.
    pub fn unmount(&mut self) {
        if self.liveness == Liveness::TornDown {
            return;
        }
        let state = mem::take(&mut self.state);
        let (state, effects) = TransitionReducer::reduce(state, TransitionIntent::Unmount);
        self.state = state;
        for effect in effects {
            if let TransitionEffect::Cancel { token } = effect {
                self.scheduler.cancel(self.key(token));
            }
        }
        self.liveness = Liveness::TornDown;
        tracing::debug!(instance = %self.id, "Transition torn down");
    }

    fn key(&self, token: TimerToken) -> TimerKey {
        TimerKey {
            instance: self.id,
            token,
        }
    }

    fn dispatch(&mut self, intent: TransitionIntent) -> Result<(), TransitionError> {
        let state = mem::take(&mut self.state);
        let (state, effects) = TransitionReducer::reduce(state, intent);
        self.state = state;
        let result = self.run_effects(effects);
        debug_assert!(
            self.state.invariants_hold(),
            "transition invariants violated: {:?}",
            self.state
        );
        result
    }

    fn run_effects(&mut self, effects: Vec<TransitionEffect>) -> Result<(), TransitionError> {
        let mut first_error = None;

        for effect in effects {
            match effect {
                TransitionEffect::Invoke { hook, status } => {
                    if let Err(source) = self.callbacks.invoke(hook, &self.props, status) {
                        tracing::warn!(instance = %self.id, %hook, %status, error = %source, "Lifecycle callback failed");
                        first_error.get_or_insert(TransitionError::Callback { hook, source });
                    }
                }
                TransitionEffect::Schedule { token, delay } => {
                    tracing::debug!(
                        instance = %self.id,
                        status = %self.state.status,
                        delay_ms = delay.as_millis() as u64,
                        "Transition phase started"
                    );
                    if let Err(source) = self.scheduler.schedule(self.key(token), delay) {
                        let status = self.state.status;
                        tracing::error!(instance = %self.id, %status, error = %source, "Failed to schedule transition timer");
                        let state = mem::take(&mut self.state);
                        let (state, _) =
                            TransitionReducer::reduce(state, TransitionIntent::ScheduleFailed { token });
                        self.state = state;
                        self.liveness = Liveness::Faulted;
                        return Err(TransitionError::Schedule { status, source });
                    }
                }
                TransitionEffect::Cancel { token } => {
                    self.scheduler.cancel(self.key(token));
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<S: Scheduler> Drop for TransitionEngine<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<S: Scheduler> std::fmt::Debug for TransitionEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionEngine")
            .field("id", &self.id)
            .field("props", &self.props)
            .field("state", &self.state)
            .field("liveness", &self.liveness)
            .finish()
    }
}
