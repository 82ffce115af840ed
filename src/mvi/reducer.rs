//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effects)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect type this reducer emits.
    type Effect: Effect;

    /// Process an intent and return the new state plus the effects to run.
    ///
    /// Effects are returned in execution order.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>);
}
