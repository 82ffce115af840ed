//! Model-View-Intent (MVI) primitives for the transition state machine.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ Shell ──→ View
//!    ↑                                          │
//!    └──────────── timer expiry ────────────────┘
//! ```
//!
//! - **State**: Plain data describing one instance
//! - **Intent**: Props changes, timer expiry, teardown
//! - **Effect**: Side effects requested by the reducer (timers, callbacks)
//! - **Reducer**: Pure function from (State, Intent) to (State, Effects)

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
