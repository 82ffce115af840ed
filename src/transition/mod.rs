//! Animated-visibility state machine.
//!
//! A transition instance lags its `visible` prop through a timed sequence:
//!
//! ```text
//! Unmounted ──show──→ Exited ──→ Entering ──timer──→ Entered
//!     ↑                  ↑                              │
//!     └── unmount_on_hide┴──── timer ←── Exiting ←─hide─┘
//! ```
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Per-instance record (status, queue, pending timer)
//! - `intent.rs` - Props changes, timer expiry, teardown
//! - `effect.rs` - Timer and callback effects
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `engine.rs` - Shell that runs effects against a scheduler

mod callbacks;
mod effect;
mod engine;
mod error;
mod intent;
mod props;
mod reducer;
mod state;
mod status;

pub use callbacks::{LifecycleCallback, TransitionCallbacks};
pub use effect::{LifecycleHook, TransitionEffect};
pub use engine::TransitionEngine;
pub use error::TransitionError;
pub use intent::TransitionIntent;
pub use props::{TransitionProps, DEFAULT_ANIMATION};
pub use reducer::TransitionReducer;
pub use state::TransitionState;
pub use status::{TransitionPhase, TransitionStatus};
