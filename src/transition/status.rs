//! Lifecycle statuses and animation phases.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a transition instance is in its show/hide lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStatus {
    /// Not in the render tree at all.
    Unmounted,
    /// Rendered but hidden.
    #[default]
    Exited,
    /// Show animation in flight.
    Entering,
    /// Rendered and visible.
    Entered,
    /// Hide animation in flight.
    Exiting,
}

impl TransitionStatus {
    pub const ALL: [TransitionStatus; 5] = [
        TransitionStatus::Unmounted,
        TransitionStatus::Exited,
        TransitionStatus::Entering,
        TransitionStatus::Entered,
        TransitionStatus::Exiting,
    ];

    /// Resting statuses hold no timer.
    pub fn is_resting(self) -> bool {
        matches!(self, Self::Unmounted | Self::Exited | Self::Entered)
    }

    /// Entering or already visible.
    pub fn is_showing(self) -> bool {
        matches!(self, Self::Entering | Self::Entered)
    }

    /// The animation phase this status runs, if any.
    pub fn phase(self) -> Option<TransitionPhase> {
        match self {
            Self::Entering => Some(TransitionPhase::Show),
            Self::Exiting => Some(TransitionPhase::Hide),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unmounted => "unmounted",
            Self::Exited => "exited",
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Exiting => "exiting",
        }
    }
}

impl fmt::Display for TransitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One timed animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    Show,
    Hide,
}

impl fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => f.pad("show"),
            Self::Hide => f.pad("hide"),
        }
    }
}
