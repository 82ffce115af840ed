//! Per-instance transition record.

use crate::mvi::UiState;
use crate::timer::TimerToken;

use super::props::TransitionProps;
use super::status::TransitionStatus;

/// Status plus the bookkeeping needed to sequence phases.
///
/// `animating` is true exactly when `pending_timer` is set, and
/// `next_status` only ever holds `Entering` or `Exiting`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionState {
    pub status: TransitionStatus,
    pub animating: bool,
    /// Phase queued to start at the next opportunity.
    pub next_status: Option<TransitionStatus>,
    pub pending_timer: Option<TimerToken>,
    /// Last token handed out.
    pub timer_seq: u64,
}

impl UiState for TransitionState {}

impl TransitionState {
    /// State of a freshly mounted instance, before the first commit.
    pub fn initial(props: &TransitionProps) -> Self {
        let (status, next_status) = if props.visible {
            if props.transition_on_mount {
                (TransitionStatus::Exited, Some(TransitionStatus::Entering))
            } else {
                (TransitionStatus::Entered, None)
            }
        } else if props.mount_on_show || props.unmount_on_hide {
            (TransitionStatus::Unmounted, None)
        } else {
            (TransitionStatus::Exited, None)
        };

        Self {
            status,
            next_status,
            ..Self::default()
        }
    }

    /// Check if the instance renders anything.
    pub fn is_mounted(&self) -> bool {
        self.status != TransitionStatus::Unmounted
    }

    pub fn invariants_hold(&self) -> bool {
        self.animating == self.pending_timer.is_some()
            && !matches!(
                self.next_status,
                Some(TransitionStatus::Unmounted | TransitionStatus::Exited | TransitionStatus::Entered)
            )
            && (self.status != TransitionStatus::Unmounted || self.pending_timer.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_without_mount_transition_starts_entered() {
        let state = TransitionState::initial(&TransitionProps::visible(true));
        assert_eq!(state.status, TransitionStatus::Entered);
        assert_eq!(state.next_status, None);
        assert!(!state.animating);
    }

    #[test]
    fn visible_with_mount_transition_queues_entering() {
        let props = TransitionProps::visible(true).with_transition_on_mount(true);
        let state = TransitionState::initial(&props);
        assert_eq!(state.status, TransitionStatus::Exited);
        assert_eq!(state.next_status, Some(TransitionStatus::Entering));
    }

    #[test]
    fn hidden_mount_on_show_starts_unmounted() {
        let state = TransitionState::initial(&TransitionProps::visible(false));
        assert_eq!(state.status, TransitionStatus::Unmounted);
        assert!(!state.is_mounted());
    }

    #[test]
    fn hidden_unmount_on_hide_starts_unmounted() {
        let props = TransitionProps::visible(false)
            .with_mount_on_show(false)
            .with_unmount_on_hide(true);
        assert_eq!(TransitionState::initial(&props).status, TransitionStatus::Unmounted);
    }

    #[test]
    fn hidden_without_flags_starts_exited() {
        let props = TransitionProps::visible(false).with_mount_on_show(false);
        let state = TransitionState::initial(&props);
        assert_eq!(state.status, TransitionStatus::Exited);
        assert!(state.invariants_hold());
    }
}
