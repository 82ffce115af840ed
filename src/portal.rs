//! Portal whose content animates in and out.
//!
//! The portal stays mounted after `close()` until the hide animation has
//! finished, then leaves the tree.

use crate::render::Element;
use crate::timer::{InstanceId, Scheduler, TimerToken};
use crate::transition::{
    TransitionCallbacks, TransitionEngine, TransitionError, TransitionProps, TransitionStatus,
};

pub struct TransitionablePortal<S: Scheduler> {
    open: bool,
    transition: TransitionEngine<S>,
}

impl<S: Scheduler> TransitionablePortal<S> {
    /// Create a closed portal. `props.visible` is ignored; the portal's open
    /// state drives visibility.
    pub fn new(
        props: TransitionProps,
        scheduler: S,
        callbacks: TransitionCallbacks,
    ) -> Result<Self, TransitionError> {
        let props = props
            .with_visible(false)
            .with_transition_on_mount(true)
            .with_mount_on_show(true)
            .with_unmount_on_hide(true);
        let transition = TransitionEngine::mount(props, scheduler, callbacks)?;
        Ok(Self {
            open: false,
            transition,
        })
    }

    pub fn id(&self) -> InstanceId {
        self.transition.id()
    }

    pub fn open(&mut self) -> Result<(), TransitionError> {
        self.set_open(true)
    }

    pub fn close(&mut self) -> Result<(), TransitionError> {
        self.set_open(false)
    }

    pub fn toggle(&mut self) -> Result<(), TransitionError> {
        self.set_open(!self.open)
    }

    /// Whether the portal has been asked to be open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the portal content is in the tree: open, or still animating out.
    pub fn is_mounted(&self) -> bool {
        self.open
            || !matches!(
                self.transition.status(),
                TransitionStatus::Exited | TransitionStatus::Unmounted
            )
    }

    pub fn status(&self) -> TransitionStatus {
        self.transition.status()
    }

    pub fn handle_timer(&mut self, token: TimerToken) -> Result<(), TransitionError> {
        self.transition.handle_timer(token)
    }

    pub fn render(&self, child: &Element) -> Option<Element> {
        if !self.is_mounted() {
            return None;
        }
        self.transition.render(child)
    }

    fn set_open(&mut self, open: bool) -> Result<(), TransitionError> {
        if self.open == open {
            return Ok(());
        }
        match self.transition.set_visible(open) {
            Ok(()) => {}
            // The phase still started; only the listener failed
            Err(err @ TransitionError::Callback { .. }) => {
                self.open = open;
                return Err(err);
            }
            Err(err) => return Err(err),
        }
        self.open = open;
        tracing::debug!(instance = %self.transition.id(), open, "Portal visibility changed");
        Ok(())
    }
}
