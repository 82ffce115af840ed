//! Caller-supplied lifecycle callbacks.

use super::effect::LifecycleHook;
use super::props::TransitionProps;
use super::status::TransitionStatus;

/// A lifecycle callback. Receives the props current when it fires plus the
/// status described by the hook.
pub type LifecycleCallback =
    Box<dyn FnMut(&TransitionProps, TransitionStatus) -> anyhow::Result<()> + Send>;

/// Optional callbacks for each lifecycle hook.
#[derive(Default)]
pub struct TransitionCallbacks {
    on_start: Option<LifecycleCallback>,
    on_complete: Option<LifecycleCallback>,
    on_show: Option<LifecycleCallback>,
    on_hide: Option<LifecycleCallback>,
}

impl TransitionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TransitionProps, TransitionStatus) -> anyhow::Result<()> + Send + 'static,
    {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TransitionProps, TransitionStatus) -> anyhow::Result<()> + Send + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn on_show<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TransitionProps, TransitionStatus) -> anyhow::Result<()> + Send + 'static,
    {
        self.on_show = Some(Box::new(f));
        self
    }

    pub fn on_hide<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TransitionProps, TransitionStatus) -> anyhow::Result<()> + Send + 'static,
    {
        self.on_hide = Some(Box::new(f));
        self
    }

    /// Register the same callback for every hook.
    pub fn on_any<F>(self, f: F) -> Self
    where
        F: FnMut(LifecycleHook, &TransitionProps, TransitionStatus) -> anyhow::Result<()>
            + Send
            + Clone
            + 'static,
    {
        let mut start = f.clone();
        let mut complete = f.clone();
        let mut show = f.clone();
        let mut hide = f;
        self.on_start(move |p, s| start(LifecycleHook::Start, p, s))
            .on_complete(move |p, s| complete(LifecycleHook::Complete, p, s))
            .on_show(move |p, s| show(LifecycleHook::Show, p, s))
            .on_hide(move |p, s| hide(LifecycleHook::Hide, p, s))
    }

    pub(crate) fn invoke(
        &mut self,
        hook: LifecycleHook,
        props: &TransitionProps,
        status: TransitionStatus,
    ) -> anyhow::Result<()> {
        let slot = match hook {
            LifecycleHook::Start => &mut self.on_start,
            LifecycleHook::Complete => &mut self.on_complete,
            LifecycleHook::Show => &mut self.on_show,
            LifecycleHook::Hide => &mut self.on_hide,
        };
        match slot {
            Some(callback) => callback(props, status),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for TransitionCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionCallbacks")
            .field("on_start", &self.on_start.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("on_show", &self.on_show.is_some())
            .field("on_hide", &self.on_hide.is_some())
            .finish()
    }
}
