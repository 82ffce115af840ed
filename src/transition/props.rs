//! Caller-supplied transition configuration.

use serde::{Deserialize, Serialize};

use crate::duration::TransitionDuration;

/// Default animation name.
pub const DEFAULT_ANIMATION: &str = "fade";

/// Props of one transition instance. Immutable per render; a new value is
/// delivered to the engine on every host update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionProps {
    /// Desired end state.
    pub visible: bool,
    /// Animation name, e.g. `"fade up"` or `"pulse"`.
    #[serde(default = "default_animation")]
    pub animation: String,
    #[serde(default)]
    pub duration: TransitionDuration,
    /// `None` infers direction from the animation name.
    #[serde(default)]
    pub directional: Option<bool>,
    /// Stay out of the render tree until first shown.
    #[serde(default = "default_mount_on_show")]
    pub mount_on_show: bool,
    /// Leave the render tree once hidden.
    #[serde(default)]
    pub unmount_on_hide: bool,
    /// Run the show animation when mounted visible.
    #[serde(default)]
    pub transition_on_mount: bool,
}

fn default_animation() -> String {
    DEFAULT_ANIMATION.to_string()
}

fn default_mount_on_show() -> bool {
    true
}

impl Default for TransitionProps {
    fn default() -> Self {
        Self {
            visible: true,
            animation: default_animation(),
            duration: TransitionDuration::default(),
            directional: None,
            mount_on_show: true,
            unmount_on_hide: false,
            transition_on_mount: false,
        }
    }
}

impl TransitionProps {
    pub fn visible(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = animation.into();
        self
    }

    pub fn with_duration(mut self, duration: impl Into<TransitionDuration>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_directional(mut self, directional: bool) -> Self {
        self.directional = Some(directional);
        self
    }

    pub fn with_mount_on_show(mut self, mount_on_show: bool) -> Self {
        self.mount_on_show = mount_on_show;
        self
    }

    pub fn with_unmount_on_hide(mut self, unmount_on_hide: bool) -> Self {
        self.unmount_on_hide = unmount_on_hide;
        self
    }

    pub fn with_transition_on_mount(mut self, transition_on_mount: bool) -> Self {
        self.transition_on_mount = transition_on_mount;
        self
    }
}
