use serde::{Deserialize, Serialize};

use crate::duration::TransitionDuration;
use crate::transition::{TransitionProps, DEFAULT_ANIMATION};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub animations: AnimationCatalog,
}

/// Props applied to transitions that don't override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Animation name (default: "fade").
    #[serde(default = "default_animation")]
    pub animation: String,
    /// Number, numeric string or `{ show, hide }` table (default: 500).
    #[serde(default)]
    pub duration: TransitionDuration,
    /// Force directional rendering on or off; unset infers from the name.
    #[serde(default)]
    pub directional: Option<bool>,
    #[serde(default = "default_mount_on_show")]
    pub mount_on_show: bool,
    #[serde(default)]
    pub unmount_on_hide: bool,
    #[serde(default)]
    pub transition_on_mount: bool,
}

/// Extra knowledge about animation names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationCatalog {
    /// Names rendered as keyframe (non-directional) animations in addition
    /// to the built-in set.
    #[serde(default)]
    pub keyframe: Vec<String>,
}

fn default_animation() -> String {
    DEFAULT_ANIMATION.to_string()
}

fn default_mount_on_show() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            animation: default_animation(),
            duration: TransitionDuration::default(),
            directional: None,
            mount_on_show: default_mount_on_show(),
            unmount_on_hide: false,
            transition_on_mount: false,
        }
    }
}

impl Config {
    /// Props for a transition using the configured defaults.
    pub fn props(&self, visible: bool) -> TransitionProps {
        self.props_for(&self.defaults.animation, visible)
    }

    /// Props for `animation`, with catalog keyframe names forced
    /// non-directional unless the defaults say otherwise.
    pub fn props_for(&self, animation: &str, visible: bool) -> TransitionProps {
        let directional = self.defaults.directional.or_else(|| {
            self.animations
                .keyframe
                .iter()
                .any(|name| name == animation)
                .then_some(false)
        });
        TransitionProps {
            visible,
            animation: animation.to_string(),
            duration: self.defaults.duration.clone(),
            directional,
            mount_on_show: self.defaults.mount_on_show,
            unmount_on_hide: self.defaults.unmount_on_hide,
            transition_on_mount: self.defaults.transition_on_mount,
        }
    }
}
