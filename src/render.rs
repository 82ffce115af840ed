//! Render-time class and style derivation.
//!
//! Everything here is a pure function of props and state. The wrapped
//! child is re-emitted with the computed class list and merged style; all
//! other attributes pass through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classes::ClassNames;
use crate::transition::{TransitionProps, TransitionState, TransitionStatus};

/// Animations whose keyframes are the same in both directions.
pub const KEYFRAME_ANIMATIONS: &[&str] = &["jiggle", "flash", "shake", "pulse", "tada", "bounce", "glow"];

/// Inline style property carrying the phase duration.
pub const ANIMATION_DURATION: &str = "animation-duration";

/// Minimal markup node wrapped by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Serialize as a single HTML-like tag.
    pub fn to_markup(&self) -> String {
        let mut out = format!("<{}", self.tag);
        if let Some(class_name) = self.class_name.as_deref().filter(|c| !c.is_empty()) {
            out.push_str(&format!(" class=\"{}\"", escape(class_name)));
        }
        if !self.style.is_empty() {
            let style = self
                .style
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(&format!(" style=\"{}\"", escape(&style)));
        }
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        match &self.text {
            Some(text) => out.push_str(&format!(">{}</{}>", escape(text), self.tag)),
            None => out.push_str(" />"),
        }
        out
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Whether the animation runs differently in and out.
///
/// An explicit flag wins; otherwise every animation except the keyframe
/// set is directional.
pub fn is_directional(animation: &str, directional: Option<bool>) -> bool {
    directional.unwrap_or_else(|| !KEYFRAME_ANIMATIONS.contains(&animation))
}

/// Class list for the wrapped child.
pub fn transition_classes(
    props: &TransitionProps,
    state: &TransitionState,
    child_classes: Option<&str>,
) -> String {
    let classes = ClassNames::new().push(&props.animation).maybe(child_classes);

    if is_directional(&props.animation, props.directional) {
        let status = state.status;
        classes
            .key_only(state.animating, "animating")
            .key_only(status == TransitionStatus::Entering, "in")
            .key_only(status == TransitionStatus::Exiting, "out")
            .key_only(status == TransitionStatus::Exited, "hidden")
            .key_only(status != TransitionStatus::Exited, "visible")
            .push("transition")
            .build()
    } else {
        classes.key_only(state.animating, "animating transition").build()
    }
}

/// Child style merged with the phase duration while a phase runs.
pub fn transition_style(
    props: &TransitionProps,
    status: TransitionStatus,
    child_style: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut style = child_style.clone();
    if let Some(phase) = status.phase() {
        style.insert(
            ANIMATION_DURATION.to_string(),
            format!("{}ms", props.duration.resolve_ms(phase)),
        );
    }
    style
}

/// Re-emit `child` for the given state. `None` while unmounted.
pub fn render_child(
    child: &Element,
    props: &TransitionProps,
    state: &TransitionState,
) -> Option<Element> {
    if state.status == TransitionStatus::Unmounted {
        return None;
    }

    Some(Element {
        class_name: Some(transition_classes(props, state, child.class_name.as_deref())),
        style: transition_style(props, state.status, &child.style),
        ..child.clone()
    })
}
