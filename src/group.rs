//! Keyed group of transitions.
//!
//! Every child of the group is wrapped in its own transition instance.
//! Children present at construction appear without animation, children
//! added later animate in, and removed children animate out and leave the
//! rendered collection once their hide phase completes.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::duration::TransitionDuration;
use crate::render::Element;
use crate::timer::{Scheduler, TimerKey};
use crate::transition::{
    TransitionCallbacks, TransitionEngine, TransitionError, TransitionProps, TransitionStatus,
    DEFAULT_ANIMATION,
};

/// Settings shared by every child of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOptions {
    pub animation: String,
    pub duration: TransitionDuration,
    pub directional: Option<bool>,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            animation: DEFAULT_ANIMATION.to_string(),
            duration: TransitionDuration::default(),
            directional: None,
        }
    }
}

/// Wrap one child in a visible transition instance.
///
/// `transition_on_mount` decides whether the child animates in. The
/// caller's `callbacks` typically carry an `on_hide` that removes the
/// child from its collection.
pub fn wrap_child<S: Scheduler>(
    options: &GroupOptions,
    transition_on_mount: bool,
    scheduler: S,
    callbacks: TransitionCallbacks,
) -> Result<TransitionEngine<S>, TransitionError> {
    let props = TransitionProps {
        visible: true,
        animation: options.animation.clone(),
        duration: options.duration.clone(),
        directional: options.directional,
        mount_on_show: true,
        unmount_on_hide: false,
        transition_on_mount,
    };
    TransitionEngine::mount(props, scheduler, callbacks)
}

struct GroupItem<K, S: Scheduler> {
    key: K,
    child: Element,
    engine: TransitionEngine<S>,
}

pub struct TransitionGroup<K, S: Scheduler> {
    options: GroupOptions,
    scheduler: S,
    items: Vec<GroupItem<K, S>>,
    hidden: Arc<Mutex<Vec<K>>>,
}

impl<K, S> TransitionGroup<K, S>
where
    K: Clone + Eq + Hash + Send + 'static,
    S: Scheduler,
{
    pub fn new(
        children: Vec<(K, Element)>,
        options: GroupOptions,
        scheduler: S,
    ) -> Result<Self, TransitionError> {
        let mut group = Self {
            options,
            scheduler,
            items: Vec::with_capacity(children.len()),
            hidden: Arc::new(Mutex::new(Vec::new())),
        };
        for (key, child) in children {
            let item = group.wrap(key, child, false)?;
            group.items.push(item);
        }
        Ok(group)
    }

    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    /// Reconcile against a new set of children.
    ///
    /// Every child is processed even if one fails; the first error is
    /// returned.
    pub fn set_children(&mut self, children: Vec<(K, Element)>) -> Result<(), TransitionError> {
        let incoming: HashSet<K> = children.iter().map(|(key, _)| key.clone()).collect();
        let mut first_error = None;

        let mut retained: HashMap<K, GroupItem<K, S>> = HashMap::new();
        let mut leaving: Vec<(Option<K>, GroupItem<K, S>)> = Vec::new();
        let mut anchor: Option<K> = None;
        for mut item in mem::take(&mut self.items) {
            if incoming.contains(&item.key) {
                anchor = Some(item.key.clone());
                retained.insert(item.key.clone(), item);
            } else {
                if item.engine.props().visible {
                    if let Err(err) = item.engine.set_visible(false) {
                        first_error.get_or_insert(err);
                    }
                }
                leaving.push((anchor.clone(), item));
            }
        }

        let mut next = Vec::with_capacity(children.len() + leaving.len());
        for (key, child) in children {
            match retained.remove(&key) {
                Some(mut item) => {
                    item.child = child;
                    if !item.engine.props().visible {
                        if let Err(err) = item.engine.set_visible(true) {
                            first_error.get_or_insert(err);
                        }
                    }
                    next.push(item);
                }
                None => match self.wrap(key, child, true) {
                    Ok(item) => next.push(item),
                    Err(err) => {
                        first_error.get_or_insert(err);
                    }
                },
            }
        }

        // Reverse so that several leavers sharing an anchor keep their order
        for (anchor, item) in leaving.into_iter().rev() {
            let at = anchor
                .and_then(|anchor| next.iter().position(|i: &GroupItem<K, S>| i.key == anchor))
                .map_or(0, |pos| pos + 1);
            next.insert(at, item);
        }

        self.items = next;
        self.remove_hidden();
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Route an expired timer. Returns `false` when no child owns it.
    pub fn handle_timer(&mut self, key: TimerKey) -> Result<bool, TransitionError> {
        let Some(item) = self.items.iter_mut().find(|i| i.engine.id() == key.instance) else {
            return Ok(false);
        };
        let result = item.engine.handle_timer(key.token);
        self.remove_hidden();
        result.map(|()| true)
    }

    /// Rendered children in order.
    pub fn render(&self) -> Vec<Element> {
        self.items
            .iter()
            .filter_map(|item| item.engine.render(&item.child))
            .collect()
    }

    /// Keys currently in the rendered collection, leaving ones included.
    pub fn keys(&self) -> Vec<K> {
        self.items.iter().map(|item| item.key.clone()).collect()
    }

    pub fn status_of(&self, key: &K) -> Option<TransitionStatus> {
        self.items
            .iter()
            .find(|item| &item.key == key)
            .map(|item| item.engine.status())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn wrap(
        &self,
        key: K,
        child: Element,
        transition_on_mount: bool,
    ) -> Result<GroupItem<K, S>, TransitionError> {
        let hidden = Arc::clone(&self.hidden);
        let hidden_key = key.clone();
        let callbacks = TransitionCallbacks::new().on_hide(move |_, _| {
            hidden.lock().push(hidden_key.clone());
            Ok(())
        });
        let engine = wrap_child(
            &self.options,
            transition_on_mount,
            self.scheduler.clone(),
            callbacks,
        )?;
        Ok(GroupItem { key, child, engine })
    }

    fn remove_hidden(&mut self) {
        let hidden: Vec<K> = mem::take(&mut *self.hidden.lock());
        if hidden.is_empty() {
            return;
        }
        self.items.retain(|item| {
            let done = hidden.contains(&item.key)
                && !item.engine.props().visible
                && !item.engine.is_animating();
            if done {
                tracing::debug!(instance = %item.engine.id(), "Removing hidden group child");
            }
            !done
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use std::time::Duration;

    fn child(key: &str) -> (String, Element) {
        (key.to_string(), Element::new("li").with_text(key))
    }

    fn advance(group: &mut TransitionGroup<String, ManualScheduler>, scheduler: &ManualScheduler, ms: u64) {
        scheduler.advance(Duration::from_millis(ms), |key| {
            group.handle_timer(key).unwrap();
        });
    }

    #[test]
    fn initial_children_do_not_animate() {
        let scheduler = ManualScheduler::new();
        let group = TransitionGroup::new(
            vec![child("a"), child("b")],
            GroupOptions::default(),
            scheduler.clone(),
        )
        .unwrap();

        assert_eq!(scheduler.pending(), 0);
        assert_eq!(group.status_of(&"a".to_string()), Some(TransitionStatus::Entered));
        assert_eq!(group.render().len(), 2);
    }

    #[test]
    fn added_child_animates_in() {
        let scheduler = ManualScheduler::new();
        let mut group =
            TransitionGroup::new(vec![child("a")], GroupOptions::default(), scheduler.clone())
                .unwrap();

        group.set_children(vec![child("a"), child("b")]).unwrap();
        assert_eq!(group.keys(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(group.status_of(&"b".to_string()), Some(TransitionStatus::Entering));

        advance(&mut group, &scheduler, 500);
        assert_eq!(group.status_of(&"b".to_string()), Some(TransitionStatus::Entered));
    }

    #[test]
    fn removed_child_stays_until_hidden() {
        let scheduler = ManualScheduler::new();
        let mut group = TransitionGroup::new(
            vec![child("a"), child("b"), child("c")],
            GroupOptions::default(),
            scheduler.clone(),
        )
        .unwrap();

        group.set_children(vec![child("a"), child("c")]).unwrap();
        assert_eq!(
            group.keys(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(group.status_of(&"b".to_string()), Some(TransitionStatus::Exiting));

        advance(&mut group, &scheduler, 499);
        assert_eq!(group.len(), 3);
        advance(&mut group, &scheduler, 1);
        assert_eq!(group.keys(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn readding_a_leaving_child_keeps_it() {
        let scheduler = ManualScheduler::new();
        let mut group =
            TransitionGroup::new(vec![child("a")], GroupOptions::default(), scheduler.clone())
                .unwrap();

        group.set_children(Vec::new()).unwrap();
        advance(&mut group, &scheduler, 100);
        group.set_children(vec![child("a")]).unwrap();
        advance(&mut group, &scheduler, 2000);

        assert_eq!(group.keys(), vec!["a".to_string()]);
        assert_eq!(group.status_of(&"a".to_string()), Some(TransitionStatus::Entered));
    }

    #[test]
    fn foreign_timer_is_not_claimed() {
        let scheduler = ManualScheduler::new();
        let mut group =
            TransitionGroup::new(vec![child("a")], GroupOptions::default(), scheduler).unwrap();
        let key = TimerKey {
            instance: crate::timer::InstanceId::new(),
            token: crate::timer::TimerToken(1),
        };
        assert!(!group.handle_timer(key).unwrap());
    }
}
