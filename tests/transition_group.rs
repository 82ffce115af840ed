mod common;

use std::time::Duration;

use common::{recorder, take};
use semantic_transition::duration::TransitionDuration;
use semantic_transition::group::{wrap_child, GroupOptions, TransitionGroup};
use semantic_transition::render::Element;
use semantic_transition::timer::ManualScheduler;
use semantic_transition::transition::{LifecycleHook, TransitionStatus};

fn item(key: u32) -> (u32, Element) {
    (key, Element::new("li").with_class("item").with_text(key.to_string()))
}

fn pump(group: &mut TransitionGroup<u32, ManualScheduler>, scheduler: &ManualScheduler, ms: u64) {
    scheduler.advance(Duration::from_millis(ms), |key| {
        assert!(group.handle_timer(key).unwrap());
    });
}

#[test]
fn wrap_child_applies_group_options() {
    let options = GroupOptions {
        animation: "scale".to_string(),
        duration: 200.into(),
        directional: None,
    };
    let scheduler = ManualScheduler::new();
    let (callbacks, log) = recorder();
    let engine = wrap_child(&options, true, scheduler.clone(), callbacks).unwrap();

    assert!(engine.props().visible);
    assert_eq!(engine.props().animation, "scale");
    assert!(!engine.props().unmount_on_hide);
    assert_eq!(engine.status(), TransitionStatus::Entering);
    assert_eq!(
        scheduler.due_at(engine.pending_timer().unwrap()),
        Some(Duration::from_millis(200))
    );
    assert_eq!(take(&log), vec![(LifecycleHook::Start, TransitionStatus::Entering)]);
}

#[test]
fn group_renders_enter_and_leave_classes() {
    let scheduler = ManualScheduler::new();
    let options = GroupOptions {
        duration: 100.into(),
        ..GroupOptions::default()
    };
    let mut group =
        TransitionGroup::new(vec![item(1), item(2)], options, scheduler.clone()).unwrap();
    assert_eq!(group.options().duration, TransitionDuration::Millis(100));
    assert_eq!(group.options().animation, "fade");

    group.set_children(vec![item(2), item(3)]).unwrap();
    let classes: Vec<_> = group
        .render()
        .into_iter()
        .map(|el| el.class_name.unwrap_or_default())
        .collect();
    assert_eq!(
        classes,
        vec![
            "fade item animating out visible transition",
            "fade item visible transition",
            "fade item animating in visible transition",
        ]
    );

    pump(&mut group, &scheduler, 100);
    assert_eq!(group.keys(), vec![2, 3]);
    assert!(group
        .render()
        .iter()
        .all(|el| el.class_name.as_deref() == Some("fade item visible transition")));
}

#[test]
fn emptied_group_becomes_empty_after_hide() {
    let scheduler = ManualScheduler::new();
    let mut group = TransitionGroup::new(
        vec![item(1), item(2), item(3)],
        GroupOptions::default(),
        scheduler.clone(),
    )
    .unwrap();

    group.set_children(Vec::new()).unwrap();
    assert_eq!(group.len(), 3);
    pump(&mut group, &scheduler, 500);
    assert!(group.is_empty());
    assert!(group.render().is_empty());
}
