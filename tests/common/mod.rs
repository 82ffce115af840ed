//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use semantic_transition::timer::{ManualScheduler, TimerKey};
use semantic_transition::transition::{
    LifecycleHook, TransitionCallbacks, TransitionEngine, TransitionProps, TransitionStatus,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub type Event = (LifecycleHook, TransitionStatus);
pub type EventLog = Arc<Mutex<Vec<Event>>>;

/// Callbacks that append every hook invocation to a shared log.
pub fn recorder() -> (TransitionCallbacks, EventLog) {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let callbacks = TransitionCallbacks::new().on_any(move |hook, _props, status| {
        sink.lock().push((hook, status));
        Ok(())
    });
    (callbacks, log)
}

/// Drain the log.
pub fn take(log: &EventLog) -> Vec<Event> {
    std::mem::take(&mut *log.lock())
}

/// Mount an engine on a fresh virtual clock with a recording callback set.
pub fn mount(
    props: TransitionProps,
) -> (TransitionEngine<ManualScheduler>, ManualScheduler, EventLog) {
    let scheduler = ManualScheduler::new();
    let (callbacks, log) = recorder();
    let engine = TransitionEngine::mount(props, scheduler.clone(), callbacks)
        .expect("mount should succeed");
    (engine, scheduler, log)
}

/// Move virtual time forward, routing fired timers to `engine`.
pub fn advance(engine: &mut TransitionEngine<ManualScheduler>, scheduler: &ManualScheduler, ms: u64) {
    scheduler.advance(Duration::from_millis(ms), |key: TimerKey| {
        assert_eq!(key.instance, engine.id(), "timer routed to wrong instance");
        engine.handle_timer(key.token).expect("timer handling failed");
    });
}

/// Fire timers until the engine comes to rest.
pub fn settle(engine: &mut TransitionEngine<ManualScheduler>, scheduler: &ManualScheduler) {
    scheduler.run_until_idle(|key: TimerKey| {
        engine.handle_timer(key.token).expect("timer handling failed");
    });
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
