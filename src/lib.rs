//! Animated visibility for declarative UI components.
//!
//! A [`transition::TransitionEngine`] follows a `visible` flag through a
//! timed enter/exit sequence and reports, at any instant, the classes and
//! inline style its wrapped child should render with. The same engine
//! backs [`portal::TransitionablePortal`] and [`group::TransitionGroup`].

pub mod classes;
pub mod config;
pub mod duration;
pub mod group;
pub mod logging;
pub mod mvi;
pub mod portal;
pub mod render;
pub mod timer;
pub mod transition;
