//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Host updates (new props delivered by the owning component)
/// - System events (timer expiry, scheduling failures)
/// - Teardown
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
