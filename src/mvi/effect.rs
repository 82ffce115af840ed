//! Base trait for effects in MVI architecture.

/// Marker trait for effect objects.
///
/// Effects are descriptions of work, never the work itself. The reducer
/// returns them in the order they must run and the shell executes them.
pub trait Effect: Send + 'static {}
