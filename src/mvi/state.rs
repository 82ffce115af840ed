//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to move through the reducer by value
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
