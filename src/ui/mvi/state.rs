//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value carries everything a view needs to render, and equal
/// states always render identically.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
