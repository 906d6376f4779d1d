//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are the only way state changes: a search keystroke, a sort
/// selection, a pagination click, or the catalog fetch completing.
pub trait Intent: Send + 'static {}
