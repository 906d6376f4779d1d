//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// `reduce` is the only place a state transition happens, and it has no
/// side effects: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Runs `intent` against the state held in `slot`, in place.
    fn dispatch(slot: &mut Self::State, intent: Self::Intent) {
        *slot = Self::reduce(std::mem::take(slot), intent);
    }
}
