use super::intent::Intent;
use super::state::UiState;

/// The only place where UI state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure: no I/O, no clock reads. Anything time-dependent travels in the intent.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
