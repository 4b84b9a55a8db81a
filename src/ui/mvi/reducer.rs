//! Pure state transitions.

use super::intent::Intent;
use super::state::UiState;

/// A pure transition function over one controller's state.
///
/// Every change to a [`UiState`] goes through `reduce`. Side effects such as
/// network calls and navigation are decided in the app layer from the
/// resulting state, never inside the reducer.
pub trait Reducer {
    /// State this reducer owns.
    type State: UiState;

    /// Intents it accepts.
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
