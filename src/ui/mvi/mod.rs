//! Minimal MVI (model-view-intent) plumbing.
//!
//! Controllers own a state value, intents describe everything that can happen
//! to it, and a reducer is the only place transitions occur. Side effects
//! (network, navigation) live outside the reducers, in the app layer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
