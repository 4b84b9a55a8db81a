//! Marker trait for controller-owned state.

/// State owned by one controller and replaced wholesale by its reducer.
///
/// `Default` supports the take-and-replace dispatch in the app layer; `Clone`
/// and `PartialEq` let views snapshot and diff. Nothing remote lives here,
/// only what the user typed or selected.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
