//! Add/edit form controller: field state, validation, and payload building.
//!
//! The reducer owns what the user typed; [`build_payload`] is the only path
//! from form representation to the API wire shape, and it refuses to produce
//! one until every required field is present and the year parses.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormPhase, FormState};

use thiserror::Error;

use crate::model::BookFields;

/// A submission rejected before any network call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("published year must be a whole number")]
    InvalidYear,
}

/// Validate the form and coerce it into the API payload.
///
/// The year field is text during editing; numeric coercion happens here, at
/// submit time.
pub fn build_payload(state: &FormState) -> Result<BookFields, ValidationError> {
    let title = state.title.trim();
    if title.is_empty() {
        return Err(ValidationError::Missing("Title"));
    }
    let author = state.author.trim();
    if author.is_empty() {
        return Err(ValidationError::Missing("Author"));
    }
    let genre = state.genre.trim();
    if genre.is_empty() {
        return Err(ValidationError::Missing("Genre"));
    }
    let year = state.published_year.trim();
    if year.is_empty() {
        return Err(ValidationError::Missing("Published year"));
    }
    let published_year: i32 = year.parse().map_err(|_| ValidationError::InvalidYear)?;
    let status = state.status.ok_or(ValidationError::Missing("Status"))?;

    Ok(BookFields {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        published_year,
        status,
    })
}
