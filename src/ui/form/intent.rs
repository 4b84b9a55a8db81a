use crate::model::Book;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Append a character to the focused text field. Ignored while submitting
    /// and on the status field; the year field accepts digits only.
    PushChar(char),
    /// Delete the last character of the focused text field.
    PopChar,
    /// Advance the status selection (None -> Available -> Issued -> Available).
    CycleStatus,
    FocusNext,
    FocusPrev,
    /// Fill the fields from a fetched entity (edit mode, applied once).
    Populate { book: Book },
    /// Submission passed validation and the network call started.
    SubmitStarted,
    /// Submission failed; the message is retained alongside the form.
    SubmitFailed { message: String },
    /// A pre-submission validation failure to surface inline.
    Rejected { message: String },
}

impl Intent for FormIntent {}
