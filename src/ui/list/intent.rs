use crate::model::BookStatus;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    /// Replace the search text. Resets the page to 1.
    SetSearch(String),
    /// Replace the genre filter. Resets the page to 1.
    SetGenre(String),
    /// Replace the status filter. Resets the page to 1.
    SetStatus(Option<BookStatus>),
    FocusSearch,
    BlurSearch,
    /// Advance one page, bounded by the known page count.
    NextPage { total_pages: usize },
    PrevPage,
    /// Pull the page back inside a freshly computed page count.
    ClampPage { total_pages: usize },
    /// Move the row selection within the current page.
    MoveSelection { delta: i32, row_count: usize },
    /// Open the delete confirmation for a row.
    RequestDelete { id: String },
    /// Dismiss the confirmation without side effects.
    CancelDelete,
    /// The remote delete was kicked off.
    DeleteStarted,
    /// The remote delete finished. Only success dismisses the confirmation;
    /// failure keeps it open so the user can retry or cancel.
    DeleteSettled { ok: bool },
}

impl Intent for ListIntent {}
