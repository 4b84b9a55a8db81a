use crate::model::BookStatus;
use crate::ui::mvi::UiState;

/// Confirmation sub-state for a pending delete.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteConfirm {
    #[default]
    None,
    /// A row's delete was selected; waiting for the user to confirm.
    /// `in_flight` is set while the remote delete runs.
    Pending { id: String, in_flight: bool },
}

impl DeleteConfirm {
    pub fn is_pending(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Ephemeral state of the list view.
///
/// Holds only what the user typed or selected; the book data itself lives in
/// the cache and is joined in at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Case-insensitive substring match against title or author. Empty = all.
    pub search: String,
    /// Exact genre filter. Empty = all genres.
    pub genre: String,
    /// Exact status filter. `None` = all statuses.
    pub status: Option<BookStatus>,
    /// Current page, 1-based. Never below 1.
    pub page: usize,
    /// Selected row within the current page.
    pub selected: usize,
    /// Whether keystrokes currently edit the search box.
    pub search_focused: bool,
    pub delete: DeleteConfirm,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            genre: String::new(),
            status: None,
            page: 1,
            selected: 0,
            search_focused: false,
            delete: DeleteConfirm::None,
        }
    }
}

impl UiState for ListState {}
