//! List view controller: filtering, pagination, and ephemeral list UI state.

mod intent;
mod query;
mod reducer;
mod state;

pub use intent::ListIntent;
pub use query::{filter_books, genre_options, page_slice, total_pages, PAGE_SIZE};
pub use reducer::ListReducer;
pub use state::{DeleteConfirm, ListState};
