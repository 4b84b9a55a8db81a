//! Pure derivations over the cached collection: filtering, pagination, and
//! the genre filter's option set. Behavior is what the list view renders; the
//! reducer never sees book data.

use crate::model::{Book, BookStatus};

pub const PAGE_SIZE: usize = 10;

/// Select the books passing all three filters, preserving collection order.
///
/// Search is a case-insensitive substring match against title or author;
/// genre and status are exact matches. Empty filters pass everything.
pub fn filter_books<'a>(
    books: &'a [Book],
    search: &str,
    genre: &str,
    status: Option<BookStatus>,
) -> Vec<&'a Book> {
    let needle = search.to_lowercase();
    books
        .iter()
        .filter(|b| {
            (needle.is_empty()
                || b.title.to_lowercase().contains(&needle)
                || b.author.to_lowercase().contains(&needle))
                && (genre.is_empty() || b.genre == genre)
                && status.is_none_or(|s| b.status == s)
        })
        .collect()
}

/// Page count for a filtered set. An empty set still reports one page.
pub fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE).max(1)
}

/// The rows visible on `page` (1-based).
pub fn page_slice<'a, 'b>(filtered: &'b [&'a Book], page: usize) -> &'b [&'a Book] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= filtered.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(filtered.len());
    &filtered[start..end]
}

/// Distinct genre values present in the collection, in first-seen order.
/// Recomputed whenever the collection changes; the filter bar offers these.
pub fn genre_options(books: &[Book]) -> Vec<String> {
    let mut seen = Vec::new();
    for book in books {
        if !seen.iter().any(|g| g == &book.genre) {
            seen.push(book.genre.clone());
        }
    }
    seen
}
