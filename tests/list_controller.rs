use bookstall::model::{Book, BookStatus};
use bookstall::ui::list::{
    filter_books, genre_options, page_slice, total_pages, DeleteConfirm, ListIntent, ListReducer,
    ListState, PAGE_SIZE,
};
use bookstall::ui::mvi::Reducer;

fn book(title: &str, author: &str, genre: &str, status: BookStatus) -> Book {
    Book {
        id: Some(format!("id-{title}")),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        published_year: 2000,
        status,
    }
}

fn sample_books() -> Vec<Book> {
    vec![
        book("Dune", "Herbert", "Sci-Fi", BookStatus::Available),
        book("Emma", "Austen", "Classic", BookStatus::Issued),
        book("Neuromancer", "Gibson", "Sci-Fi", BookStatus::Available),
        book("Persuasion", "Austen", "Classic", BookStatus::Available),
    ]
}

// -- filtering ------------------------------------------------------------

#[test]
fn empty_filters_pass_everything_in_order() {
    let books = sample_books();
    let filtered = filter_books(&books, "", "", None);
    let titles: Vec<&str> = filtered.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Emma", "Neuromancer", "Persuasion"]);
}

#[test]
fn search_matches_title_or_author_case_insensitively() {
    let books = sample_books();
    let by_title = filter_books(&books, "dUnE", "", None);
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Dune");

    let by_author = filter_books(&books, "austen", "", None);
    assert_eq!(by_author.len(), 2);
}

#[test]
fn genre_and_status_are_exact_matches() {
    let books = sample_books();
    let scifi = filter_books(&books, "", "Sci-Fi", None);
    assert_eq!(scifi.len(), 2);

    // Prefixes do not match.
    assert!(filter_books(&books, "", "Sci", None).is_empty());

    let issued = filter_books(&books, "", "", Some(BookStatus::Issued));
    assert_eq!(issued.len(), 1);
    assert_eq!(issued[0].title, "Emma");
}

#[test]
fn all_predicates_combine_with_and() {
    let books = sample_books();
    let filtered = filter_books(&books, "austen", "Classic", Some(BookStatus::Available));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Persuasion");
}

// -- pagination -----------------------------------------------------------

#[test]
fn total_pages_is_ceiling_with_minimum_one() {
    assert_eq!(total_pages(0), 1);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(PAGE_SIZE), 1);
    assert_eq!(total_pages(PAGE_SIZE + 1), 2);
    assert_eq!(total_pages(35), 4);
}

#[test]
fn page_slice_windows_the_filtered_set() {
    let books: Vec<Book> = (0..25)
        .map(|i| book(&format!("B{i:02}"), "A", "G", BookStatus::Available))
        .collect();
    let refs: Vec<&Book> = books.iter().collect();

    assert_eq!(page_slice(&refs, 1).len(), 10);
    assert_eq!(page_slice(&refs, 3).len(), 5);
    assert_eq!(page_slice(&refs, 3)[0].title, "B20");
    assert!(page_slice(&refs, 4).is_empty());
}

#[test]
fn genre_options_are_distinct_in_first_seen_order() {
    let books = sample_books();
    assert_eq!(genre_options(&books), ["Sci-Fi", "Classic"]);
    assert!(genre_options(&[]).is_empty());
}

// -- reducer: filters and paging ------------------------------------------

#[test]
fn changing_search_resets_page_and_keeps_other_filters() {
    let state = ListState {
        genre: "Sci-Fi".to_string(),
        status: Some(BookStatus::Issued),
        page: 3,
        ..ListState::default()
    };
    let state = ListReducer::reduce(state, ListIntent::SetSearch("dune".to_string()));
    assert_eq!(state.page, 1);
    assert_eq!(state.search, "dune");
    assert_eq!(state.genre, "Sci-Fi");
    assert_eq!(state.status, Some(BookStatus::Issued));
}

#[test]
fn changing_genre_and_status_reset_page() {
    let state = ListState {
        page: 2,
        ..ListState::default()
    };
    let state = ListReducer::reduce(state, ListIntent::SetGenre("Classic".to_string()));
    assert_eq!(state.page, 1);

    let state = ListState {
        page: 2,
        ..state
    };
    let state = ListReducer::reduce(state, ListIntent::SetStatus(None));
    assert_eq!(state.page, 1);
}

#[test]
fn page_navigation_does_not_touch_filters() {
    let state = ListState {
        search: "dune".to_string(),
        genre: "Sci-Fi".to_string(),
        ..ListState::default()
    };
    let state = ListReducer::reduce(state, ListIntent::NextPage { total_pages: 3 });
    assert_eq!(state.page, 2);
    assert_eq!(state.search, "dune");
    assert_eq!(state.genre, "Sci-Fi");
}

#[test]
fn next_page_is_bounded_by_total_pages() {
    let state = ListState {
        page: 3,
        ..ListState::default()
    };
    let state = ListReducer::reduce(state, ListIntent::NextPage { total_pages: 3 });
    assert_eq!(state.page, 3);
}

#[test]
fn prev_page_never_goes_below_one() {
    let state = ListReducer::reduce(ListState::default(), ListIntent::PrevPage);
    assert_eq!(state.page, 1);

    let state = ListState {
        page: 2,
        ..ListState::default()
    };
    let state = ListReducer::reduce(state, ListIntent::PrevPage);
    assert_eq!(state.page, 1);
}

#[test]
fn clamp_pulls_page_inside_new_page_count() {
    let state = ListState {
        page: 5,
        ..ListState::default()
    };
    let state = ListReducer::reduce(state, ListIntent::ClampPage { total_pages: 2 });
    assert_eq!(state.page, 2);

    let state = ListReducer::reduce(state, ListIntent::ClampPage { total_pages: 0 });
    assert_eq!(state.page, 1);
}

// -- reducer: selection ---------------------------------------------------

#[test]
fn selection_moves_within_row_count() {
    let state = ListReducer::reduce(
        ListState::default(),
        ListIntent::MoveSelection {
            delta: 1,
            row_count: 3,
        },
    );
    assert_eq!(state.selected, 1);

    let state = ListReducer::reduce(
        state,
        ListIntent::MoveSelection {
            delta: 5,
            row_count: 3,
        },
    );
    assert_eq!(state.selected, 2);

    let state = ListReducer::reduce(
        state,
        ListIntent::MoveSelection {
            delta: -10,
            row_count: 3,
        },
    );
    assert_eq!(state.selected, 0);
}

#[test]
fn selection_collapses_when_page_is_empty() {
    let state = ListState {
        selected: 4,
        ..ListState::default()
    };
    let state = ListReducer::reduce(
        state,
        ListIntent::MoveSelection {
            delta: 1,
            row_count: 0,
        },
    );
    assert_eq!(state.selected, 0);
}

// -- reducer: delete confirmation -----------------------------------------

#[test]
fn request_delete_opens_confirmation() {
    let state = ListReducer::reduce(
        ListState::default(),
        ListIntent::RequestDelete {
            id: "id-1".to_string(),
        },
    );
    assert_eq!(
        state.delete,
        DeleteConfirm::Pending {
            id: "id-1".to_string(),
            in_flight: false
        }
    );
}

#[test]
fn cancel_clears_confirmation() {
    let state = ListReducer::reduce(
        ListState::default(),
        ListIntent::RequestDelete {
            id: "id-1".to_string(),
        },
    );
    let state = ListReducer::reduce(state, ListIntent::CancelDelete);
    assert_eq!(state.delete, DeleteConfirm::None);
}

#[test]
fn delete_started_marks_in_flight() {
    let state = ListReducer::reduce(
        ListState::default(),
        ListIntent::RequestDelete {
            id: "id-1".to_string(),
        },
    );
    let state = ListReducer::reduce(state, ListIntent::DeleteStarted);
    assert_eq!(
        state.delete,
        DeleteConfirm::Pending {
            id: "id-1".to_string(),
            in_flight: true
        }
    );
}

#[test]
fn successful_delete_dismisses_confirmation() {
    let state = ListReducer::reduce(
        ListState::default(),
        ListIntent::RequestDelete {
            id: "id-1".to_string(),
        },
    );
    let state = ListReducer::reduce(state, ListIntent::DeleteStarted);
    let state = ListReducer::reduce(state, ListIntent::DeleteSettled { ok: true });
    assert_eq!(state.delete, DeleteConfirm::None);
}

#[test]
fn failed_delete_keeps_confirmation_open_for_retry() {
    let state = ListReducer::reduce(
        ListState::default(),
        ListIntent::RequestDelete {
            id: "id-1".to_string(),
        },
    );
    let state = ListReducer::reduce(state, ListIntent::DeleteStarted);
    let state = ListReducer::reduce(state, ListIntent::DeleteSettled { ok: false });
    assert_eq!(
        state.delete,
        DeleteConfirm::Pending {
            id: "id-1".to_string(),
            in_flight: false
        }
    );
}
