use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::{DeleteConfirm, ListState};
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::SetSearch(search) => ListState {
                search,
                page: 1,
                selected: 0,
                ..state
            },
            ListIntent::SetGenre(genre) => ListState {
                genre,
                page: 1,
                selected: 0,
                ..state
            },
            ListIntent::SetStatus(status) => ListState {
                status,
                page: 1,
                selected: 0,
                ..state
            },
            ListIntent::FocusSearch => ListState {
                search_focused: true,
                ..state
            },
            ListIntent::BlurSearch => ListState {
                search_focused: false,
                ..state
            },
            ListIntent::NextPage { total_pages } => {
                let page = if state.page < total_pages {
                    state.page + 1
                } else {
                    state.page
                };
                ListState {
                    page,
                    selected: 0,
                    ..state
                }
            }
            ListIntent::PrevPage => {
                let page = state.page.saturating_sub(1).max(1);
                ListState {
                    page,
                    selected: 0,
                    ..state
                }
            }
            ListIntent::ClampPage { total_pages } => {
                let page = state.page.min(total_pages.max(1));
                ListState { page, ..state }
            }
            ListIntent::MoveSelection { delta, row_count } => {
                if row_count == 0 {
                    return ListState {
                        selected: 0,
                        ..state
                    };
                }
                let current = state.selected.min(row_count - 1);
                let selected = if delta.is_negative() {
                    current.saturating_sub(delta.unsigned_abs() as usize)
                } else {
                    (current + delta as usize).min(row_count - 1)
                };
                ListState { selected, ..state }
            }
            ListIntent::RequestDelete { id } => ListState {
                delete: DeleteConfirm::Pending {
                    id,
                    in_flight: false,
                },
                ..state
            },
            ListIntent::CancelDelete => ListState {
                delete: DeleteConfirm::None,
                ..state
            },
            ListIntent::DeleteStarted => match state.delete {
                DeleteConfirm::Pending { id, .. } => ListState {
                    delete: DeleteConfirm::Pending {
                        id,
                        in_flight: true,
                    },
                    ..state
                },
                DeleteConfirm::None => state,
            },
            ListIntent::DeleteSettled { ok } => match state.delete {
                DeleteConfirm::Pending { id, .. } if !ok => ListState {
                    delete: DeleteConfirm::Pending {
                        id,
                        in_flight: false,
                    },
                    ..state
                },
                _ => ListState {
                    delete: DeleteConfirm::None,
                    ..state
                },
            },
        }
    }
}
