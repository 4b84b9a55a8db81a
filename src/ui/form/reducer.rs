use crate::model::BookStatus;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormPhase, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Field edits are frozen while a submission is in flight.
        if state.phase == FormPhase::Submitting {
            return match intent {
                FormIntent::SubmitFailed { message } => FormState {
                    phase: FormPhase::Idle,
                    error: Some(message),
                    ..state
                },
                _ => state,
            };
        }

        match intent {
            FormIntent::PushChar(ch) => {
                let mut state = state;
                match state.focused {
                    FormField::Title => state.title.push(ch),
                    FormField::Author => state.author.push(ch),
                    FormField::Genre => state.genre.push(ch),
                    FormField::Year => {
                        if ch.is_ascii_digit() {
                            state.published_year.push(ch);
                        }
                    }
                    FormField::Status => {}
                }
                state
            }
            FormIntent::PopChar => {
                let mut state = state;
                match state.focused {
                    FormField::Title => {
                        state.title.pop();
                    }
                    FormField::Author => {
                        state.author.pop();
                    }
                    FormField::Genre => {
                        state.genre.pop();
                    }
                    FormField::Year => {
                        state.published_year.pop();
                    }
                    FormField::Status => {}
                }
                state
            }
            FormIntent::CycleStatus => {
                let status = match state.status {
                    None => Some(BookStatus::Available),
                    Some(BookStatus::Available) => Some(BookStatus::Issued),
                    Some(BookStatus::Issued) => Some(BookStatus::Available),
                };
                FormState { status, ..state }
            }
            FormIntent::FocusNext => FormState {
                focused: state.focused.next(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focused: state.focused.prev(),
                ..state
            },
            FormIntent::Populate { book } => {
                if state.populated {
                    return state;
                }
                FormState {
                    title: book.title,
                    author: book.author,
                    genre: book.genre,
                    published_year: book.published_year.to_string(),
                    status: Some(book.status),
                    populated: true,
                    ..state
                }
            }
            FormIntent::SubmitStarted => FormState {
                phase: FormPhase::Submitting,
                error: None,
                ..state
            },
            FormIntent::SubmitFailed { message } | FormIntent::Rejected { message } => FormState {
                error: Some(message),
                ..state
            },
        }
    }
}
