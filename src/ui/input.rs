//! Keyboard handling: maps key events to intents and app operations based on
//! the active route and focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cache::ResourceState;
use crate::ui::app::{App, Route};
use crate::ui::form::{FormField, FormIntent};
use crate::ui::list::{filter_books, page_slice, total_pages, ListIntent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.route().clone() {
        Route::List => handle_list_key(app, key),
        Route::Form { .. } => handle_form_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    // The confirmation dialog swallows everything while open.
    if app.list().delete.is_pending() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => app.dispatch_list(ListIntent::CancelDelete),
            _ => {}
        }
        return;
    }

    if app.list().search_focused {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.dispatch_list(ListIntent::BlurSearch),
            KeyCode::Backspace => {
                let mut search = app.list().search.clone();
                search.pop();
                app.dispatch_list(ListIntent::SetSearch(search));
            }
            KeyCode::Char(ch) => {
                let mut search = app.list().search.clone();
                search.push(ch);
                app.dispatch_list(ListIntent::SetSearch(search));
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.dispatch_list(ListIntent::FocusSearch),
        KeyCode::Char('g') => {
            let genre = app.next_genre();
            app.dispatch_list(ListIntent::SetGenre(genre));
        }
        KeyCode::Char('s') => {
            let status = app.next_status();
            app.dispatch_list(ListIntent::SetStatus(status));
        }
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_book_id() {
                app.open_edit_form(id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_book_id() {
                app.dispatch_list(ListIntent::RequestDelete { id });
            }
        }
        KeyCode::Left | KeyCode::Char('h') => app.dispatch_list(ListIntent::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => {
            if let ResourceState::Ready(books) = app.books() {
                let list = app.list();
                let filtered = filter_books(&books, &list.search, &list.genre, list.status);
                app.dispatch_list(ListIntent::NextPage {
                    total_pages: total_pages(filtered.len()),
                });
            }
        }
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        _ => {}
    }
}

fn move_selection(app: &mut App, delta: i32) {
    let ResourceState::Ready(books) = app.books() else {
        return;
    };
    let list = app.list();
    let filtered = filter_books(&books, &list.search, &list.genre, list.status);
    let row_count = page_slice(&filtered, list.page).len();
    app.dispatch_list(ListIntent::MoveSelection { delta, row_count });
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.back_to_list(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_form();
        }
        KeyCode::Enter => {
            if app.form().focused == FormField::Status {
                app.dispatch_form(FormIntent::CycleStatus);
            } else {
                app.submit_form();
            }
        }
        KeyCode::Char(' ') if app.form().focused == FormField::Status => {
            app.dispatch_form(FormIntent::CycleStatus);
        }
        KeyCode::Backspace => app.dispatch_form(FormIntent::PopChar),
        KeyCode::Char(ch) => app.dispatch_form(FormIntent::PushChar(ch)),
        _ => {}
    }
}
