//! Frame rendering for the list and form screens. Presentation only; every
//! decision about what to show is derived from app state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use crate::cache::ResourceState;
use crate::model::{Book, BookStatus};
use crate::ui::app::{App, Route};
use crate::ui::form::{FormField, FormState};
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::list::{filter_books, page_slice, total_pages, DeleteConfirm};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK, STATUS_WARN,
};
use crate::ui::toast::ToastKind;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    draw_header(frame, app, header);
    match app.route() {
        Route::List => draw_list(frame, app, body),
        Route::Form { id } => draw_form(frame, app, body, id.is_some()),
    }
    draw_footer(frame, app, footer);

    if let DeleteConfirm::Pending { in_flight, .. } = &app.list().delete {
        draw_delete_popup(frame, *in_flight);
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " bookstall ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if app.collection_snapshot().is_revalidating() {
        spans.push(Span::styled("· refreshing…", Style::default().fg(DIM_TEXT)));
    }
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_filter_bar(frame, app, chunks[0]);

    match app.books() {
        ResourceState::Loading => {
            let widget = Paragraph::new("Loading books…").style(Style::default().fg(DIM_TEXT));
            frame.render_widget(widget, chunks[1]);
        }
        ResourceState::Failed { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    "Failed to load books.",
                    Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(message, Style::default().fg(DIM_TEXT))),
            ];
            frame.render_widget(Paragraph::new(lines), chunks[1]);
        }
        ResourceState::Ready(books) => draw_table(frame, app, chunks[1], &books),
    }
}

fn draw_filter_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let list = app.list();
    let search_style = if list.search_focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let genre = if list.genre.is_empty() {
        "All Genres"
    } else {
        &list.genre
    };
    let status = list.status.map_or("All Status", |s| s.as_str());

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(DIM_TEXT)),
        Span::styled(
            if list.search.is_empty() && !list.search_focused {
                "title or author".to_string()
            } else {
                format!("{}▏", list.search)
            },
            search_style,
        ),
        Span::styled("   Genre: ", Style::default().fg(DIM_TEXT)),
        Span::styled(genre, Style::default().fg(HEADER_TEXT)),
        Span::styled("   Status: ", Style::default().fg(DIM_TEXT)),
        Span::styled(status, Style::default().fg(HEADER_TEXT)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_table(frame: &mut Frame<'_>, app: &App, area: Rect, books: &[Book]) {
    let list = app.list();
    let filtered = filter_books(books, &list.search, &list.genre, list.status);
    let rows = page_slice(&filtered, list.page);

    if rows.is_empty() {
        let widget = Paragraph::new("No books found.").style(Style::default().fg(DIM_TEXT));
        frame.render_widget(widget, area);
        return;
    }

    let header = Row::new(["Title", "Author", "Genre", "Year", "Status"]).style(
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    );

    let body_rows = rows.iter().enumerate().map(|(idx, book)| {
        let status_style = match book.status {
            BookStatus::Available => Style::default().fg(STATUS_OK),
            BookStatus::Issued => Style::default().fg(STATUS_WARN),
        };
        let row = Row::new(vec![
            Cell::from(book.title.clone()),
            Cell::from(book.author.clone()),
            Cell::from(book.genre.clone()),
            Cell::from(book.published_year.to_string()),
            Cell::from(Span::styled(book.status.as_str(), status_style)),
        ]);
        if idx == list.selected {
            row.style(Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            row
        }
    });

    let table = Table::new(
        body_rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(24),
            Constraint::Percentage(18),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );

    frame.render_widget(table, area);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect, edit_mode: bool) {
    // Edit mode shows a placeholder until the record arrives.
    if edit_mode && !app.form().populated {
        match app.edited_book() {
            Some(ResourceState::Loading) => {
                let widget = Paragraph::new("Loading book…").style(Style::default().fg(DIM_TEXT));
                frame.render_widget(widget, area);
                return;
            }
            Some(ResourceState::Failed { message }) => {
                let widget =
                    Paragraph::new(message).style(Style::default().fg(STATUS_ERROR));
                frame.render_widget(widget, area);
                return;
            }
            _ => {}
        }
    }

    let form = app.form();
    let title = if edit_mode { "Edit Book" } else { "Add Book" };
    let mut lines = Vec::new();
    for field in FormField::ALL {
        lines.push(field_line(form, field));
    }
    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(Span::styled(
        if form.is_submitting() {
            "Submitting…"
        } else {
            "Enter submit · Tab next field · Esc back"
        },
        Style::default().fg(DIM_TEXT),
    )));

    let rect = centered_rect(70, 70, area);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, rect);
}

fn field_line(form: &FormState, field: FormField) -> Line<'static> {
    let value = match field {
        FormField::Title => form.title.clone(),
        FormField::Author => form.author.clone(),
        FormField::Genre => form.genre.clone(),
        FormField::Year => form.published_year.clone(),
        FormField::Status => form
            .status
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "Select Status".to_string()),
    };
    let focused = form.focused == field;
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM_TEXT)
    };
    let value_style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        Span::styled(format!("{:<16}", field.label()), label_style),
        Span::styled(value, value_style),
    ])
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if let Some(toast) = app.toasts().current() {
        let color = match toast.kind {
            ToastKind::Success => STATUS_OK,
            ToastKind::Error => STATUS_ERROR,
        };
        spans.push(Span::styled(
            format!(" {} ", toast.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    } else if *app.route() == Route::List {
        if let ResourceState::Ready(books) = app.books() {
            let list = app.list();
            let filtered = filter_books(&books, &list.search, &list.genre, list.status);
            spans.push(Span::styled(
                format!(" Page {} of {} ", list.page, total_pages(filtered.len())),
                Style::default().fg(HEADER_TEXT),
            ));
        }
        spans.push(Span::styled(
            "/ search · g genre · s status · a add · e edit · d delete · r refresh · q quit",
            Style::default().fg(DIM_TEXT),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_delete_popup(frame: &mut Frame<'_>, in_flight: bool) {
    let rect = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(Span::styled(
            "Are you sure you want to delete this book?",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            if in_flight {
                "Deleting…"
            } else {
                "y: delete · n: cancel"
            },
            Style::default().fg(DIM_TEXT),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm")
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(widget, rect);
}
