use tokio::sync::mpsc::UnboundedSender;

use crate::api::StoreClient;
use crate::cache::{CacheEvent, CacheStore, ResourceState, Snapshot};
use crate::model::{Book, BookStatus};
use crate::ui::events::{AppEvent, MutationKind, MutationOutcome};
use crate::ui::form::{build_payload, FormIntent, FormReducer, FormState};
use crate::ui::list::{
    filter_books, genre_options, page_slice, total_pages, DeleteConfirm, ListIntent, ListReducer,
    ListState,
};
use crate::ui::mvi::Reducer;
use crate::ui::toast::Toasts;

/// Which screen is active. The form route carries the record id in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Form { id: Option<String> },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    list: ListState,
    form: FormState,
    client: StoreClient,
    cache: CacheStore,
    events: UnboundedSender<AppEvent>,
    toasts: Toasts,
}

impl App {
    pub fn new(client: StoreClient, cache: CacheStore, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            route: Route::List,
            list: ListState::default(),
            form: FormState::default(),
            client,
            cache,
            events,
            toasts: Toasts::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    // ========================================================================
    // Cached resources
    // ========================================================================

    /// Snapshot of the collection entry; the first call starts the fetch.
    pub fn collection_snapshot(&self) -> Snapshot {
        self.cache.read(&self.client.collection_key())
    }

    pub fn books(&self) -> ResourceState<Vec<Book>> {
        self.collection_snapshot().view()
    }

    /// The record being edited, when the form route points at one.
    pub fn edited_book(&self) -> Option<ResourceState<Book>> {
        match &self.route {
            Route::Form { id: Some(id) } => {
                Some(self.cache.read(&self.client.item_key(id)).view())
            }
            _ => None,
        }
    }

    /// Genre filter options derived from the cached collection.
    pub fn genres(&self) -> Vec<String> {
        match self.books() {
            ResourceState::Ready(books) => genre_options(&books),
            _ => Vec::new(),
        }
    }

    /// Identifier of the currently selected row, if any.
    pub fn selected_book_id(&self) -> Option<String> {
        let ResourceState::Ready(books) = self.books() else {
            return None;
        };
        let filtered = filter_books(&books, &self.list.search, &self.list.genre, self.list.status);
        let rows = page_slice(&filtered, self.list.page);
        rows.get(self.list.selected).and_then(|b| b.id.clone())
    }

    /// Force a refetch of the collection.
    pub fn refresh(&self) {
        self.cache.invalidate(&self.client.collection_key());
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn open_create_form(&mut self) {
        self.form = FormState::default();
        self.route = Route::Form { id: None };
    }

    pub fn open_edit_form(&mut self, id: String) {
        self.form = FormState::default();
        let key = self.client.item_key(&id);
        self.route = Route::Form { id: Some(id) };
        // Already cached? Populate immediately instead of waiting for a settle.
        if let ResourceState::Ready(book) = self.cache.read(&key).view::<Book>() {
            self.dispatch_form(FormIntent::Populate { book });
        }
    }

    pub fn back_to_list(&mut self) {
        if let Route::Form { id: Some(id) } = &self.route {
            // Drop the item entry so a late fetch has no owner to update.
            self.cache.forget(&self.client.item_key(id));
        }
        self.form = FormState::default();
        self.route = Route::List;
    }

    // ========================================================================
    // Event application
    // ========================================================================

    pub fn on_tick(&mut self) {
        self.toasts.prune();
    }

    pub fn on_cache_event(&mut self, event: CacheEvent) {
        let CacheEvent::Updated { key } = event;
        if key == self.client.collection_key() {
            if let ResourceState::Ready(books) = self.books() {
                let filtered =
                    filter_books(&books, &self.list.search, &self.list.genre, self.list.status);
                self.dispatch_list(ListIntent::ClampPage {
                    total_pages: total_pages(filtered.len()),
                });
                // A shrunken collection can leave the selection past the last
                // row; pull it back so the highlight survives deletes.
                let row_count = page_slice(&filtered, self.list.page).len();
                self.dispatch_list(ListIntent::MoveSelection { delta: 0, row_count });
            }
            return;
        }

        let editing = match &self.route {
            Route::Form { id: Some(id) } => Some(id.clone()),
            _ => None,
        };
        if let Some(id) = editing {
            if key == self.client.item_key(&id) {
                if let ResourceState::Ready(book) = self.cache.read(&key).view::<Book>() {
                    self.dispatch_form(FormIntent::Populate { book });
                }
            }
        }
    }

    pub fn on_mutation(&mut self, outcome: MutationOutcome) {
        match outcome.kind {
            MutationKind::Delete => match outcome.result {
                Ok(()) => {
                    self.cache.invalidate(&self.client.collection_key());
                    self.toasts.success("Book deleted!");
                    self.dispatch_list(ListIntent::DeleteSettled { ok: true });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "delete failed");
                    self.toasts.error(err.user_message());
                    self.dispatch_list(ListIntent::DeleteSettled { ok: false });
                }
            },
            MutationKind::Create | MutationKind::Update => match outcome.result {
                Ok(()) => {
                    self.cache.invalidate(&self.client.collection_key());
                    self.toasts.success(match outcome.kind {
                        MutationKind::Create => "Book added!",
                        _ => "Book updated!",
                    });
                    self.back_to_list();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "submit failed");
                    self.toasts.error(err.user_message());
                    self.dispatch_form(FormIntent::SubmitFailed {
                        message: err.to_string(),
                    });
                }
            },
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Validate and submit the form. Validation failures never reach the
    /// network; a second submit while one is in flight is a no-op.
    pub fn submit_form(&mut self) {
        if self.form.is_submitting() {
            return;
        }
        let fields = match build_payload(&self.form) {
            Ok(fields) => fields,
            Err(err) => {
                self.dispatch_form(FormIntent::Rejected {
                    message: err.to_string(),
                });
                return;
            }
        };

        let id = match &self.route {
            Route::Form { id } => id.clone(),
            Route::List => return,
        };
        self.dispatch_form(FormIntent::SubmitStarted);

        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let (kind, result) = match id {
                Some(id) => (
                    MutationKind::Update,
                    client.update(&id, &fields).await,
                ),
                None => (
                    MutationKind::Create,
                    client.create(&fields).await.map(|_| ()),
                ),
            };
            let _ = events.send(AppEvent::Mutation(MutationOutcome { kind, result }));
        });
    }

    /// Run the confirmed delete. Does nothing unless a confirmation is open
    /// and idle.
    pub fn confirm_delete(&mut self) {
        let id = match &self.list.delete {
            DeleteConfirm::Pending { id, in_flight: false } => id.clone(),
            _ => return,
        };
        self.dispatch_list(ListIntent::DeleteStarted);

        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.delete(&id).await;
            let _ = events.send(AppEvent::Mutation(MutationOutcome {
                kind: MutationKind::Delete,
                result,
            }));
        });
    }

    // ========================================================================
    // Filter cycling helpers for the input layer
    // ========================================================================

    /// Next genre filter value: all -> each known genre -> all.
    pub fn next_genre(&self) -> String {
        let options = self.genres();
        if options.is_empty() {
            return String::new();
        }
        match options.iter().position(|g| g == &self.list.genre) {
            None => options[0].clone(),
            Some(idx) if idx + 1 < options.len() => options[idx + 1].clone(),
            Some(_) => String::new(),
        }
    }

    /// Next status filter value: all -> Available -> Issued -> all.
    pub fn next_status(&self) -> Option<BookStatus> {
        match self.list.status {
            None => Some(BookStatus::Available),
            Some(BookStatus::Available) => Some(BookStatus::Issued),
            Some(BookStatus::Issued) => None,
        }
    }
}
