use crate::model::BookStatus;
use crate::ui::mvi::UiState;

/// The editable fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Genre,
    Year,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Genre,
        FormField::Year,
        FormField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Genre => "Genre",
            FormField::Year => "Published Year",
            FormField::Status => "Status",
        }
    }

    pub fn next(&self) -> FormField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> FormField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Submission phase. At most one submission is in flight; the submit control
/// is disabled while `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Transient state of the add/edit form.
///
/// `published_year` stays a string until submit-time coercion; `status` has no
/// default selection and must be chosen explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: String,
    pub status: Option<BookStatus>,
    pub focused: FormField,
    pub phase: FormPhase,
    /// Set once edit-mode fields have been filled from the fetched entity,
    /// so a later revalidation does not clobber user edits.
    pub populated: bool,
    /// Persisted message from the last failed submission.
    pub error: Option<String>,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }
}
