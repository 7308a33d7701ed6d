//! Presentation layer.
//!
//! [`ContactUi`] owns the [`ContactStore`](crate::domain::store::ContactStore)
//! and the editing state, and talks to the user only through a
//! [`ContactView`]. Any front end (terminal, test harness, ...) plugs in by
//! implementing that trait.

pub mod controller;
pub mod terminal;

use crate::prelude::{AppError, Contact, ContactDraft, ContactId};

pub use controller::ContactUi;
pub use terminal::TerminalView;

pub const ADD_LABEL: &str = "Add Contact";
pub const UPDATE_LABEL: &str = "Update Contact";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";
pub const NO_MATCHES_TEXT: &str = "No contacts found.";

/// Affordances attached to each rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(ContactId),
    Delete(ContactId),
}

/// A user gesture delivered by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The entry form was submitted.
    Submit,
    RowAction(RowAction),
    /// The search field now holds this text.
    SearchInput(String),
    /// Redraw the full list, dropping any search view.
    ShowAll,
    Quit,
}

/// Whether the entry form is creating a new contact or editing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ContactId),
}

impl EditMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            EditMode::Idle => ADD_LABEL,
            EditMode::Editing(_) => UPDATE_LABEL,
        }
    }
}

/// What a front end must provide to drive the contact book.
pub trait ContactView {
    /// Replace whatever list is shown with `contacts`.
    fn render_list(&mut self, contacts: &[&Contact]) -> Result<(), AppError>;

    /// A search matched nothing. Full renders of an empty book never get here.
    fn render_no_matches(&mut self) -> Result<(), AppError> {
        self.render_list(&[])
    }

    fn render_count(&mut self, count: usize) -> Result<(), AppError>;

    fn read_form_values(&self) -> ContactDraft;

    fn fill_form(&mut self, draft: &ContactDraft) -> Result<(), AppError>;

    fn clear_form(&mut self) -> Result<(), AppError>;

    fn set_submit_label(&mut self, label: &str) -> Result<(), AppError>;

    fn confirm(&mut self, message: &str) -> Result<bool, AppError>;

    /// Block until the next gesture. `None` means the user went away.
    fn next_event(&mut self) -> Result<Option<UiEvent>, AppError>;
}
