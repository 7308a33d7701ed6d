pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactDraft, ContactId},
    search::filter_contacts,
    store::{ContactStore, LoadOutcome, STORAGE_KEY},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, FileStorage, KeyValueStorage, MemStorage};
pub use crate::ui::{ContactUi, ContactView, EditMode, RowAction, TerminalView, UiEvent};
